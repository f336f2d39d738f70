//! Durable storage for the document buffer
//!
//! The document lives in a single named slot holding the raw text verbatim.
//! Callers treat every failure as recoverable: log it and keep editing.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Default slot name
pub const DEFAULT_SLOT: &str = "markdown-editor-content";

/// Errors from a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// No location is available for the slot (e.g. no home directory)
    #[error("No storage location available for slot {0}")]
    Unavailable(String),

    /// Reading the slot failed
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Writing the slot failed
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// Removing the slot failed
    #[error("Failed to remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },

    /// Backend-specific failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A named slot holding the document text
pub trait Storage {
    /// Load the slot; `Ok(None)` when nothing has been stored
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot content
    fn save(&mut self, text: &str) -> Result<(), StorageError>;

    /// Remove the slot
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Slot stored as a plain file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot file under the config directory (`~/.config/markpane/<slot>.md`)
    pub fn for_slot(slot: &str) -> Result<Self, StorageError> {
        crate::config_paths::slot_file(slot)
            .map(Self::new)
            .ok_or_else(|| StorageError::Unavailable(slot.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&mut self, text: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, text).map_err(write_err)?;

        tracing::debug!("Saved {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[derive(Debug, Default)]
struct MemorySlot {
    text: Option<String>,
    saves: usize,
}

/// In-memory slot; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<MemorySlot>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.slot.borrow_mut().text = Some(text.into());
        storage
    }

    /// Current slot content
    pub fn text(&self) -> Option<String> {
        self.slot.borrow().text.clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.slot.borrow().saves
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().text.clone())
    }

    fn save(&mut self, text: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.borrow_mut();
        slot.text = Some(text.to_string());
        slot.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.slot.borrow_mut().text = None;
        Ok(())
    }
}
