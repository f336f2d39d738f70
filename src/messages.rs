//! Message types for the Elm-style architecture
//!
//! All inbound events reach the session as a [`Msg`].

use crate::scroll_sync::Pane;
use crate::toolbar::ToolbarAction;

/// Top-level message
#[derive(Debug, Clone)]
pub enum Msg {
    /// The user edited the text directly; carries the whole new buffer
    BufferChanged(String),
    /// Tab key in the editor
    InsertTab,
    /// A toolbar button was pressed
    Toolbar(ToolbarAction),
    /// A pane scrolled to `fraction` of its scrollable range
    Scrolled { pane: Pane, fraction: f64 },
    /// Turn scroll mirroring on or off
    ToggleScrollSync,
    /// Timer check; the host sends this once `Session::next_deadline` passes
    Tick,
    /// Result of an async host operation
    Io(IoMsg),
}

/// Completions of commands the host ran asynchronously
#[derive(Debug, Clone)]
pub enum IoMsg {
    /// Diagram renderer finished a slot of a given revision
    DiagramRendered {
        revision: u64,
        slot: usize,
        result: Result<String, String>,
    },
    /// Clipboard text for a paste
    ClipboardRead(Result<String, String>),
    /// Outcome of copying the document
    ClipboardWritten(Result<(), String>),
    /// A picked image file, already encoded as a data URL
    ImageFileRead {
        file_name: String,
        mime_type: String,
        data_url: String,
    },
}
