//! Document session - the composition root
//!
//! Owns the buffer-of-record and wires the engines to the host capabilities.
//! State changes go through [`crate::update::update`]; this module holds the
//! state and the operations the update handlers share.

use std::time::Instant;

use crate::commands::Cmd;
use crate::config::SessionConfig;
use crate::editable::{apply, EditCommand, SelectionRange};
use crate::host::{Clock, Dialogs, EditorSurface, NoDialogs, ScrollSurface, SystemClock};
use crate::markdown::{CmarkRenderer, MarkupRenderer, RenderedView};
use crate::outline::{extract, Outline};
use crate::persistence::PersistenceScheduler;
use crate::sample::SAMPLE_DOCUMENT;
use crate::scroll_sync::{Pane, ScrollSyncController};
use crate::storage::Storage;
use crate::timer::earliest;

/// An editing session over a single document
pub struct Session {
    pub(crate) text: String,
    pub(crate) revision: u64,
    pub(crate) view: RenderedView,
    pub(crate) config: SessionConfig,
    pub(crate) scroll_sync: ScrollSyncController,
    pub(crate) scroll_sync_enabled: bool,
    pub(crate) persistence: PersistenceScheduler,
    pub(crate) storage: Box<dyn Storage>,
    pub(crate) renderer: Box<dyn MarkupRenderer>,
    pub(crate) dialogs: Box<dyn Dialogs>,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) editor: Option<Box<dyn EditorSurface>>,
    pub(crate) preview: Option<Box<dyn ScrollSurface>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("revision", &self.revision)
            .field("chars", &self.char_count())
            .field("config", &self.config)
            .field("has_editor", &self.editor.is_some())
            .field("has_preview", &self.preview.is_some())
            .finish()
    }
}

/// Builder for [`Session`]
pub struct SessionBuilder {
    storage: Box<dyn Storage>,
    config: SessionConfig,
    renderer: Box<dyn MarkupRenderer>,
    dialogs: Box<dyn Dialogs>,
    clock: Box<dyn Clock>,
    editor: Option<Box<dyn EditorSurface>>,
    preview: Option<Box<dyn ScrollSurface>>,
}

impl SessionBuilder {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            config: SessionConfig::default(),
            renderer: Box::new(CmarkRenderer),
            dialogs: Box::new(NoDialogs),
            clock: Box::new(SystemClock),
            editor: None,
            preview: None,
        }
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn renderer(mut self, renderer: impl MarkupRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn dialogs(mut self, dialogs: impl Dialogs + 'static) -> Self {
        self.dialogs = Box::new(dialogs);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn editor(mut self, editor: impl EditorSurface + 'static) -> Self {
        self.editor = Some(Box::new(editor));
        self
    }

    pub fn preview(mut self, preview: impl ScrollSurface + 'static) -> Self {
        self.preview = Some(Box::new(preview));
        self
    }

    /// Load the document and render the first view.
    ///
    /// Returns the session and the commands for the initial view. Loading
    /// never schedules a save.
    pub fn build(self) -> (Session, Cmd) {
        let text = load_initial_text(self.storage.as_ref());

        let mut session = Session {
            text,
            revision: 0,
            view: RenderedView::default(),
            scroll_sync: ScrollSyncController::new(self.config.scroll_sync_window()),
            scroll_sync_enabled: self.config.scroll_sync_enabled,
            persistence: PersistenceScheduler::new(self.config.save_debounce()),
            config: self.config,
            storage: self.storage,
            renderer: self.renderer,
            dialogs: self.dialogs,
            clock: self.clock,
            editor: self.editor,
            preview: self.preview,
        };

        tracing::info!("Session started ({} chars)", session.char_count());
        let cmd = session.render();
        (session, cmd)
    }
}

fn load_initial_text(storage: &dyn Storage) -> String {
    match storage.load() {
        Ok(Some(text)) if !text.is_empty() => {
            tracing::debug!("Restored document ({} bytes)", text.len());
            text
        }
        Ok(_) => {
            tracing::debug!("No stored document, using sample");
            SAMPLE_DOCUMENT.to_string()
        }
        Err(e) => {
            tracing::warn!("Failed to load document, using sample: {}", e);
            SAMPLE_DOCUMENT.to_string()
        }
    }
}

impl Session {
    /// The buffer-of-record
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Increases on every buffer replacement
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Latest rendered view
    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    pub fn outline(&self) -> &Outline {
        &self.view.outline
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Document length in chars
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn scroll_sync_enabled(&self) -> bool {
        self.scroll_sync_enabled
    }

    pub fn has_pending_save(&self) -> bool {
        self.persistence.has_pending()
    }

    /// When the host should next send `Msg::Tick`
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(
            self.persistence.next_deadline(),
            self.scroll_sync.next_deadline(),
        )
    }

    pub fn attach_editor(&mut self, editor: impl EditorSurface + 'static) {
        self.editor = Some(Box::new(editor));
    }

    /// Without an editor, text commands append to the end of the buffer
    pub fn detach_editor(&mut self) {
        self.editor = None;
    }

    pub fn attach_preview(&mut self, preview: impl ScrollSurface + 'static) {
        self.preview = Some(Box::new(preview));
    }

    pub fn detach_preview(&mut self) {
        self.preview = None;
    }

    /// End the session. A pending save is dropped, not flushed.
    pub fn shutdown(&mut self) {
        self.persistence.cancel();
        self.scroll_sync.reset();
        tracing::info!("Session closed at revision {}", self.revision);
    }

    pub(crate) fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Replace the buffer-of-record, schedule a save and re-render
    pub(crate) fn replace_text(&mut self, text: String) -> Cmd {
        self.text = text;
        self.revision += 1;
        let now = self.now();
        self.persistence.notify_change(&self.text, now);
        tracing::debug!(revision = self.revision, "buffer replaced");
        self.render()
    }

    /// Apply a text command at the editor's current selection
    pub(crate) fn apply_edit(&mut self, command: &EditCommand) -> Cmd {
        let selection = self.editor.as_ref().map(|editor| editor.selection());
        let mutation = apply(&self.text, selection, command);
        let cmd = self.replace_text(mutation.text);

        if let (Some(range), Some(editor)) = (mutation.selection, self.editor.as_mut()) {
            editor.set_selection(range);
        }

        cmd
    }

    /// Current selection, if an editor is attached
    pub fn selection(&self) -> Option<SelectionRange> {
        self.editor.as_ref().map(|editor| editor.selection())
    }

    /// Recompute outline and preview for the current revision
    pub(crate) fn render(&mut self) -> Cmd {
        let (outline, stripped) = extract(&self.text).into_parts();
        let body = self.renderer.render(&stripped);
        self.view = RenderedView::new(self.revision, outline, body, Some(&self.view));

        let mut cmds = vec![Cmd::PublishView(self.view.clone())];
        cmds.extend(
            self.view
                .pending_diagrams()
                .map(|(slot, source)| Cmd::RenderDiagram {
                    revision: self.revision,
                    slot,
                    source: source.to_string(),
                }),
        );
        Cmd::batch(cmds)
    }

    /// Write the buffer to storage, logging failures
    pub(crate) fn save(&mut self, text: &str) {
        match self.storage.save(text) {
            Ok(()) => tracing::debug!("Document saved ({} bytes)", text.len()),
            Err(e) => tracing::warn!("Failed to save document: {}", e),
        }
    }

    /// Scroll an attached pane to `fraction` of its range
    pub(crate) fn scroll_pane_to(&mut self, pane: Pane, fraction: f64) {
        match pane {
            Pane::Editor => {
                if let Some(editor) = self.editor.as_mut() {
                    scroll_surface_to(&mut **editor, fraction);
                }
            }
            Pane::Preview => {
                if let Some(preview) = self.preview.as_mut() {
                    scroll_surface_to(&mut **preview, fraction);
                }
            }
        }
    }
}

fn scroll_surface_to<S: ScrollSurface + ?Sized>(surface: &mut S, fraction: f64) {
    let offset = surface.scroll_metrics().offset_for(fraction);
    surface.set_scroll_offset(offset);
}
