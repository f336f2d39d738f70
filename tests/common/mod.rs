//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use markpane::commands::Cmd;
use markpane::editable::SelectionRange;
use markpane::host::{Dialogs, EditorSurface, ManualClock, ScrollSurface};
use markpane::messages::Msg;
use markpane::scroll_sync::ScrollMetrics;
use markpane::storage::{MemoryStorage, Storage, StorageError};
use markpane::update::update;
use markpane::{Session, SessionBuilder, SessionConfig};

// ========================================================================
// Fake surfaces
// ========================================================================

#[derive(Debug, Default)]
pub struct EditorState {
    pub selection: SelectionRange,
    pub metrics: ScrollMetrics,
    /// Offsets written by scroll sync, in order
    pub scroll_writes: Vec<f64>,
}

/// Editor pane double; clones share state
#[derive(Debug, Clone, Default)]
pub struct FakeEditor {
    pub state: Rc<RefCell<EditorState>>,
}

impl FakeEditor {
    pub fn with_metrics(extent: f64, viewport: f64) -> Self {
        let editor = Self::default();
        editor.state.borrow_mut().metrics = ScrollMetrics::new(0.0, extent, viewport);
        editor
    }

    pub fn select(&self, start: usize, end: usize) {
        self.state.borrow_mut().selection = SelectionRange::new(start, end);
    }

    pub fn selection(&self) -> SelectionRange {
        self.state.borrow().selection
    }

    pub fn offset(&self) -> f64 {
        self.state.borrow().metrics.offset
    }

    pub fn scroll_writes(&self) -> Vec<f64> {
        self.state.borrow().scroll_writes.clone()
    }
}

impl ScrollSurface for FakeEditor {
    fn scroll_metrics(&self) -> ScrollMetrics {
        self.state.borrow().metrics
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        let mut state = self.state.borrow_mut();
        state.metrics.offset = offset;
        state.scroll_writes.push(offset);
    }
}

impl EditorSurface for FakeEditor {
    fn selection(&self) -> SelectionRange {
        self.state.borrow().selection
    }

    fn set_selection(&mut self, range: SelectionRange) {
        self.state.borrow_mut().selection = range;
    }
}

/// Preview pane double; clones share state
#[derive(Debug, Clone, Default)]
pub struct FakePane {
    pub metrics: Rc<RefCell<ScrollMetrics>>,
    pub writes: Rc<RefCell<Vec<f64>>>,
}

impl FakePane {
    pub fn with_metrics(extent: f64, viewport: f64) -> Self {
        let pane = Self::default();
        *pane.metrics.borrow_mut() = ScrollMetrics::new(0.0, extent, viewport);
        pane
    }

    pub fn offset(&self) -> f64 {
        self.metrics.borrow().offset
    }

    pub fn scroll_writes(&self) -> Vec<f64> {
        self.writes.borrow().clone()
    }
}

impl ScrollSurface for FakePane {
    fn scroll_metrics(&self) -> ScrollMetrics {
        *self.metrics.borrow()
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.metrics.borrow_mut().offset = offset;
        self.writes.borrow_mut().push(offset);
    }
}

// ========================================================================
// Canned dialogs
// ========================================================================

#[derive(Debug, Default)]
pub struct DialogLog {
    pub confirm_answers: VecDeque<bool>,
    pub prompt_answers: VecDeque<Option<String>>,
    pub confirms: Vec<String>,
    pub prompts: Vec<(String, String)>,
    pub alerts: Vec<String>,
}

/// Dialogs answered from queues; unanswered confirms say no, unanswered
/// prompts are cancelled
#[derive(Debug, Clone, Default)]
pub struct CannedDialogs {
    pub log: Rc<RefCell<DialogLog>>,
}

impl CannedDialogs {
    pub fn answer_confirm(&self, answer: bool) {
        self.log.borrow_mut().confirm_answers.push_back(answer);
    }

    pub fn answer_prompt(&self, answer: Option<&str>) {
        self.log
            .borrow_mut()
            .prompt_answers
            .push_back(answer.map(str::to_string));
    }

    pub fn alerts(&self) -> Vec<String> {
        self.log.borrow().alerts.clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.log.borrow().confirms.clone()
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.log.borrow().prompts.clone()
    }
}

impl Dialogs for CannedDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        let mut log = self.log.borrow_mut();
        log.confirms.push(message.to_string());
        log.confirm_answers.pop_front().unwrap_or(false)
    }

    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String> {
        let mut log = self.log.borrow_mut();
        log.prompts.push((message.to_string(), default.to_string()));
        log.prompt_answers.pop_front().flatten()
    }

    fn alert(&mut self, message: &str) {
        self.log.borrow_mut().alerts.push(message.to_string());
    }
}

// ========================================================================
// Failing storage
// ========================================================================

/// Storage whose every operation fails
#[derive(Debug, Clone, Default)]
pub struct BrokenStorage {
    pub attempts: Rc<RefCell<usize>>,
}

impl Storage for BrokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("disk on fire".to_string()))
    }

    fn save(&mut self, _text: &str) -> Result<(), StorageError> {
        *self.attempts.borrow_mut() += 1;
        Err(StorageError::Backend("quota exceeded".to_string()))
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        Err(StorageError::Backend("read-only".to_string()))
    }
}

// ========================================================================
// Session harness
// ========================================================================

/// A session wired to fakes, with handles to inspect them
pub struct Harness {
    pub session: Session,
    pub startup: Cmd,
    pub storage: MemoryStorage,
    pub clock: ManualClock,
    pub editor: FakeEditor,
    pub preview: FakePane,
    pub dialogs: CannedDialogs,
}

impl Harness {
    pub fn send(&mut self, msg: Msg) -> Option<Cmd> {
        update(&mut self.session, msg)
    }

    /// Advance the clock and deliver a tick
    pub fn advance(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        update(&mut self.session, Msg::Tick);
    }

    pub fn type_text(&mut self, text: &str) -> Option<Cmd> {
        self.send(Msg::BufferChanged(text.to_string()))
    }
}

/// Session over `stored` (or nothing) with default config
pub fn harness(stored: Option<&str>) -> Harness {
    harness_with_config(stored, SessionConfig::default())
}

pub fn harness_with_config(stored: Option<&str>, config: SessionConfig) -> Harness {
    let storage = match stored {
        Some(text) => MemoryStorage::with_text(text),
        None => MemoryStorage::new(),
    };
    let clock = ManualClock::new();
    let editor = FakeEditor::with_metrics(2000.0, 500.0);
    let preview = FakePane::with_metrics(4000.0, 500.0);
    let dialogs = CannedDialogs::default();

    let (session, startup) = SessionBuilder::new(storage.clone())
        .config(config)
        .clock(clock.clone())
        .dialogs(dialogs.clone())
        .editor(editor.clone())
        .preview(preview.clone())
        .build();

    Harness {
        session,
        startup,
        storage,
        clock,
        editor,
        preview,
        dialogs,
    }
}

/// The published view inside a command, if any
pub fn published_view(cmd: &Cmd) -> Option<&markpane::RenderedView> {
    match cmd {
        Cmd::PublishView(view) => Some(view),
        Cmd::Batch(cmds) => cmds.iter().find_map(published_view),
        _ => None,
    }
}

/// `(revision, slot, source)` of every diagram request in a command
pub fn diagram_requests(cmd: &Cmd) -> Vec<(u64, usize, String)> {
    cmd.clone()
        .flatten()
        .into_iter()
        .filter_map(|cmd| match cmd {
            Cmd::RenderDiagram {
                revision,
                slot,
                source,
            } => Some((revision, slot, source)),
            _ => None,
        })
        .collect()
}
