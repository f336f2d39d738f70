//! Capabilities the host UI provides to a session
//!
//! The session never reaches into widgets directly. Each host (a GUI, a
//! webview bridge, a headless CLI, a test harness) implements these traits.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::editable::SelectionRange;
use crate::scroll_sync::ScrollMetrics;

/// A scrollable pane
pub trait ScrollSurface {
    fn scroll_metrics(&self) -> ScrollMetrics;
    fn set_scroll_offset(&mut self, offset: f64);
}

/// The editable text pane: scrollable, with an addressable selection
pub trait EditorSurface: ScrollSurface {
    /// Current selection in char offsets
    fn selection(&self) -> SelectionRange;
    fn set_selection(&mut self, range: SelectionRange);
}

/// Blocking prompts and notices
pub trait Dialogs {
    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text; `None` when cancelled
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String>;

    /// Show a notice
    fn alert(&mut self, message: &str);
}

/// Dialogs for hosts without a UI: confirms nothing, answers no prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialogs;

impl Dialogs for NoDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!("declining confirmation without a UI: {}", message);
        false
    }

    fn prompt_text(&mut self, _message: &str, _default: &str) -> Option<String> {
        None
    }

    fn alert(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Source of the current instant for timers
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock; clones share the same time
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
