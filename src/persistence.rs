//! Debounced persistence of the document buffer
//!
//! Every change restarts the save timer; only the latest buffer value is
//! written once the editor has been idle for the debounce delay.

use std::time::{Duration, Instant};

use crate::timer::DebounceTimer;

/// Default idle time before a save
pub const SAVE_DEBOUNCE_MS: u64 = 1000;

/// Coalesces buffer changes into a single delayed save
#[derive(Debug, Clone)]
pub struct PersistenceScheduler {
    timer: DebounceTimer,
    pending: Option<String>,
}

impl PersistenceScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            timer: DebounceTimer::new(delay),
            pending: None,
        }
    }

    /// Record a buffer change and restart the debounce window
    pub fn notify_change(&mut self, text: &str, now: Instant) {
        self.pending = Some(text.to_string());
        self.timer.reschedule(now);
    }

    /// Returns the buffer to save once the debounce window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.timer.poll(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending save without writing it
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("pending save cancelled");
        }
        self.timer.cancel();
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}

impl Default for PersistenceScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(SAVE_DEBOUNCE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(SAVE_DEBOUNCE_MS);

    #[test]
    fn test_burst_of_changes_saves_last_value_once() {
        let start = Instant::now();
        let mut scheduler = PersistenceScheduler::default();

        for (i, text) in ["a", "ab", "abc"].iter().enumerate() {
            scheduler.notify_change(text, start + Duration::from_millis(i as u64 * 200));
        }

        assert_eq!(scheduler.poll(start + DELAY), None);
        let saved = scheduler.poll(start + Duration::from_millis(400) + DELAY);
        assert_eq!(saved.as_deref(), Some("abc"));
        assert_eq!(scheduler.poll(start + DELAY * 5), None);
    }

    #[test]
    fn test_isolated_changes_save_each() {
        let start = Instant::now();
        let mut scheduler = PersistenceScheduler::default();

        scheduler.notify_change("one", start);
        assert_eq!(scheduler.poll(start + DELAY).as_deref(), Some("one"));

        let later = start + DELAY * 3;
        scheduler.notify_change("two", later);
        assert_eq!(scheduler.poll(later + DELAY).as_deref(), Some("two"));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let start = Instant::now();
        let mut scheduler = PersistenceScheduler::default();
        scheduler.notify_change("draft", start);
        scheduler.cancel();

        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.poll(start + DELAY * 2), None);
        assert_eq!(scheduler.next_deadline(), None);
    }
}
