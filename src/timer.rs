//! Deadline-based debounce timer
//!
//! A timer is either idle or pending with a deadline. Rescheduling always
//! replaces the previous deadline, so at most one firing is outstanding.
//! Nothing runs on its own: the owner polls with the current instant.

use std::time::{Duration, Instant};

/// Timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Pending { deadline: Instant },
}

/// A restartable one-shot timer
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    state: TimerState,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TimerState::Pending { .. })
    }

    /// Deadline of the pending firing, if any
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Idle => None,
            TimerState::Pending { deadline } => Some(deadline),
        }
    }

    /// Start (or restart) the timer from `now`, cancelling any earlier deadline
    pub fn reschedule(&mut self, now: Instant) {
        self.state = TimerState::Pending {
            deadline: now + self.delay,
        };
    }

    /// Drop the pending firing without running it
    pub fn cancel(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Returns true exactly once when the deadline has been reached,
    /// transitioning back to idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Pending { deadline } if now >= deadline => {
                self.state = TimerState::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of two optional deadlines
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
