//! Scroll position mirroring between the editor and preview panes
//!
//! A scroll in one pane is mirrored to the other as a fraction of the
//! scrollable range. The pane that drove a sync raises its suppression flag
//! for a short window; scroll events from the other pane arriving inside that
//! window are echoes of the sync and are not propagated back.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::timer::{earliest, DebounceTimer};

/// Default suppression window
pub const SCROLL_SYNC_WINDOW_MS: u64 = 100;

/// One of the two synchronized panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pane {
    Editor,
    Preview,
}

impl Pane {
    pub fn other(self) -> Pane {
        match self {
            Pane::Editor => Pane::Preview,
            Pane::Preview => Pane::Editor,
        }
    }
}

/// Scroll geometry of a pane (in pixels or any consistent unit)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top
    pub offset: f64,
    /// Total scrollable content height
    pub extent: f64,
    /// Visible height
    pub viewport: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, extent: f64, viewport: f64) -> Self {
        Self {
            offset,
            extent,
            viewport,
        }
    }

    /// Maximum scroll offset; zero when the content fits
    pub fn max_offset(&self) -> f64 {
        (self.extent - self.viewport).max(0.0)
    }

    /// Position within the scrollable range, in `[0, 1]`.
    /// Content without overflow is always at fraction 0.
    pub fn fraction(&self) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        clamp_fraction(self.offset / max)
    }

    /// Scroll offset corresponding to `fraction` in this pane
    pub fn offset_for(&self, fraction: f64) -> f64 {
        clamp_fraction(fraction) * self.max_offset()
    }
}

/// Clamp a fraction into `[0, 1]`, mapping NaN to 0
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Scroll position to apply to a pane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTarget {
    pub pane: Pane,
    pub fraction: f64,
}

#[derive(Debug, Clone)]
struct Suppression {
    active: bool,
    reset: DebounceTimer,
}

impl Suppression {
    fn new(window: Duration) -> Self {
        Self {
            active: false,
            reset: DebounceTimer::new(window),
        }
    }
}

/// Mirrors scroll positions between the two panes without feedback loops
#[derive(Debug, Clone)]
pub struct ScrollSyncController {
    editor: Suppression,
    preview: Suppression,
}

impl ScrollSyncController {
    pub fn new(window: Duration) -> Self {
        Self {
            editor: Suppression::new(window),
            preview: Suppression::new(window),
        }
    }

    fn suppression(&self, pane: Pane) -> &Suppression {
        match pane {
            Pane::Editor => &self.editor,
            Pane::Preview => &self.preview,
        }
    }

    fn suppression_mut(&mut self, pane: Pane) -> &mut Suppression {
        match pane {
            Pane::Editor => &mut self.editor,
            Pane::Preview => &mut self.preview,
        }
    }

    /// Whether `pane` recently drove a sync
    pub fn is_suppressed(&self, pane: Pane) -> bool {
        self.suppression(pane).active
    }

    /// Handle a scroll event in `pane` at `fraction`.
    ///
    /// Returns the position the other pane should scroll to, or `None` when
    /// the event is an echo of a sync the other pane drove.
    pub fn on_scroll(&mut self, pane: Pane, fraction: f64, now: Instant) -> Option<ScrollTarget> {
        if self.is_suppressed(pane.other()) {
            tracing::trace!(?pane, "scroll echo suppressed");
            return None;
        }

        let own = self.suppression_mut(pane);
        own.active = true;
        own.reset.reschedule(now);

        Some(ScrollTarget {
            pane: pane.other(),
            fraction: clamp_fraction(fraction),
        })
    }

    /// Clear suppression flags whose window has elapsed
    pub fn poll(&mut self, now: Instant) {
        for pane in [Pane::Editor, Pane::Preview] {
            let suppression = self.suppression_mut(pane);
            if suppression.reset.poll(now) {
                suppression.active = false;
                tracing::trace!(?pane, "scroll suppression cleared");
            }
        }
    }

    /// Earliest pending flag reset
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(self.editor.reset.deadline(), self.preview.reset.deadline())
    }

    /// Drop all suppression state
    pub fn reset(&mut self) {
        for pane in [Pane::Editor, Pane::Preview] {
            let suppression = self.suppression_mut(pane);
            suppression.active = false;
            suppression.reset.cancel();
        }
    }
}

impl Default for ScrollSyncController {
    fn default() -> Self {
        Self::new(Duration::from_millis(SCROLL_SYNC_WINDOW_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(SCROLL_SYNC_WINDOW_MS);

    #[test]
    fn test_fraction_without_overflow_is_zero() {
        let metrics = ScrollMetrics::new(0.0, 300.0, 300.0);
        assert_eq!(metrics.fraction(), 0.0);
        let metrics = ScrollMetrics::new(10.0, 200.0, 300.0);
        assert_eq!(metrics.fraction(), 0.0);
    }

    #[test]
    fn test_fraction_and_offset() {
        let metrics = ScrollMetrics::new(250.0, 1000.0, 500.0);
        assert!((metrics.fraction() - 0.5).abs() < 1e-9);

        let other = ScrollMetrics::new(0.0, 2500.0, 500.0);
        assert!((other.offset_for(0.5) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_clamped() {
        assert_eq!(ScrollMetrics::new(900.0, 1000.0, 500.0).fraction(), 1.0);
        assert_eq!(ScrollMetrics::new(-5.0, 1000.0, 500.0).fraction(), 0.0);
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn test_scroll_propagates_to_other_pane() {
        let mut sync = ScrollSyncController::default();
        let now = Instant::now();

        let target = sync.on_scroll(Pane::Editor, 0.42, now).unwrap();
        assert_eq!(target.pane, Pane::Preview);
        assert!((target.fraction - 0.42).abs() < 1e-9);
        assert!(sync.is_suppressed(Pane::Editor));
    }

    #[test]
    fn test_echo_within_window_is_suppressed() {
        let mut sync = ScrollSyncController::default();
        let now = Instant::now();

        sync.on_scroll(Pane::Editor, 0.3, now);
        // The preview's own scroll event caused by the sync
        let echo = sync.on_scroll(Pane::Preview, 0.3, now + Duration::from_millis(5));
        assert!(echo.is_none());
        assert!(!sync.is_suppressed(Pane::Preview));
    }

    #[test]
    fn test_preview_drives_after_window_elapses() {
        let mut sync = ScrollSyncController::default();
        let now = Instant::now();

        sync.on_scroll(Pane::Editor, 0.3, now);
        sync.poll(now + WINDOW);
        assert!(!sync.is_suppressed(Pane::Editor));

        let target = sync
            .on_scroll(Pane::Preview, 0.8, now + WINDOW + Duration::from_millis(1))
            .unwrap();
        assert_eq!(target.pane, Pane::Editor);
    }

    #[test]
    fn test_continued_scrolling_extends_window() {
        let mut sync = ScrollSyncController::default();
        let now = Instant::now();

        sync.on_scroll(Pane::Editor, 0.1, now);
        sync.on_scroll(Pane::Editor, 0.2, now + Duration::from_millis(80));
        sync.poll(now + WINDOW);
        assert!(sync.is_suppressed(Pane::Editor));
        assert_eq!(
            sync.next_deadline(),
            Some(now + Duration::from_millis(80) + WINDOW)
        );
    }

    #[test]
    fn test_independent_pane_timers() {
        let mut sync = ScrollSyncController::default();
        let now = Instant::now();

        sync.on_scroll(Pane::Editor, 0.1, now);
        sync.poll(now + WINDOW);
        sync.on_scroll(Pane::Preview, 0.5, now + WINDOW + Duration::from_millis(10));

        // Preview's timer does not clear or extend the editor's
        assert!(!sync.is_suppressed(Pane::Editor));
        assert!(sync.is_suppressed(Pane::Preview));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut sync = ScrollSyncController::default();
        let now = Instant::now();
        sync.on_scroll(Pane::Editor, 0.1, now);
        sync.reset();
        assert!(!sync.is_suppressed(Pane::Editor));
        assert_eq!(sync.next_deadline(), None);
    }
}
