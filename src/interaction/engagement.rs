//! Decision logic for the one-shot engagement popup.
//!
//! Two independent triggers race: a fixed timer from mount, and a scroll
//! depth threshold held through a debounce window. Whichever fires first
//! presents the popup; the loser must never re-present it. The component
//! owns the actual timers and listeners; this state machine only decides,
//! which keeps the race auditable and testable off-browser.

use crate::config::POPUP_SCROLL_DEPTH;

/// What the component should do with its debounce timer after a scroll
/// sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// Depth crossed the threshold: arm the debounce timer.
    StartDebounce,
    /// Depth fell back below the threshold: cancel a pending timer.
    CancelDebounce,
    /// Nothing to change.
    None,
}

/// Single latch consulted (check-and-set) from both trigger paths.
#[derive(Debug, Default)]
pub struct EngagementScheduler {
    presented: bool,
    debounce_armed: bool,
}

impl EngagementScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll depth sample in `[0, 1]`.
    pub fn on_scroll(&mut self, depth: f64) -> ScrollAction {
        if self.presented {
            return ScrollAction::None;
        }
        if depth >= POPUP_SCROLL_DEPTH {
            if self.debounce_armed {
                ScrollAction::None
            } else {
                self.debounce_armed = true;
                ScrollAction::StartDebounce
            }
        } else if self.debounce_armed {
            self.debounce_armed = false;
            ScrollAction::CancelDebounce
        } else {
            ScrollAction::None
        }
    }

    /// The debounce timer elapsed. Returns true when the popup should
    /// present now.
    pub fn on_debounce_elapsed(&mut self) -> bool {
        self.debounce_armed = false;
        self.fire()
    }

    /// The fixed timer elapsed. Returns true when the popup should present
    /// now.
    pub fn on_timer_elapsed(&mut self) -> bool {
        self.fire()
    }

    pub fn presented(&self) -> bool {
        self.presented
    }

    fn fire(&mut self) -> bool {
        if self.presented {
            return false;
        }
        self.presented = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_presents_once() {
        let mut sched = EngagementScheduler::new();
        assert!(sched.on_timer_elapsed());
        assert!(!sched.on_timer_elapsed());
        assert!(sched.presented());
    }

    #[test]
    fn crossing_threshold_arms_debounce_once() {
        let mut sched = EngagementScheduler::new();
        assert_eq!(sched.on_scroll(0.80), ScrollAction::StartDebounce);
        // Further samples above the threshold keep the original deadline.
        assert_eq!(sched.on_scroll(0.90), ScrollAction::None);
        assert_eq!(sched.on_scroll(1.0), ScrollAction::None);
        assert!(sched.on_debounce_elapsed());
    }

    #[test]
    fn dropping_below_threshold_cancels() {
        let mut sched = EngagementScheduler::new();
        assert_eq!(sched.on_scroll(0.76), ScrollAction::StartDebounce);
        assert_eq!(sched.on_scroll(0.40), ScrollAction::CancelDebounce);
        assert_eq!(sched.on_scroll(0.40), ScrollAction::None);
        // Crossing again re-arms.
        assert_eq!(sched.on_scroll(0.80), ScrollAction::StartDebounce);
    }

    #[test]
    fn scroll_after_timer_never_represents() {
        let mut sched = EngagementScheduler::new();
        assert!(sched.on_timer_elapsed());
        assert_eq!(sched.on_scroll(1.0), ScrollAction::None);
        assert!(!sched.on_debounce_elapsed());
    }

    #[test]
    fn timer_after_scroll_never_represents() {
        let mut sched = EngagementScheduler::new();
        assert_eq!(sched.on_scroll(0.9), ScrollAction::StartDebounce);
        assert!(sched.on_debounce_elapsed());
        assert!(!sched.on_timer_elapsed());
    }

    #[test]
    fn both_triggers_in_one_flush_present_once() {
        // Both callbacks can land in the same task queue flush and run
        // back to back.
        let mut sched = EngagementScheduler::new();
        sched.on_scroll(0.9);
        let first = sched.on_debounce_elapsed();
        let second = sched.on_timer_elapsed();
        assert!(first);
        assert!(!second);
    }

    #[test]
    fn exact_threshold_counts() {
        let mut sched = EngagementScheduler::new();
        assert_eq!(sched.on_scroll(POPUP_SCROLL_DEPTH), ScrollAction::StartDebounce);
    }
}
