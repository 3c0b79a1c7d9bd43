use std::sync::Arc;
use std::sync::atomic::{ AtomicBool, Ordering };

use crate::utils::time::MINUTE_MS;

/// Refresh interval for relative-time labels
pub const REFRESH_INTERVAL_MS: u64 = MINUTE_MS;

/// Lifecycle of one label refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Active,
    Stopped,
}

/// Cancellation handle for one refresh cycle of a card's time label.
///
/// A handle starts `Active` and moves to `Stopped` exactly once: when the
/// owning card unmounts, or when its timestamp changes (the new timestamp
/// gets a fresh handle). A stopped handle never becomes active again, and
/// the refresh loop checks the handle before every recomputation, so no
/// label update happens after the transition.
#[derive(Debug, Clone, Default)]
pub struct TickerHandle {
    stopped: Arc<AtomicBool>,
}

impl TickerHandle {
    pub fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> TickerState {
        if self.stopped.load(Ordering::SeqCst) {
            TickerState::Stopped
        } else {
            TickerState::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == TickerState::Active
    }

    /// Stop the cycle. Returns true only for the call that performed the
    /// `Active -> Stopped` transition.
    pub fn cancel(&self) -> bool {
        !self.stopped.swap(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_handle_is_active() {
        let handle = TickerHandle::new();
        assert_eq!(handle.state(), TickerState::Active);
        assert!(handle.is_active());
    }

    #[test]
    fn cancel_transitions_exactly_once() {
        let handle = TickerHandle::new();
        assert!(handle.cancel());
        assert_eq!(handle.state(), TickerState::Stopped);

        // Further cancels are no-ops
        assert!(!handle.cancel());
        assert!(!handle.cancel());
        assert_eq!(handle.state(), TickerState::Stopped);
    }

    #[test]
    fn clones_share_the_same_cycle() {
        let handle = TickerHandle::new();
        let seen_by_task = handle.clone();

        assert!(seen_by_task.is_active());
        handle.cancel();
        assert!(!seen_by_task.is_active());
    }

    #[test]
    fn a_stopped_handle_skips_recomputation() {
        // Mirrors the card refresh loop: the label closure must not run
        // once the handle is stopped.
        let handle = TickerHandle::new();
        let mut recomputations = 0;

        for _ in 0..3 {
            if handle.is_active() {
                recomputations += 1;
            }
        }
        handle.cancel();
        for _ in 0..3 {
            if handle.is_active() {
                recomputations += 1;
            }
        }

        assert_eq!(recomputations, 3);
    }
}
