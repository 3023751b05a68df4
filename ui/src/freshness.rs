//! The freshness window that follows each new block.
//!
//! A window opens when a new block number is observed and closes after
//! [`FRESHNESS_WINDOW`]. At most one closing timer is alive at a time: a
//! newer block cancels the pending timer before arming its own, and tearing
//! the window down cancels whatever is still pending.

use std::time::Duration;

use api::chain::BlockNumber;

/// How long the status bar stays "fresh" after a new block.
pub const FRESHNESS_WINDOW: Duration = Duration::from_millis(1000);

/// A handle to a scheduled callback that can be called off before it fires.
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for dioxus::core::Task {
    fn cancel(self) {
        dioxus::core::Task::cancel(self)
    }
}

/// Tracks the fresh flag and owns the timer that will clear it.
#[derive(Debug)]
pub struct FreshnessWindow<H: Cancel> {
    fresh: bool,
    last_seen: Option<BlockNumber>,
    pending: Option<H>,
    torn_down: bool,
}

impl<H: Cancel> Default for FreshnessWindow<H> {
    fn default() -> Self {
        Self {
            fresh: false,
            last_seen: None,
            pending: None,
            torn_down: false,
        }
    }
}

impl<H: Cancel> FreshnessWindow<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Feeds the latest block number into the window.
    ///
    /// When `block` is present and differs from the last one seen, any pending
    /// timer is cancelled, the window opens, and `arm` is called to schedule
    /// the closing timer. Returns `true` if the window was (re)opened.
    ///
    /// An absent block number arms nothing and leaves the flag alone, but
    /// it is remembered: the next present value counts as a change even if
    /// it equals the one seen before the gap.
    pub fn observe(&mut self, block: Option<&BlockNumber>, arm: impl FnOnce() -> H) -> bool {
        let Some(block) = block else {
            self.last_seen = None;
            return false;
        };
        if self.torn_down || self.last_seen.as_ref() == Some(block) {
            return false;
        }

        self.cancel_pending();
        self.last_seen = Some(block.clone());
        self.fresh = true;
        self.pending = Some(arm());
        true
    }

    /// Called by the timer when it fires. Closes the window.
    pub fn expire(&mut self) {
        if self.torn_down {
            return;
        }
        // the timer has already fired, so there is nothing left to cancel.
        self.pending = None;
        self.fresh = false;
    }

    /// Cancels any pending timer. Later calls to `observe` and `expire` are ignored.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.torn_down = true;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

impl<H: Cancel> Drop for FreshnessWindow<H> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
