//! Resize notification bridge.
//!
//! Whatever observes terminal geometry changes calls [`ResizeSignal::notify`];
//! the monitor loop drains the counter with [`ResizeSignal::take`] once its
//! blocking wait returns. `notify` is a single atomic increment so it may be
//! called from a signal handler.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Pending resize counter shared between the notifier and the monitor loop.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ResizeSignal {
    pending: Arc<AtomicUsize>,
}

impl ResizeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a resize as pending.
    pub fn notify(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    /// Clear the counter, returning whether any resize was pending.
    pub fn take(&self) -> bool {
        self.pending.swap(0, Ordering::SeqCst) > 0
    }
}
