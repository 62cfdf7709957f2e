//! Cancellable debounce timer.
//!
//! Each call to [`Debouncer::schedule`] cancels any pending timeout and
//! arms a new one, so only the last input inside the debounce window
//! fires. Dropping the debouncer cancels the pending timer.

use gloo_timers::callback::Timeout;

/// A single-slot cancellable timer.
pub struct Debouncer {
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the timer for `delay_ms`, cancelling any pending one. Each
    /// new keystroke resets the window rather than queuing callbacks.
    pub fn schedule<F: FnOnce() + 'static>(&mut self, delay_ms: u32, callback: F) {
        // Replacing the slot drops the old Timeout, which cancels it.
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    /// Cancel without rescheduling.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
