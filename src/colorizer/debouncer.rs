//! Debouncer for document recomputation
//!
//! Delays re-scanning a document until edits stop arriving for the configured
//! time-out, so a burst of keystrokes results in a single update.

use std::time::{Duration, Instant};

/// Tracks when the last edit arrived and whether an update is pending.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Debounce delay in milliseconds
    delay_ms: u64,
    /// Timestamp of the last edit that triggered a debounce
    last_input_time: Option<Instant>,
    /// Whether there's a pending update waiting for the delay to expire
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_input_time: None,
            pending: false,
        }
    }

    /// Schedule an update; each call restarts the timer.
    pub fn schedule_at(&mut self, now: Instant) {
        self.last_input_time = Some(now);
        self.pending = true;
    }

    /// Cancel any pending update.
    pub fn cancel(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    /// True once an update is pending and `delay_ms` has elapsed since the last edit.
    pub fn is_ready_at(&self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => {
                now.saturating_duration_since(last_time) >= Duration::from_millis(self.delay_ms)
            }
            None => false,
        }
    }

    /// Mark the pending update as done.
    pub fn mark_complete(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TIME_OUT_MS)
    }
}
