// src/algorithms/fixed_window.rs

//! Fixed window admission state.
//!
//! Time is divided into discrete windows aligned to multiples of the window
//! size, each with an integer request counter. This intentionally permits the
//! well-known boundary burst: up to twice the limit can land in a short span
//! straddling a window boundary. That is the documented trade-off of the
//! algorithm, preserved here and pinned by `boundary_burst_is_permitted`.

// dependencies
use super::{Decision, NANOS_PER_SEC, Snapshot};

#[derive(Debug)]
pub(crate) struct FixedWindow {
    /// Start of the current window, aligned to a multiple of `window_nanos`
    window_start_nanos: u64,
    count: u64,
    limit: u64,
    window_nanos: u64,
    last_update_nanos: u64,
}

impl FixedWindow {
    pub(crate) fn new(limit: u64, window_nanos: u64) -> Self {
        Self {
            window_start_nanos: 0,
            count: 0,
            limit,
            window_nanos,
            last_update_nanos: 0,
        }
    }

    pub(crate) fn evaluate(&mut self, now: u64) -> Decision {
        // clamp a regressing clock so the window index never moves backward
        let now = now.max(self.last_update_nanos);
        self.last_update_nanos = now;

        let current_window = now / self.window_nanos;
        if current_window != self.window_start_nanos / self.window_nanos {
            self.count = 0;
            self.window_start_nanos = current_window * self.window_nanos;
        }

        if self.count < self.limit {
            self.count += 1;
            Decision {
                allowed: true,
                retry_after_seconds: None,
                remaining: (self.limit - self.count) as f64,
                reset_time_nanos: self.window_start_nanos + self.window_nanos,
            }
        } else {
            let retry_nanos = (self.window_start_nanos + self.window_nanos).saturating_sub(now);
            Decision {
                allowed: false,
                retry_after_seconds: Some(retry_nanos as f64 / NANOS_PER_SEC),
                remaining: 0.0,
                reset_time_nanos: self.window_start_nanos + self.window_nanos,
            }
        }
    }

    pub(crate) fn peek(&self, now: u64) -> Snapshot {
        // same regression clamp as evaluate: a regressed clock must not make
        // the live window look lapsed and empty
        let now = now.max(self.last_update_nanos);
        let current_window = now / self.window_nanos;
        if current_window != self.window_start_nanos / self.window_nanos {
            // the stored window has lapsed; a fresh one would start empty
            Snapshot {
                remaining: self.limit as f64,
                reset_time_nanos: (current_window + 1) * self.window_nanos,
            }
        } else {
            Snapshot {
                remaining: self.limit.saturating_sub(self.count) as f64,
                reset_time_nanos: self.window_start_nanos + self.window_nanos,
            }
        }
    }

    pub(crate) fn last_updated_nanos(&self) -> u64 {
        self.last_update_nanos
    }
}
