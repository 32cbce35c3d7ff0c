// src/algorithms/sliding_window.rs

//! Sliding window admission state.
//!
//! Tracks the timestamps of admitted requests within the continuously moving
//! interval `[now - window, now]`. Admission is exact: the count of stored
//! timestamps is precisely the number of requests admitted inside the window,
//! with none of the fixed window's boundary slack.
//!
//! A timestamp exactly at the window's oldest edge still counts against the
//! limit; only strictly older entries are evicted. Memory is bounded by the
//! limit, since denied requests are never recorded.

// dependencies
use std::collections::VecDeque;

use super::{Decision, NANOS_PER_SEC, Snapshot};

#[derive(Debug)]
pub(crate) struct SlidingWindow {
    /// Admitted request timestamps in insertion (and therefore chronological)
    /// order; eviction is a prefix trim.
    timestamps: VecDeque<u64>,
    limit: u64,
    window_nanos: u64,
    last_update_nanos: u64,
}

impl SlidingWindow {
    pub(crate) fn new(limit: u64, window_nanos: u64) -> Self {
        Self {
            timestamps: VecDeque::with_capacity(limit as usize),
            limit,
            window_nanos,
            last_update_nanos: 0,
        }
    }

    pub(crate) fn evaluate(&mut self, now: u64) -> Decision {
        // clamp a regressing clock so pushed timestamps stay in order
        let now = now.max(self.last_update_nanos);
        self.last_update_nanos = now;

        let cutoff = now.saturating_sub(self.window_nanos);
        while let Some(&oldest) = self.timestamps.front() {
            if oldest < cutoff {
                self.timestamps.pop_front();
            } else {
                break;
            }
        }

        if (self.timestamps.len() as u64) < self.limit {
            self.timestamps.push_back(now);
            Decision {
                allowed: true,
                retry_after_seconds: None,
                remaining: (self.limit - self.timestamps.len() as u64) as f64,
                reset_time_nanos: self.reset_time(now),
            }
        } else {
            // time until the oldest admitted request exits the window; for a
            // zero-limit window nothing ever exits, so report a full window
            let retry_nanos = self
                .timestamps
                .front()
                .map_or(self.window_nanos, |&oldest| {
                    (oldest + self.window_nanos).saturating_sub(now)
                });
            Decision {
                allowed: false,
                retry_after_seconds: Some(retry_nanos as f64 / NANOS_PER_SEC),
                remaining: 0.0,
                reset_time_nanos: self.reset_time(now),
            }
        }
    }

    pub(crate) fn peek(&self, now: u64) -> Snapshot {
        // same regression clamp as evaluate
        let now = now.max(self.last_update_nanos);
        let cutoff = now.saturating_sub(self.window_nanos);
        let count = self.timestamps.iter().filter(|&&ts| ts >= cutoff).count() as u64;
        Snapshot {
            remaining: self.limit.saturating_sub(count) as f64,
            reset_time_nanos: self.reset_time(now),
        }
    }

    pub(crate) fn last_updated_nanos(&self) -> u64 {
        self.last_update_nanos
    }

    /// Instant at which every recorded request has left the window.
    fn reset_time(&self, now: u64) -> u64 {
        self.timestamps
            .back()
            .map_or(now, |&newest| newest + self.window_nanos)
    }
}
