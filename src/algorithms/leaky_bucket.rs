// src/algorithms/leaky_bucket.rs

//! Leaky bucket admission state.
//!
//! A bounded queue drained at a constant rate. Each admitted request adds one
//! unit of depth; requests that would overflow the bucket are rejected. Unlike
//! the token bucket, no credit accumulates while idle: an empty bucket sits at
//! exactly zero depth, never negative.

// dependencies
use super::{Decision, Snapshot, elapsed_secs, secs_to_nanos};

#[derive(Debug)]
pub(crate) struct LeakyBucket {
    /// Current queue depth, 0 <= level <= capacity. Fractional because the
    /// drain is continuous.
    level: f64,
    capacity: f64,
    rate_per_second: f64,
    last_leak_nanos: u64,
}

impl LeakyBucket {
    pub(crate) fn new(rate_per_second: f64, capacity: f64, now: u64) -> Self {
        Self {
            level: 0.0,
            capacity,
            rate_per_second,
            last_leak_nanos: now,
        }
    }

    pub(crate) fn evaluate(&mut self, now: u64) -> Decision {
        // clamp a regressing clock: nothing leaks and the reported reset
        // time does not move backwards
        let now = now.max(self.last_leak_nanos);
        let elapsed = elapsed_secs(now, self.last_leak_nanos);
        self.level = (self.level - self.rate_per_second * elapsed).max(0.0);
        self.last_leak_nanos = now;

        if self.level + 1.0 <= self.capacity {
            self.level += 1.0;
            Decision {
                allowed: true,
                retry_after_seconds: None,
                // whole free slots; the level itself stays fractional
                remaining: (self.capacity - self.level).floor(),
                reset_time_nanos: self.reset_time(now, self.level),
            }
        } else {
            Decision {
                allowed: false,
                retry_after_seconds: Some((self.level + 1.0 - self.capacity) / self.rate_per_second),
                remaining: (self.capacity - self.level).max(0.0).floor(),
                reset_time_nanos: self.reset_time(now, self.level),
            }
        }
    }

    pub(crate) fn peek(&self, now: u64) -> Snapshot {
        // same regression clamp as evaluate
        let now = now.max(self.last_leak_nanos);
        let elapsed = elapsed_secs(now, self.last_leak_nanos);
        let level = (self.level - self.rate_per_second * elapsed).max(0.0);
        Snapshot {
            remaining: (self.capacity - level).floor(),
            reset_time_nanos: self.reset_time(now, level),
        }
    }

    pub(crate) fn last_updated_nanos(&self) -> u64 {
        self.last_leak_nanos
    }

    /// Instant at which the bucket has fully drained.
    fn reset_time(&self, now: u64, level: f64) -> u64 {
        now + secs_to_nanos(level / self.rate_per_second)
    }
}
