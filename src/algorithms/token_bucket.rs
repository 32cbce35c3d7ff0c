// src/algorithms/token_bucket.rs

//! Token bucket admission state.
//!
//! Permits accumulate continuously at `rate_per_second` up to `capacity`, and
//! each admitted request consumes exactly one. The bucket starts full, so a
//! fresh entity can burst up to `capacity` requests immediately; this is a
//! deliberate policy choice, covered by `bucket_starts_full`.

// dependencies
use super::{Decision, Snapshot, elapsed_secs, secs_to_nanos};

#[derive(Debug)]
pub(crate) struct TokenBucket {
    /// Current token count, 0 <= tokens <= capacity. Fractional accumulation
    /// matters at low rates, so this is not an integer.
    tokens: f64,
    capacity: f64,
    rate_per_second: f64,
    last_update_nanos: u64,
}

impl TokenBucket {
    pub(crate) fn new(rate_per_second: f64, capacity: f64, now: u64) -> Self {
        Self {
            tokens: capacity,
            capacity,
            rate_per_second,
            last_update_nanos: now,
        }
    }

    pub(crate) fn evaluate(&mut self, now: u64) -> Decision {
        // clamp a regressing clock: no refill, no debit, and neither the
        // last-update timestamp nor the reported reset time moves backwards
        let now = now.max(self.last_update_nanos);
        let elapsed = elapsed_secs(now, self.last_update_nanos);
        self.tokens = (self.tokens + self.rate_per_second * elapsed).min(self.capacity);
        self.last_update_nanos = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            Decision {
                allowed: true,
                retry_after_seconds: None,
                remaining: self.tokens.floor(),
                reset_time_nanos: self.reset_time(now, self.tokens),
            }
        } else {
            Decision {
                allowed: false,
                retry_after_seconds: Some((1.0 - self.tokens) / self.rate_per_second),
                remaining: self.tokens.floor(),
                reset_time_nanos: self.reset_time(now, self.tokens),
            }
        }
    }

    pub(crate) fn peek(&self, now: u64) -> Snapshot {
        // same regression clamp as evaluate: a backwards clock must not move
        // the reported reset time backwards
        let now = now.max(self.last_update_nanos);
        let elapsed = elapsed_secs(now, self.last_update_nanos);
        let tokens = (self.tokens + self.rate_per_second * elapsed).min(self.capacity);
        Snapshot {
            remaining: tokens.floor(),
            reset_time_nanos: self.reset_time(now, tokens),
        }
    }

    pub(crate) fn last_updated_nanos(&self) -> u64 {
        self.last_update_nanos
    }

    /// Instant at which the bucket is full again.
    fn reset_time(&self, now: u64, tokens: f64) -> u64 {
        now + secs_to_nanos((self.capacity - tokens) / self.rate_per_second)
    }
}
