// src/algorithms/mod.rs

//! The four admission state machines and the values they produce.
//!
//! Each algorithm is an independent state machine over nanosecond timestamps
//! with one shared contract: `evaluate(now)` mutates the state and returns a
//! [`Decision`]; `peek(now)` reports headroom without mutating anything.
//! Dispatch is a tagged enum selected once at limiter construction.

// algorithm modules
mod fixed_window;
mod leaky_bucket;
mod sliding_window;
mod token_bucket;

pub(crate) use fixed_window::FixedWindow;
pub(crate) use leaky_bucket::LeakyBucket;
pub(crate) use sliding_window::SlidingWindow;
pub(crate) use token_bucket::TokenBucket;

use crate::config::{Algorithm, RateLimiterConfig};

pub(crate) const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Seconds elapsed between two nanosecond timestamps.
/// Saturates to zero when `now` is earlier than `last`, so a regressing clock
/// reads as "no time passed" instead of producing negative credit.
pub(crate) fn elapsed_secs(now: u64, last: u64) -> f64 {
    now.saturating_sub(last) as f64 / NANOS_PER_SEC
}

pub(crate) fn secs_to_nanos(secs: f64) -> u64 {
    (secs * NANOS_PER_SEC) as u64
}

/// Result of a rate limiting decision with metadata for HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Whether the request should be allowed
    pub allowed: bool,
    /// Seconds until the request would be admitted (when denied). Advisory
    /// only; nothing enforces that the caller waits.
    pub retry_after_seconds: Option<f64>,
    /// Current headroom: whole requests admissible right now
    pub remaining: f64,
    /// When full capacity (or the next window) is available, in nanoseconds
    pub reset_time_nanos: u64,
}

/// Read-only view of an entity's current headroom.
///
/// `Snapshot::default()` (all zeros) is returned for entities never seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Snapshot {
    /// Whole requests admissible right now
    pub remaining: f64,
    /// When full capacity (or the next window) is available, in nanoseconds
    pub reset_time_nanos: u64,
}

/// Per-entity admission state, tagged by algorithm.
///
/// Created once per tracked entity and mutated only inside `evaluate`, under
/// the owning limiter's map guard.
#[derive(Debug)]
pub(crate) enum AlgorithmState {
    TokenBucket(TokenBucket),
    LeakyBucket(LeakyBucket),
    SlidingWindow(SlidingWindow),
    FixedWindow(FixedWindow),
}

impl AlgorithmState {
    pub(crate) fn new(algorithm: Algorithm, config: &RateLimiterConfig, now: u64) -> Self {
        match algorithm {
            Algorithm::TokenBucket => {
                Self::TokenBucket(TokenBucket::new(config.rate_per_second, config.capacity, now))
            }
            Algorithm::LeakyBucket => {
                Self::LeakyBucket(LeakyBucket::new(config.rate_per_second, config.capacity, now))
            }
            Algorithm::SlidingWindow => Self::SlidingWindow(SlidingWindow::new(
                config.capacity as u64,
                secs_to_nanos(config.window_secs),
            )),
            Algorithm::FixedWindow => Self::FixedWindow(FixedWindow::new(
                config.capacity as u64,
                secs_to_nanos(config.window_secs),
            )),
        }
    }

    /// Run the admission decision at time `now`.
    pub(crate) fn evaluate(&mut self, now: u64) -> Decision {
        match self {
            Self::TokenBucket(state) => state.evaluate(now),
            Self::LeakyBucket(state) => state.evaluate(now),
            Self::SlidingWindow(state) => state.evaluate(now),
            Self::FixedWindow(state) => state.evaluate(now),
        }
    }

    /// Report headroom at time `now` without consuming anything.
    pub(crate) fn peek(&self, now: u64) -> Snapshot {
        match self {
            Self::TokenBucket(state) => state.peek(now),
            Self::LeakyBucket(state) => state.peek(now),
            Self::SlidingWindow(state) => state.peek(now),
            Self::FixedWindow(state) => state.peek(now),
        }
    }

    /// Nanosecond timestamp of the last state mutation, used for staleness
    /// cleanup. Never moves backward.
    pub(crate) fn last_updated_nanos(&self) -> u64 {
        match self {
            Self::TokenBucket(state) => state.last_updated_nanos(),
            Self::LeakyBucket(state) => state.last_updated_nanos(),
            Self::SlidingWindow(state) => state.last_updated_nanos(),
            Self::FixedWindow(state) => state.last_updated_nanos(),
        }
    }
}
