// src/clock.rs

// clock module definition and implementations

// dependencies
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Clock trait to abstract time retrieval.
/// Implementors must be thread-safe (Send + Sync).
/// The `now` method returns the current time in nanoseconds as a u64.
/// Injecting a clock lets the limiter run against deterministic time in tests
/// and simulations instead of the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<u64, ClockError>;
}

/// Clock error type
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClockError {
    #[error("system time is before the Unix epoch")]
    SystemTimeBeforeEpoch,
}

/// SystemClock implementation using the system time.
/// Returns the current time in nanoseconds since the Unix epoch.
/// This is the default clock used by the RateLimiter.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<u64, ClockError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .map_err(|_| ClockError::SystemTimeBeforeEpoch)
    }
}

/// A manually advanced clock for deterministic simulations.
///
/// Only available with the `testing` feature. Time starts at zero and moves
/// only when told to, so two limiters fed the same request schedule produce
/// the same decision sequence.
#[cfg(feature = "testing")]
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: std::sync::Arc<std::sync::atomic::AtomicU64>,
}

#[cfg(feature = "testing")]
impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by the given number of seconds.
    pub fn advance_secs(&self, seconds: f64) {
        let nanos = (seconds * 1_000_000_000.0) as u64;
        self.nanos
            .fetch_add(nanos, std::sync::atomic::Ordering::Relaxed);
    }

    /// Set the clock to an absolute time in seconds.
    pub fn set_secs(&self, seconds: f64) {
        let nanos = (seconds * 1_000_000_000.0) as u64;
        self.nanos.store(nanos, std::sync::atomic::Ordering::Relaxed);
    }
}

#[cfg(feature = "testing")]
impl Clock for ManualClock {
    fn now(&self) -> Result<u64, ClockError> {
        Ok(self.nanos.load(std::sync::atomic::Ordering::Relaxed))
    }
}
