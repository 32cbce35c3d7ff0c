// src/config.rs

//! Configuration types for the rate limiter.

// dependencies
use std::fmt;
use std::str::FromStr;

use crate::algorithms::secs_to_nanos;
use crate::errors::RateLimiterError;

/// The admission policy used by a limiter.
///
/// Chosen once at construction; every entity tracked by a limiter uses the
/// same algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Permits accumulate at a constant rate up to a capacity; each request
    /// consumes one. Allows bursts up to the capacity.
    TokenBucket,
    /// A bounded queue drained at a constant rate; requests that would
    /// overflow it are rejected.
    LeakyBucket,
    /// Counts admitted requests in the continuously moving interval
    /// `[now - window, now]`. Exact, no boundary slack.
    SlidingWindow,
    /// Counts requests in discrete windows aligned to multiples of the window
    /// size. Simple, but permits up to 2x the limit across a boundary.
    FixedWindow,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::TokenBucket,
        Algorithm::LeakyBucket,
        Algorithm::SlidingWindow,
        Algorithm::FixedWindow,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::TokenBucket => "token_bucket",
            Algorithm::LeakyBucket => "leaky_bucket",
            Algorithm::SlidingWindow => "sliding_window",
            Algorithm::FixedWindow => "fixed_window",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RateLimiterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "token_bucket" => Ok(Algorithm::TokenBucket),
            "leaky_bucket" => Ok(Algorithm::LeakyBucket),
            "sliding_window" => Ok(Algorithm::SlidingWindow),
            "fixed_window" => Ok(Algorithm::FixedWindow),
            other => Err(RateLimiterError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Configuration for rate limiter behavior.
///
/// Field use is algorithm-dependent: the bucket algorithms use
/// `rate_per_second` and `capacity`; the window algorithms use
/// `floor(capacity)` as the per-window request limit together with
/// `window_secs`, and ignore `rate_per_second`.
#[derive(Debug, Clone)]
pub struct RateLimiterConfig {
    pub(crate) rate_per_second: f64,
    pub(crate) capacity: f64,
    pub(crate) window_secs: f64,
}

/// Default window size in seconds when none is configured.
const DEFAULT_WINDOW_SECS: f64 = 60.0;

impl RateLimiterConfig {
    /// Create a new configuration with rate and capacity settings.
    /// The window size defaults to 60 seconds.
    pub fn new(rate_per_second: f64, capacity: f64) -> Self {
        Self {
            rate_per_second,
            capacity,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }

    /// Builder-style: set rate per second
    pub fn rate(mut self, rate_per_second: f64) -> Self {
        self.rate_per_second = rate_per_second;
        self
    }

    /// Builder-style: set capacity (bucket size or per-window request limit)
    pub fn capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style: set window size in seconds
    pub fn window(mut self, window_secs: f64) -> Self {
        self.window_secs = window_secs;
        self
    }

    /// Validate the configuration.
    ///
    /// All numeric parameters must be finite and strictly positive; zero or
    /// negative values are a construction-time error, never coerced.
    pub fn validate(&self) -> Result<(), RateLimiterError> {
        if !self.rate_per_second.is_finite() || self.rate_per_second <= 0.0 {
            return Err(RateLimiterError::InvalidRate(self.rate_per_second));
        }
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(RateLimiterError::InvalidCapacity(self.capacity));
        }
        // windows below one nanosecond truncate to a zero-length window in
        // the state machines, so they are a construction-time error too
        if !self.window_secs.is_finite()
            || self.window_secs <= 0.0
            || secs_to_nanos(self.window_secs) == 0
        {
            return Err(RateLimiterError::InvalidWindow(self.window_secs));
        }
        Ok(())
    }
}
