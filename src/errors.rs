// src/errors.rs

//! Error types for the rate limiter.

// dependencies
use thiserror::Error;

use crate::clock::ClockError;

/// Error type for rate limiter configuration and clock issues.
///
/// Denial of a request is never an error; it is a normal `Decision` outcome.
/// Configuration problems surface at construction time and are never coerced.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RateLimiterError {
    /// Rate must be strictly positive and finite.
    #[error("rate must be positive, got {0}")]
    InvalidRate(f64),

    /// Capacity must be strictly positive and finite.
    #[error("capacity must be positive, got {0}")]
    InvalidCapacity(f64),

    /// Window size must be strictly positive and finite.
    #[error("window size must be positive, got {0}")]
    InvalidWindow(f64),

    /// Algorithm name not in the supported set.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The underlying clock failed to produce a timestamp.
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),
}
