// src/lib.rs

//! # Throttlekit
//!
//! A pluggable rate limiter offering four interchangeable admission policies:
//! token bucket, leaky bucket, sliding window, and fixed window.
//!
//! ## Quick Example
//!
//! ```rust
//! use throttlekit::{Algorithm, RateLimiter, RateLimiterConfig};
//!
//! let config = RateLimiterConfig::new(10.0, 5.0);
//! let limiter = RateLimiter::new(Algorithm::TokenBucket, config).unwrap();
//!
//! let decision = limiter.allow("user_123").unwrap();
//! if decision.allowed {
//!     println!("Request allowed ({} remaining)", decision.remaining);
//! } else {
//!     println!("Rate limited - retry after {:.2}s",
//!              decision.retry_after_seconds.unwrap_or(0.0));
//! }
//! ```

// private modules
mod algorithms;
mod clock;
mod config;
mod errors;
mod limiter;

// public API exports
pub use algorithms::{Decision, Snapshot};
#[cfg(feature = "testing")]
pub use clock::ManualClock;
pub use clock::{Clock, ClockError, SystemClock};
pub use config::{Algorithm, RateLimiterConfig};
pub use errors::RateLimiterError;
pub use limiter::RateLimiter;
