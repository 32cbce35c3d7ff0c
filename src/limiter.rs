// src/limiter.rs

// throttlekit: a multi-algorithm admission-control rate limiter.

// dependencies
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::algorithms::{AlgorithmState, Decision, Snapshot};
use crate::clock::{Clock, SystemClock};
use crate::config::{Algorithm, RateLimiterConfig};
use crate::errors::RateLimiterError;

/// The main rate limiter facade.
///
/// T is the type used to identify entities (e.g., String, u64, etc.).
/// C is the clock type, defaulting to SystemClock.
///
/// One `AlgorithmState` is kept per entity key inside an `Arc<DashMap>`:
/// the entry API atomically creates the state the first time a key is seen
/// (two racing threads observe exactly one state), and the sharded guards
/// serialize same-key arithmetic while leaving other keys uncontended.
#[derive(Debug)]
pub struct RateLimiter<T, C = SystemClock>
where
    T: Hash + Eq + Clone + Debug,
    C: Clock,
{
    algorithm: Algorithm,
    config: RateLimiterConfig,
    entities: Arc<DashMap<T, AlgorithmState>>,
    clock: C,
}

impl<T> RateLimiter<T, SystemClock>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Create a limiter driven by the system clock.
    pub fn new(algorithm: Algorithm, config: RateLimiterConfig) -> Result<Self, RateLimiterError> {
        Self::with_config(algorithm, config, SystemClock)
    }
}

impl<T, C> RateLimiter<T, C>
where
    T: Hash + Eq + Clone + Debug,
    C: Clock,
{
    /// Create a limiter with an injected clock.
    ///
    /// Fails with a configuration error if any numeric parameter is
    /// non-positive. The algorithm is fixed for the lifetime of the limiter.
    pub fn with_config(
        algorithm: Algorithm,
        config: RateLimiterConfig,
        clock: C,
    ) -> Result<Self, RateLimiterError> {
        config.validate()?;
        Ok(Self {
            algorithm,
            config,
            entities: Arc::new(DashMap::new()),
            clock,
        })
    }

    /// Decide whether to admit a request for `entity` arriving now.
    ///
    /// Denial is a normal outcome carried in the returned [`Decision`]; the
    /// only error path is a failing clock. State for a never-seen entity is
    /// created lazily on first call.
    pub fn allow(&self, entity: T) -> Result<Decision, RateLimiterError> {
        let now = self.clock.now()?;

        trace!(entity = ?entity, algorithm = %self.algorithm, "checking request");

        let mut state = self.entities.entry(entity.clone()).or_insert_with(|| {
            debug!(entity = ?entity, algorithm = %self.algorithm, "creating admission state");
            AlgorithmState::new(self.algorithm, &self.config, now)
        });
        let decision = state.evaluate(now);

        if !decision.allowed {
            debug!(
                entity = ?entity,
                retry_after_seconds = decision.retry_after_seconds,
                "rate limit exceeded"
            );
        }

        Ok(decision)
    }

    /// Read-only view of an entity's headroom and reset time.
    ///
    /// Never mutates state; an entity that has never been seen reports
    /// zero-value defaults.
    pub fn snapshot(&self, entity: &T) -> Result<Snapshot, RateLimiterError> {
        let now = self.clock.now()?;
        Ok(self
            .entities
            .get(entity)
            .map(|state| state.peek(now))
            .unwrap_or_default())
    }

    /// Drop state for entities whose last activity is older than
    /// `max_stale_nanos`.
    pub fn cleanup_stale_entities(&self, max_stale_nanos: u64) -> Result<(), RateLimiterError> {
        let now = self.clock.now()?;
        let cutoff = now.saturating_sub(max_stale_nanos);
        self.entities
            .retain(|_, state| state.last_updated_nanos() >= cutoff);
        Ok(())
    }

    /// Number of entities with live state.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Drop all entity state. Primarily useful in tests.
    pub fn clear(&self) {
        self.entities.clear();
    }

    // accessor methods for the construction-time parameters
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn rate(&self) -> f64 {
        self.config.rate_per_second
    }

    pub fn capacity(&self) -> f64 {
        self.config.capacity
    }

    pub fn window_secs(&self) -> f64 {
        self.config.window_secs
    }
}
