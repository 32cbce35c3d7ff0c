// tests/ratelimiter/cleanup_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use throttlekit::{Algorithm, RateLimiter, RateLimiterConfig};

    #[test]
    fn cleanup_removes_stale_entities() {
        let clock = TestClock::new(0.0);
        let config = RateLimiterConfig::new(1.0, 1.0);
        let limiter =
            RateLimiter::with_config(Algorithm::TokenBucket, config, clock.clone()).unwrap();

        // Add some entities at different times
        limiter.allow("client1").unwrap(); // last activity t=0

        clock.set_time(5.0);
        limiter.allow("client2").unwrap(); // last activity t=5

        clock.set_time(10.0);
        limiter.allow("client3").unwrap(); // last activity t=10

        assert_eq!(limiter.entity_count(), 3);

        // At t=12, drop entities idle for more than 4.5 seconds:
        // cutoff is 7.5, so only client3 survives
        clock.set_time(12.0);
        let threshold_nanos = (4.5 * 1_000_000_000.0) as u64;
        limiter.cleanup_stale_entities(threshold_nanos).unwrap();

        assert_eq!(limiter.entity_count(), 1);
        assert!(limiter.snapshot(&"client1").unwrap().reset_time_nanos == 0);
        assert!(limiter.snapshot(&"client3").unwrap().reset_time_nanos > 0);

        // Clean up all remaining entities
        limiter.cleanup_stale_entities(0).unwrap();
        assert_eq!(limiter.entity_count(), 0);
    }

    #[test]
    fn cleanup_handles_empty_state() {
        let clock = TestClock::new(0.0);
        let config = RateLimiterConfig::new(1.0, 1.0);
        let limiter =
            RateLimiter::<String, _>::with_config(Algorithm::LeakyBucket, config, clock).unwrap();

        // Cleanup on empty state should not panic
        limiter.cleanup_stale_entities(1000).unwrap();
        assert_eq!(limiter.entity_count(), 0);
    }

    #[test]
    fn cleanup_preserves_recent_entities() {
        let clock = TestClock::new(100.0);
        let config = RateLimiterConfig::new(10.0, 5.0).window(1.0);
        let limiter =
            RateLimiter::with_config(Algorithm::FixedWindow, config, clock.clone()).unwrap();

        // Add several recent entities
        for i in 0..5 {
            let entity = format!("client{}", i);
            assert!(limiter.allow(entity).unwrap().allowed);
            clock.advance(0.01); // Very small time advances
        }

        let initial_count = limiter.entity_count();

        // Cleanup with a generous threshold preserves all of them
        limiter.cleanup_stale_entities(1_000_000_000).unwrap(); // 1s

        assert_eq!(limiter.entity_count(), initial_count);
    }

    #[test]
    fn cleaned_entity_starts_fresh() {
        let clock = TestClock::new(0.0);
        let config = RateLimiterConfig::new(1e-9, 1.0);
        let limiter =
            RateLimiter::with_config(Algorithm::TokenBucket, config, clock.clone()).unwrap();

        assert!(limiter.allow("client1").unwrap().allowed);
        assert!(!limiter.allow("client1").unwrap().allowed);

        clock.set_time(100.0);
        limiter.cleanup_stale_entities(1_000_000_000).unwrap();
        assert_eq!(limiter.entity_count(), 0);

        // state was dropped, so the entity gets a full bucket again
        assert!(limiter.allow("client1").unwrap().allowed);
    }
}
