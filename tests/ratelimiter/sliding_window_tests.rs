// tests/ratelimiter/sliding_window_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use throttlekit::{Algorithm, RateLimiter, RateLimiterConfig};

    fn limiter(
        limit: f64,
        window_secs: f64,
        clock: TestClock,
    ) -> RateLimiter<&'static str, TestClock> {
        let config = RateLimiterConfig::new(1.0, limit).window(window_secs);
        RateLimiter::with_config(Algorithm::SlidingWindow, config, clock).unwrap()
    }

    #[test]
    fn admits_up_to_limit_then_denies() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(3.0, 60.0, clock.clone());

        for i in 0..3 {
            let decision = limiter.allow("client1").unwrap();
            assert!(decision.allowed, "request {} should be admitted", i);
        }
        assert!(!limiter.allow("client1").unwrap().allowed);
    }

    #[test]
    fn count_is_exact_with_no_boundary_slack() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(3.0, 10.0, clock.clone());

        // admits at t=0, 4, 8
        assert!(limiter.allow("client1").unwrap().allowed);
        clock.set_time(4.0);
        assert!(limiter.allow("client1").unwrap().allowed);
        clock.set_time(8.0);
        assert!(limiter.allow("client1").unwrap().allowed);
        assert!(!limiter.allow("client1").unwrap().allowed);

        // at t=10.5 only the t=0 admit has left the window: exactly one slot
        clock.set_time(10.5);
        assert!(limiter.allow("client1").unwrap().allowed);
        assert!(!limiter.allow("client1").unwrap().allowed);

        // at t=14.5 the t=4 admit has also left
        clock.set_time(14.5);
        assert!(limiter.allow("client1").unwrap().allowed);
        assert!(!limiter.allow("client1").unwrap().allowed);
    }

    #[test]
    fn oldest_edge_is_inclusive() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(1.0, 60.0, clock.clone());

        assert!(limiter.allow("client1").unwrap().allowed);

        // a request exactly one window later still sees the old admit in
        // range: the oldest edge of the window is inclusive
        clock.set_time(60.0);
        let decision = limiter.allow("client1").unwrap();
        assert!(!decision.allowed);
        assert_eq!(decision.retry_after_seconds, Some(0.0));

        // any instant past the edge frees the slot
        clock.advance(0.001);
        assert!(limiter.allow("client1").unwrap().allowed);
    }

    #[test]
    fn retry_after_tracks_oldest_request() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(2.0, 10.0, clock.clone());

        clock.set_time(1.0);
        assert!(limiter.allow("client1").unwrap().allowed);
        clock.set_time(2.0);
        assert!(limiter.allow("client1").unwrap().allowed);

        clock.set_time(4.0);
        let decision = limiter.allow("client1").unwrap();
        assert!(!decision.allowed);
        // the t=1 admit exits the window at t=11, i.e. 7 seconds from now
        let retry = decision.retry_after_seconds.unwrap();
        assert!((retry - 7.0).abs() < 1e-9);
    }

    #[test]
    fn remaining_counts_down_within_window() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(3.0, 60.0, clock.clone());

        assert_eq!(limiter.allow("client1").unwrap().remaining, 2.0);
        assert_eq!(limiter.allow("client1").unwrap().remaining, 1.0);
        assert_eq!(limiter.allow("client1").unwrap().remaining, 0.0);
    }

    #[test]
    fn denied_requests_do_not_extend_the_window() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(1.0, 10.0, clock.clone());

        assert!(limiter.allow("client1").unwrap().allowed);

        // hammering while denied must not push the reset further out
        clock.set_time(5.0);
        assert!(!limiter.allow("client1").unwrap().allowed);
        clock.set_time(9.0);
        assert!(!limiter.allow("client1").unwrap().allowed);

        clock.set_time(10.5);
        assert!(limiter.allow("client1").unwrap().allowed);
    }
}
