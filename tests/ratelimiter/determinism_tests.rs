// tests/ratelimiter/determinism_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use throttlekit::{Algorithm, Decision, RateLimiter, RateLimiterConfig};

    /// Replay the same timed request schedule against a fresh limiter and
    /// collect every decision.
    fn run_schedule(
        algorithm: Algorithm,
        config: RateLimiterConfig,
        schedule: &[(f64, &'static str)],
    ) -> Vec<Decision> {
        let clock = TestClock::new(0.0);
        let limiter = RateLimiter::with_config(algorithm, config, clock.clone()).unwrap();

        schedule
            .iter()
            .map(|&(at, entity)| {
                clock.set_time(at);
                limiter.allow(entity).unwrap()
            })
            .collect()
    }

    #[test]
    fn identical_limiters_make_identical_decisions() {
        let schedule: Vec<(f64, &'static str)> = (0..40)
            .map(|i| (i as f64 * 0.37, if i % 3 == 0 { "a" } else { "b" }))
            .collect();

        for algorithm in Algorithm::ALL {
            let config = RateLimiterConfig::new(2.0, 4.0).window(5.0);
            let first = run_schedule(algorithm, config.clone(), &schedule);
            let second = run_schedule(algorithm, config, &schedule);
            assert_eq!(first, second, "{algorithm} diverged between runs");
        }
    }

    #[test]
    fn decision_sequence_is_stable_for_burst_schedule() {
        // five instant requests, then one after a second of quiet
        let schedule = [
            (0.0, "a"),
            (0.0, "a"),
            (0.0, "a"),
            (0.0, "a"),
            (0.0, "a"),
            (1.0, "a"),
        ];

        let config = RateLimiterConfig::new(2.0, 3.0);
        let decisions = run_schedule(Algorithm::TokenBucket, config.clone(), &schedule);

        let admitted: Vec<bool> = decisions.iter().map(|d| d.allowed).collect();
        assert_eq!(admitted, [true, true, true, false, false, true]);

        // and a second run reproduces it exactly, including the metadata
        let replay = run_schedule(Algorithm::TokenBucket, config, &schedule);
        assert_eq!(decisions, replay);
    }
}
