use dashmap::DashMap;
use std::time::{Duration, Instant};

// One record per key - valid only while `now < expiry`. At or past expiry the
// record is stale and the next check starts a fresh window.
#[derive(Debug, Clone, Copy)]
pub struct WindowEntry {
    pub count: u32,
    pub expiry: Instant,
}

// Limiter settings. Defaults match the backend's abuse-deterrence policy:
// 5 requests per 60 second window.
#[derive(Debug, Clone, Copy)]
pub struct LimiterConfig {
    pub max_requests: u32,
    pub window: Duration,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_millis(60_000),
        }
    }
}

/// Fixed-window rate limiter keyed by caller identity (user id, IP, ...).
///
/// Each instance owns its own store, so independent limiters (per route,
/// per test) never share counts. The lookup-then-mutate step runs under the
/// map's per-key entry lock, so concurrent checks for one key can never
/// admit more than `max_requests` in a window.
pub struct FixedWindowLimiter {
    config: LimiterConfig,
    entries: DashMap<String, WindowEntry>,
}

impl FixedWindowLimiter {
    pub fn new(config: LimiterConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    pub fn config(&self) -> LimiterConfig {
        self.config
    }

    /// Decide whether a request under `key` is allowed right now.
    ///
    /// Returns `true` to allow (the request is recorded), `false` to deny
    /// (nothing is recorded - denied requests are not double-counted).
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    /// Same decision with the clock supplied by the caller.
    pub fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(WindowEntry {
                count: 0,
                expiry: now + self.config.window,
            });

        // Window over..? Reset it. A request landing exactly at expiry
        // counts into the fresh window, not the old one.
        if entry.expiry <= now {
            entry.count = 1;
            entry.expiry = now + self.config.window;
            return true;
        }

        // Under the threshold..? Allow and record
        if entry.count < self.config.max_requests {
            entry.count += 1;
            return true;
        }

        // Over the threshold - deny, leave the record alone
        false
    }

    /// Drop records whose window has ended, to keep the store from growing
    /// without bound in a long-running process.
    pub fn sweep(&self) {
        self.sweep_at(Instant::now());
    }

    pub fn sweep_at(&self, now: Instant) {
        self.entries.retain(|_, entry| now < entry.expiry);
    }

    /// Number of keys currently tracked (including stale ones not yet swept).
    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}

impl Default for FixedWindowLimiter {
    fn default() -> Self {
        Self::new(LimiterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn limiter(max_requests: u32, window_ms: u64) -> FixedWindowLimiter {
        FixedWindowLimiter::new(LimiterConfig {
            max_requests,
            window: Duration::from_millis(window_ms),
        })
    }

    #[test]
    fn allows_up_to_threshold_then_denies() {
        let limiter = limiter(5, 60_000);

        for _ in 0..5 {
            assert!(limiter.check("user:42"));
        }
        assert!(!limiter.check("user:42"));
    }

    #[test]
    fn window_reset_starts_count_at_one() {
        let limiter = limiter(2, 60_000);
        let t0 = Instant::now();

        assert!(limiter.check_at("k", t0));
        assert!(limiter.check_at("k", t0));
        assert!(!limiter.check_at("k", t0));

        // Past expiry the next call allows and the count restarts at 1:
        // one more fits before the new window fills up.
        let t1 = t0 + Duration::from_millis(60_001);
        assert!(limiter.check_at("k", t1));
        assert!(limiter.check_at("k", t1));
        assert!(!limiter.check_at("k", t1));
    }

    #[test]
    fn keys_are_isolated() {
        let limiter = limiter(2, 60_000);

        assert!(limiter.check("a"));
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));

        // "a" being exhausted says nothing about "b"
        assert!(limiter.check("b"));
        assert!(limiter.check("b"));
        assert!(!limiter.check("b"));
    }

    #[test]
    fn denial_does_not_mutate() {
        let limiter = limiter(3, 60_000);
        let t0 = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_at("k", t0));
        }
        // Hammering a denied key keeps denying - the denials themselves
        // never extend or refill the window.
        for _ in 0..10 {
            assert!(!limiter.check_at("k", t0 + Duration::from_millis(100)));
        }
        assert!(limiter.check_at("k", t0 + Duration::from_millis(60_001)));
    }

    #[test]
    fn boundary_scenario() {
        // 5 calls at t=0 allow, a 6th at t=30s denies, a 7th at t=60.001s
        // lands in a fresh window and allows.
        let limiter = limiter(5, 60_000);
        let t0 = Instant::now();

        for _ in 0..5 {
            assert!(limiter.check_at("x", t0));
        }
        assert!(!limiter.check_at("x", t0 + Duration::from_millis(30_000)));
        assert!(limiter.check_at("x", t0 + Duration::from_millis(60_001)));
    }

    #[test]
    fn request_exactly_at_expiry_opens_new_window() {
        let limiter = limiter(1, 60_000);
        let t0 = Instant::now();

        assert!(limiter.check_at("k", t0));
        assert!(!limiter.check_at("k", t0 + Duration::from_millis(59_999)));
        assert!(limiter.check_at("k", t0 + Duration::from_millis(60_000)));
    }

    #[test]
    fn concurrent_burst_never_exceeds_threshold() {
        let limiter = Arc::new(limiter(5, 60_000));
        let allowed = Arc::new(AtomicU32::new(0));

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let allowed = Arc::clone(&allowed);
                std::thread::spawn(move || {
                    if limiter.check("burst") {
                        allowed.fetch_add(1, Ordering::Relaxed);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(allowed.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn sweep_drops_only_expired_records() {
        let limiter = limiter(5, 60_000);
        let t0 = Instant::now();

        limiter.check_at("old", t0);
        limiter.check_at("live", t0 + Duration::from_millis(30_000));
        assert_eq!(limiter.tracked_keys(), 2);

        limiter.sweep_at(t0 + Duration::from_millis(60_000));
        assert_eq!(limiter.tracked_keys(), 1);

        // The surviving key still carries its count
        for _ in 0..4 {
            assert!(limiter.check_at("live", t0 + Duration::from_millis(30_001)));
        }
        assert!(!limiter.check_at("live", t0 + Duration::from_millis(30_002)));
    }
}
