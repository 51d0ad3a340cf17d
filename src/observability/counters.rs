//! Request traffic counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime GET/POST counters.
///
/// Incremented exactly once per matched request by the request-log
/// middleware. Only GET and POST are tracked; DELETE and other methods are
/// deliberately not counted. Never reset, never persisted.
#[derive(Debug, Default)]
pub struct RequestCounters {
    get: AtomicU64,
    post: AtomicU64,
}

impl RequestCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_get(&self) {
        self.get.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_post(&self) {
        self.post.fetch_add(1, Ordering::Relaxed);
    }

    /// Current (get, post) totals.
    pub fn snapshot(&self) -> (u64, u64) {
        (self.get.load(Ordering::Relaxed), self.post.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        assert_eq!(RequestCounters::new().snapshot(), (0, 0));
    }

    #[test]
    fn test_increments_are_independent() {
        let counters = RequestCounters::new();
        counters.record_get();
        counters.record_get();
        counters.record_post();
        assert_eq!(counters.snapshot(), (2, 1));
    }
}
