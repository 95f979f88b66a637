// src/backend/utils/rate_limit.rs
use crate::error::PortalError;
use crate::models::common::Timestamp;
use candid::Principal;
use std::collections::HashMap;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

struct TokenBucket {
    tokens: f64,
    last_refill_time_ns: Timestamp,
}

impl TokenBucket {
    fn new(capacity: u32, now_ns: Timestamp) -> Self {
        TokenBucket {
            tokens: capacity as f64,
            last_refill_time_ns: now_ns,
        }
    }

    fn refill(&mut self, capacity: u32, refill_per_sec: f64, now_ns: Timestamp) {
        let elapsed_secs = now_ns.saturating_sub(self.last_refill_time_ns) as f64 / NANOS_PER_SEC;
        self.tokens = (self.tokens + elapsed_secs * refill_per_sec).min(capacity as f64);
        self.last_refill_time_ns = now_ns;
    }

    fn take(&mut self, capacity: u32, refill_per_sec: f64, now_ns: Timestamp) -> bool {
        self.refill(capacity, refill_per_sec, now_ns);
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Per-principal token buckets for login attempts. Heap only; cleared on upgrade.
pub struct RateLimiter {
    capacity: u32,
    refill_per_sec: f64,
    buckets: HashMap<Principal, TokenBucket>,
}

impl RateLimiter {
    pub fn new(capacity: u32, refill_per_sec: f64) -> Self {
        Self {
            capacity,
            refill_per_sec,
            buckets: HashMap::new(),
        }
    }

    pub fn check(&mut self, caller: &Principal, now_ns: Timestamp) -> Result<(), PortalError> {
        let capacity = self.capacity;
        let bucket = self
            .buckets
            .entry(*caller)
            .or_insert_with(|| TokenBucket::new(capacity, now_ns));

        if bucket.take(capacity, self.refill_per_sec, now_ns) {
            Ok(())
        } else {
            Err(PortalError::RateLimitExceeded(format!(
                "Too many attempts from {}. Please try again later.",
                caller
            )))
        }
    }

    /// Forgets buckets that would be full again by `now_ns`.
    pub fn purge_idle(&mut self, now_ns: Timestamp) -> usize {
        let before = self.buckets.len();
        let (capacity, rate) = (self.capacity as f64, self.refill_per_sec);
        self.buckets.retain(|_caller, bucket| {
            let elapsed_secs = now_ns.saturating_sub(bucket.last_refill_time_ns) as f64 / NANOS_PER_SEC;
            bucket.tokens + elapsed_secs * rate < capacity
        });
        before - self.buckets.len()
    }
}
