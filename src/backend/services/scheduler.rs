// src/backend/services/scheduler.rs
// Periodic maintenance run from the canister timer.

use crate::models::Timestamp;
use crate::storage::SessionStore;
use crate::utils::rate_limit::RateLimiter;

/// How often the timer fires.
pub const SWEEP_INTERVAL_SECS: u64 = 15 * 60;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub admin_sessions_purged: usize,
    pub rate_buckets_purged: usize,
}

/// Drops expired admin sessions and rate-limit buckets that have fully refilled.
/// Client sessions have no expiry and are left alone.
pub fn sweep(sessions: &mut dyn SessionStore, limiter: &mut RateLimiter, now: Timestamp) -> SweepReport {
    let report = SweepReport {
        admin_sessions_purged: sessions.purge_expired_admin_sessions(now),
        rate_buckets_purged: limiter.purge_idle(now),
    };
    if report != SweepReport::default() {
        crate::log_info!(
            "Maintenance sweep: {} admin sessions, {} rate buckets purged",
            report.admin_sessions_purged,
            report.rate_buckets_purged
        );
    }
    report
}
