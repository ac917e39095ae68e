//! Shared helpers for the integration tests

use chrono::{DateTime, TimeZone, Utc};
use emr_model::{AuditContext, FixedClock, UserRef};

/// Initialize env_logger for a test binary, tolerating repeat calls
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fixed instant for deterministic stamps
#[allow(dead_code)]
pub fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// A context for a named user pinned to a fixed instant
#[allow(dead_code)]
pub fn ctx_at(name: &str, secs: i64) -> AuditContext {
    AuditContext::new(UserRef::new(name), &FixedClock(instant(secs)))
}

/// A context for a generic test user
#[allow(dead_code)]
pub fn ctx() -> AuditContext {
    ctx_at("tester", 1_700_000_000)
}
