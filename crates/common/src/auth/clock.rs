//! Clock abstraction for token expiry checks
//!
//! Token validity is always decided by comparing the current instant against
//! the stored absolute expiry, never against a remaining-seconds counter.
//! Injecting the clock keeps that comparison testable.

use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
