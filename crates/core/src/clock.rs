//! Time source abstraction.
//!
//! The repository stamps `createdAt`/`updatedAt` through a [`Clock`] rather
//! than reading ambient time, so create/update behavior is deterministic
//! under test.

use chrono::{DateTime, Utc};

/// A source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
