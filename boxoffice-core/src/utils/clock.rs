//! Time source for the office.
//!
//! Injected at construction so tests can pin and advance the clock.

use time::OffsetDateTime;

/// Provides the current instant for schedule and deadline checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
