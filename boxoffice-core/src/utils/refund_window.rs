//! Refund deadline arithmetic.

use time::{Duration, OffsetDateTime};

/// Returns the instant at which cancellation closes for an event
/// scheduled at `event_date`.
///
/// Cancellation at or after the returned instant fails; strictly before
/// it, the ticket is refundable in full.
pub fn refund_deadline(event_date: OffsetDateTime, refund_window: Duration) -> OffsetDateTime {
    event_date - refund_window
}
