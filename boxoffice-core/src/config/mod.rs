//! Configuration for constructing a box office.
//!
//! These values are fixed at construction time. In particular the admin
//! identity is immutable for the office's lifetime; there is no
//! ownership-transfer operation.

use crate::entities::PartyId;
use time::Duration;

/// Default refund window: cancellation closes one day before the event.
pub const DEFAULT_REFUND_WINDOW: Duration = Duration::days(1);

/// Construction-time configuration of a [`BoxOffice`](crate::office::BoxOffice).
#[derive(Debug, Clone)]
pub struct OfficeConfig {
    /// The single administrator identity.
    pub admin: PartyId,
    /// How long before `event_date` ticket cancellation closes.
    pub refund_window: Duration,
}

impl OfficeConfig {
    /// Create a config with the default refund window.
    pub fn new(admin: PartyId) -> Self {
        Self {
            admin,
            refund_window: DEFAULT_REFUND_WINDOW,
        }
    }

    /// Override the refund window.
    pub fn with_refund_window(mut self, refund_window: Duration) -> Self {
        self.refund_window = refund_window;
        self
    }
}
