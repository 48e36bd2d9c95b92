//! Admin API response types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::ticket::TicketResponse;

/// The current ticket collection of one event.
///
/// An unknown event id yields an empty list rather than an error; the
/// dashboard treats "no such event" and "no tickets" identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantsResponse {
    pub event_id: CompactString,
    pub tickets: Vec<TicketResponse>,
}

/// Aggregate funds currently held by the box office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Smallest currency unit.
    pub balance: u64,
}
