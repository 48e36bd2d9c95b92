//! Ticket API request and response types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Request body for buying a ticket.
///
/// The buyer identity comes from the authenticated caller; the name and
/// email fields are free text printed on the ticket and are not validated
/// for format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuyTicketRequest {
    pub fname: String,
    pub lname: String,
    pub email: String,
    /// Funds presented for the purchase, in the smallest currency unit.
    /// Anything above the ticket price is refunded over the payment rail.
    pub payment_value: u64,
}

/// A ticket as returned to its owner or to the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub owner: CompactString,
    pub fname: String,
    pub lname: String,
    pub email: String,
    /// Price snapshot at time of purchase, smallest currency unit.
    pub paid_price: u64,
    /// Time of purchase as unix seconds.
    pub purchased: i64,
}

/// Response returned after a ticket is cancelled and refunded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationResponse {
    pub event_id: CompactString,
    /// Amount returned over the payment rail, smallest currency unit.
    pub refunded: u64,
}
