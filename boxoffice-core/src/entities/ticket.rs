//! The ticket record.

use time::OffsetDateTime;

use super::PartyId;

/// Proof of one buyer's purchase for one event.
///
/// At most one ticket per owner exists in an event's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// The buyer. Unique within an event's ticket collection.
    pub owner: PartyId,
    pub fname: String,
    pub lname: String,
    /// Free text, not validated for format.
    pub email: String,
    /// The event's price at time of purchase; a snapshot, not a live
    /// reference.
    pub paid_price: u64,
    /// Time of purchase.
    pub purchased: OffsetDateTime,
}

/// Buyer-supplied fields printed on the ticket.
#[derive(Debug, Clone)]
pub struct AttendeeDetails {
    pub fname: String,
    pub lname: String,
    pub email: String,
}
