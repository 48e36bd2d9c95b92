//! Notice type definitions.

use crate::entities::{EventId, EventStatus, PartyId};
use time::OffsetDateTime;

/// A fact about a completed operation, emitted on the notice channel.
#[derive(Debug, Clone)]
pub enum Notice {
    /// A new event entered the catalog.
    EventCreated {
        event_id: EventId,
        name: String,
        creator: PartyId,
        event_date: OffsetDateTime,
        status: EventStatus,
    },

    /// The event's registration status flipped.
    RegistrationToggled {
        event_id: EventId,
        status: EventStatus,
    },

    /// A ticket was issued. `price` is the amount retained; any excess
    /// payment was refunded separately over the rail.
    TicketPurchased {
        buyer: PartyId,
        event_id: EventId,
        price: u64,
    },

    /// A ticket was cancelled and its price refunded.
    TicketCancelled {
        buyer: PartyId,
        event_id: EventId,
        refunded: u64,
    },

    /// An invocation matched no known operation. Captured and reported
    /// rather than rejected outright – the one fail-open path.
    UnmatchedCall {
        caller: Option<PartyId>,
        payload: String,
    },
}
