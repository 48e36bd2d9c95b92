//! The event record and its read-only summary.

use boxoffice_sdk::objects::EventStatus as SdkEventStatus;
use time::OffsetDateTime;

use super::{EventId, PartyId, Ticket};

/// Registration status of an event.
///
/// This is the core's version. For API/DTO use, see
/// `boxoffice_sdk::objects::EventStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Active,
    Paused,
}

impl From<EventStatus> for SdkEventStatus {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Active => SdkEventStatus::Active,
            EventStatus::Paused => SdkEventStatus::Paused,
        }
    }
}

impl From<SdkEventStatus> for EventStatus {
    fn from(value: SdkEventStatus) -> Self {
        match value {
            SdkEventStatus::Active => EventStatus::Active,
            SdkEventStatus::Paused => EventStatus::Paused,
        }
    }
}

/// A ticketed event and its issued tickets.
#[derive(Debug, Clone)]
pub struct Event {
    /// Assigned by the catalog; immutable after creation.
    pub event_id: EventId,
    /// The identity that created the event; immutable.
    pub creator: PartyId,
    pub name: String,
    /// Capacity; `tickets.len()` never exceeds this.
    pub ticket_limit: u32,
    /// Purchases are barred at and after this instant.
    pub event_date: OffsetDateTime,
    /// Ticket price in the smallest currency unit; immutable.
    pub price: u64,
    pub status: EventStatus,
    /// Issued tickets. Pushed in purchase order, but removal swaps the
    /// last element into the hole – order is NOT guaranteed to survive a
    /// cancellation.
    pub tickets: Vec<Ticket>,
}

impl Event {
    /// Read-only snapshot of everything except the ticket collection.
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            event_id: self.event_id.clone(),
            creator: self.creator.clone(),
            name: self.name.clone(),
            ticket_limit: self.ticket_limit,
            event_date: self.event_date,
            price: self.price,
            status: self.status,
            tickets_sold: self.tickets.len() as u32,
        }
    }
}

/// Caller-supplied fields for creating an event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub ticket_limit: u32,
    /// Smallest currency unit.
    pub price: u64,
    pub event_date: OffsetDateTime,
}

/// Read-only snapshot of one event, without its ticket collection.
#[derive(Debug, Clone)]
pub struct EventSummary {
    pub event_id: EventId,
    pub creator: PartyId,
    pub name: String,
    pub ticket_limit: u32,
    pub event_date: OffsetDateTime,
    pub price: u64,
    pub status: EventStatus,
    pub tickets_sold: u32,
}
