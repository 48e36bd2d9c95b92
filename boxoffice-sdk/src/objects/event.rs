//! Event API request and response types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Registration status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Paused,
}

/// Request body for creating a new event.
///
/// Sent by the admin dashboard. The creator is taken from the
/// authenticated caller, never from the body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    /// Maximum number of tickets that may be issued.
    pub ticket_limit: u32,
    /// Ticket price in the smallest currency unit.
    pub price: u64,
    /// Scheduled date of the event as unix seconds.
    pub event_date: i64,
}

/// Response returned after an event is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreatedResponse {
    pub event_id: CompactString,
}

/// The full insertion-ordered list of event identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    pub event_ids: Vec<CompactString>,
}

/// Read-only snapshot of one event, without its ticket collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummaryResponse {
    pub event_id: CompactString,
    pub creator: CompactString,
    pub name: String,
    pub ticket_limit: u32,
    /// Ticket price in the smallest currency unit.
    pub price: u64,
    /// Scheduled date of the event as unix seconds.
    pub event_date: i64,
    pub status: EventStatus,
    /// Number of tickets currently issued.
    pub tickets_sold: u32,
}

/// Request body for pausing or resuming ticket registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleRegistrationRequest {
    pub status: EventStatus,
}
