//! Wire objects for the boxoffice HTTP APIs.
//!
//! These types are serde DTOs only; the core crate owns the in-memory
//! records and converts at the API boundary. Timestamps cross the wire
//! as unix seconds (UTC).

pub mod admin;
pub mod event;
pub mod ticket;

pub use admin::{BalanceResponse, ParticipantsResponse};
pub use event::{
    CreateEventRequest, EventCreatedResponse, EventListResponse, EventStatus,
    EventSummaryResponse, ToggleRegistrationRequest,
};
pub use ticket::{BuyTicketRequest, CancellationResponse, TicketResponse};
