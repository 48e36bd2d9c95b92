//! Error types for box office operations.
//!
//! Two classes of failure: precondition violations (caller error, state
//! untouched) and invariant violations (internal bug signal, operation
//! aborted without partial commit). Both are reported synchronously;
//! nothing is retried automatically.

use crate::payments::RailError;
use thiserror::Error;

/// Failure modes of the box office operations.
#[derive(Debug, Error)]
pub enum OfficeError {
    /// The caller is not the administrator.
    #[error("access denied: caller is not the administrator")]
    AccessDenied,

    /// The event date is not strictly in the future.
    #[error("event date must be in the future")]
    InvalidSchedule,

    /// No event with the given identifier exists.
    #[error("event not found")]
    EventNotFound,

    /// The requested registration status equals the current one.
    #[error("registration status is unchanged")]
    NoStatusChange,

    /// The event's organizer tried to buy a ticket to their own event.
    #[error("the organizer cannot buy a ticket to their own event")]
    OrganizerCannotBuyTicket,

    /// The caller already holds a ticket for this event.
    #[error("caller already holds a ticket for this event")]
    TicketAlreadyExists,

    /// The event date has been reached; purchases are barred.
    #[error("the event date has passed")]
    PassedEventDate,

    /// Ticket registration is paused.
    #[error("ticket registration is paused")]
    EventPaused,

    /// The event is at capacity.
    #[error("no tickets left")]
    SoldOutTickets,

    /// The presented payment does not cover the ticket price.
    #[error("payment of {supplied} does not cover the ticket price of {required}")]
    NotEnoughFunds { required: u64, supplied: u64 },

    /// The caller holds no ticket for this event.
    #[error("caller holds no ticket for this event")]
    TicketNotFound,

    /// The cancellation deadline has been reached.
    #[error("the refund window has closed")]
    RefundWindowClosed,

    /// The event identifier is the empty string.
    #[error("event identifier must not be empty")]
    EmptyIdentifier,

    /// A purchase or cancellation re-entered while one was in flight.
    #[error("a purchase or cancellation is already in flight")]
    ReentrantCall,

    /// The payment rail refused or failed a transfer; the operation was
    /// rolled back.
    #[error("payment rail: {0}")]
    Payment(#[from] RailError),

    /// Internal invariant violated. Signals a logic defect, not caller
    /// misuse.
    #[error("invariant violated: {0}")]
    Invariant(&'static str),
}
