//! HTTP API surface.
//!
//! - `user` – buyer-facing operations, authenticated by the
//!   `Boxoffice-Party` header
//! - `admin` – administrator operations, authenticated by the
//!   `Boxoffice-Admin-Authorization` header
//! - `extractors` – the axum extractors implementing both checks

pub mod admin;
pub mod extractors;
pub mod user;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use boxoffice_core::entities::{EventSummary, Ticket};
use boxoffice_core::error::OfficeError;
use boxoffice_sdk::objects::{EventSummaryResponse, TicketResponse};
use compact_str::CompactString;

/// Map a core failure to an HTTP response.
///
/// Precondition violations keep their structured reason in the body;
/// invariant violations are logged and answered opaquely.
pub(crate) fn office_error_response(err: OfficeError) -> Response {
    use OfficeError::*;
    let status = match &err {
        AccessDenied => StatusCode::FORBIDDEN,
        EventNotFound | TicketNotFound => StatusCode::NOT_FOUND,
        InvalidSchedule | EmptyIdentifier => StatusCode::BAD_REQUEST,
        NoStatusChange
        | OrganizerCannotBuyTicket
        | TicketAlreadyExists
        | PassedEventDate
        | EventPaused
        | SoldOutTickets
        | RefundWindowClosed
        | ReentrantCall => StatusCode::CONFLICT,
        NotEnoughFunds { .. } => StatusCode::PAYMENT_REQUIRED,
        Payment(_) => StatusCode::BAD_GATEWAY,
        Invariant(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "Office operation failed");
        return (status, "internal server error").into_response();
    }
    (status, err.to_string()).into_response()
}

/// Convert a core `Ticket` into its API model.
pub(crate) fn ticket_to_response(ticket: &Ticket) -> TicketResponse {
    TicketResponse {
        owner: CompactString::from(ticket.owner.as_str()),
        fname: ticket.fname.clone(),
        lname: ticket.lname.clone(),
        email: ticket.email.clone(),
        paid_price: ticket.paid_price,
        purchased: ticket.purchased.unix_timestamp(),
    }
}

/// Convert a core `EventSummary` into its API model.
pub(crate) fn summary_to_response(summary: &EventSummary) -> EventSummaryResponse {
    EventSummaryResponse {
        event_id: CompactString::from(summary.event_id.as_str()),
        creator: CompactString::from(summary.creator.as_str()),
        name: summary.name.clone(),
        ticket_limit: summary.ticket_limit,
        price: summary.price,
        event_date: summary.event_date.unix_timestamp(),
        status: summary.status.into(),
        tickets_sold: summary.tickets_sold,
    }
}
