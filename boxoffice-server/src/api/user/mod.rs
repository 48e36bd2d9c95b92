//! User API handlers.
//!
//! These endpoints are called on behalf of buyers and require the
//! caller's party identity in the `Boxoffice-Party` header.
//!
//! # Endpoints
//!
//! - `GET  /events`                           – list event ids
//! - `GET  /events/{event_id}`                – event summary
//! - `POST /events/{event_id}/tickets`        – buy a ticket
//! - `GET  /events/{event_id}/tickets/me`     – the caller's ticket
//! - `POST /events/{event_id}/tickets/cancel` – cancel and refund

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use boxoffice_core::error::OfficeError;

use crate::state::AppState;

mod buy_ticket;
mod cancel_ticket;
mod list_events;
mod my_ticket;
mod show_event;

/// Build the User API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events::list_events))
        .route("/events/{event_id}", get(show_event::show_event))
        .route(
            "/events/{event_id}/tickets",
            post(buy_ticket::buy_ticket),
        )
        .route(
            "/events/{event_id}/tickets/me",
            get(my_ticket::my_ticket),
        )
        .route(
            "/events/{event_id}/tickets/cancel",
            post(cancel_ticket::cancel_ticket),
        )
}

// ---------------------------------------------------------------------------
// Shared error type
// ---------------------------------------------------------------------------

/// Errors that can occur in User API handlers.
#[derive(Debug)]
pub(super) enum UserApiError {
    /// The state machine refused the operation.
    Office(OfficeError),
    /// The caller holds no ticket for this event.
    NoTicket,
}

impl From<OfficeError> for UserApiError {
    fn from(err: OfficeError) -> Self {
        Self::Office(err)
    }
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            UserApiError::Office(err) => super::office_error_response(err),
            UserApiError::NoTicket => {
                (StatusCode::NOT_FOUND, "no ticket held for this event").into_response()
            }
        }
    }
}
