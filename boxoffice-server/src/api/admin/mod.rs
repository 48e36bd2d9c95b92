//! Admin API handlers.
//!
//! These endpoints are called by the admin dashboard and require the
//! `Boxoffice-Admin-Authorization` header with the plaintext admin
//! secret. The authorization extractor runs before any other input
//! validation.
//!
//! # Endpoints
//!
//! - `POST /events`                            – create a new event
//! - `POST /events/{event_id}/registration`    – pause/resume registration
//! - `GET  /events/{event_id}/participants`    – list the ticket collection
//! - `GET  /balance`                           – aggregate funds held

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use boxoffice_core::error::OfficeError;

use crate::state::AppState;

mod create_event;
mod list_participants;
mod show_balance;
mod toggle_registration;

/// Build the Admin API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event::create_event))
        .route(
            "/events/{event_id}/registration",
            post(toggle_registration::toggle_registration),
        )
        .route(
            "/events/{event_id}/participants",
            get(list_participants::list_participants),
        )
        .route("/balance", get(show_balance::show_balance))
}

// ---------------------------------------------------------------------------
// Shared error type
// ---------------------------------------------------------------------------

/// Errors that can occur in Admin API handlers.
#[derive(Debug)]
pub(super) enum AdminApiError {
    /// The state machine refused the operation.
    Office(OfficeError),
    /// The supplied unix timestamp is outside the representable range.
    InvalidTimestamp,
}

impl From<OfficeError> for AdminApiError {
    fn from(err: OfficeError) -> Self {
        Self::Office(err)
    }
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AdminApiError::Office(err) => super::office_error_response(err),
            AdminApiError::InvalidTimestamp => {
                (StatusCode::BAD_REQUEST, "invalid event date timestamp").into_response()
            }
        }
    }
}
