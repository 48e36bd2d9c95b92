use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use boxoffice_core::entities::AttendeeDetails;
use boxoffice_sdk::objects::BuyTicketRequest;

use super::UserApiError;
use crate::api::extractors::Caller;
use crate::api::ticket_to_response;
use crate::state::AppState;

/// `POST /events/{event_id}/tickets` – buy one ticket for the caller.
///
/// The full payment value travels with the request; anything above the
/// ticket price comes back over the payment rail.
pub(super) async fn buy_ticket(
    state: State<AppState>,
    Caller(party): Caller,
    Path(event_id): Path<String>,
    Json(payload): Json<BuyTicketRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let attendee = AttendeeDetails {
        fname: payload.fname,
        lname: payload.lname,
        email: payload.email,
    };

    let mut office = state.office.lock().await;
    let ticket = office
        .buy_ticket(&party, &event_id, attendee, payload.payment_value)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket_to_response(&ticket))))
}
