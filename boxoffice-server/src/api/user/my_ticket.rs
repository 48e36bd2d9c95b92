use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use super::UserApiError;
use crate::api::extractors::Caller;
use crate::api::ticket_to_response;
use crate::state::AppState;

/// `GET /events/{event_id}/tickets/me` – the caller's ticket, if any.
///
/// A pure read; the position of the ticket inside the collection is an
/// internal detail and is not exposed.
pub(super) async fn my_ticket(
    state: State<AppState>,
    Caller(party): Caller,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, UserApiError> {
    let office = state.office.lock().await;
    match office.user_ticket(&event_id, &party) {
        Some((_, ticket)) => Ok(Json(ticket_to_response(ticket))),
        None => Err(UserApiError::NoTicket),
    }
}
