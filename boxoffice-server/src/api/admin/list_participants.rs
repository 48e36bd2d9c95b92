use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use boxoffice_sdk::objects::ParticipantsResponse;
use compact_str::CompactString;

use super::AdminApiError;
use crate::api::extractors::AdminAuthorized;
use crate::api::ticket_to_response;
use crate::state::AppState;

/// `GET /events/{event_id}/participants` – the event's current ticket
/// collection, verbatim.
///
/// An unknown event yields an empty list, not 404 – "no such event" and
/// "no tickets" are indistinguishable here by design.
pub(super) async fn list_participants(
    state: State<AppState>,
    _admin: AdminAuthorized,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AdminApiError> {
    let office = state.office.lock().await;
    let admin = office.admin().clone();
    let tickets = office.participants(&admin, &event_id)?;

    Ok(Json(ParticipantsResponse {
        event_id: CompactString::from(event_id.as_str()),
        tickets: tickets.iter().map(ticket_to_response).collect(),
    }))
}
