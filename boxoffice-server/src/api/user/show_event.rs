use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use super::UserApiError;
use crate::api::extractors::Caller;
use crate::api::summary_to_response;
use crate::state::AppState;

/// `GET /events/{event_id}` – read-only snapshot of one event, without
/// its ticket collection.
pub(super) async fn show_event(
    state: State<AppState>,
    _caller: Caller,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, UserApiError> {
    let office = state.office.lock().await;
    let summary = office.event_details(&event_id)?;

    Ok(Json(summary_to_response(&summary)))
}
