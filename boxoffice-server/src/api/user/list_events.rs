use axum::{Json, extract::State, response::IntoResponse};
use boxoffice_sdk::objects::EventListResponse;
use compact_str::CompactString;

use super::UserApiError;
use crate::api::extractors::Caller;
use crate::state::AppState;

/// `GET /events` – the full insertion-ordered list of event ids, never
/// pruned. Empty on a fresh office.
pub(super) async fn list_events(
    state: State<AppState>,
    _caller: Caller,
) -> Result<impl IntoResponse, UserApiError> {
    let office = state.office.lock().await;
    let event_ids: Vec<CompactString> = office
        .list_events()
        .iter()
        .map(|id| CompactString::from(id.as_str()))
        .collect();

    Ok(Json(EventListResponse { event_ids }))
}
