use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use boxoffice_sdk::objects::ToggleRegistrationRequest;

use super::AdminApiError;
use crate::api::extractors::AdminAuthorized;
use crate::state::AppState;

/// `POST /events/{event_id}/registration` – pause or resume ticket
/// registration.
///
/// Setting the status it already has is refused, so a toggle is always
/// an observable change.
pub(super) async fn toggle_registration(
    state: State<AppState>,
    _admin: AdminAuthorized,
    Path(event_id): Path<String>,
    Json(payload): Json<ToggleRegistrationRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let mut office = state.office.lock().await;
    let admin = office.admin().clone();
    office
        .toggle_registration(&admin, &event_id, payload.status.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
