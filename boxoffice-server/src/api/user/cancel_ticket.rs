use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use boxoffice_sdk::objects::CancellationResponse;
use compact_str::CompactString;

use super::UserApiError;
use crate::api::extractors::Caller;
use crate::state::AppState;

/// `POST /events/{event_id}/tickets/cancel` – cancel the caller's ticket
/// and refund its paid price.
pub(super) async fn cancel_ticket(
    state: State<AppState>,
    Caller(party): Caller,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, UserApiError> {
    let mut office = state.office.lock().await;
    let refunded = office.cancel_ticket(&party, &event_id).await?;

    Ok(Json(CancellationResponse {
        event_id: CompactString::from(event_id.as_str()),
        refunded,
    }))
}
