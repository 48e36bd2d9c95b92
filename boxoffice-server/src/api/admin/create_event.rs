use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use boxoffice_core::entities::EventDraft;
use boxoffice_sdk::objects::{CreateEventRequest, EventCreatedResponse};
use compact_str::CompactString;
use time::OffsetDateTime;

use super::AdminApiError;
use crate::api::extractors::AdminAuthorized;
use crate::state::AppState;

/// `POST /events` – create a new event.
///
/// The event date must be strictly in the future; the event enters the
/// catalog Active with an empty ticket collection.
pub(super) async fn create_event(
    state: State<AppState>,
    _admin: AdminAuthorized,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let event_date = OffsetDateTime::from_unix_timestamp(payload.event_date)
        .map_err(|_| AdminApiError::InvalidTimestamp)?;

    let draft = EventDraft {
        name: payload.name,
        ticket_limit: payload.ticket_limit,
        price: payload.price,
        event_date,
    };

    let mut office = state.office.lock().await;
    let admin = office.admin().clone();
    let event_id = office.create_event(&admin, draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventCreatedResponse {
            event_id: CompactString::from(event_id.as_str()),
        }),
    ))
}
