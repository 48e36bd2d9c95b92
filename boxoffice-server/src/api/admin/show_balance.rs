use axum::{Json, extract::State, response::IntoResponse};
use boxoffice_sdk::objects::BalanceResponse;

use super::AdminApiError;
use crate::api::extractors::AdminAuthorized;
use crate::state::AppState;

/// `GET /balance` – aggregate funds currently held: payments received
/// minus refunds issued. Purely observational.
pub(super) async fn show_balance(
    state: State<AppState>,
    _admin: AdminAuthorized,
) -> Result<impl IntoResponse, AdminApiError> {
    let office = state.office.lock().await;
    let admin = office.admin().clone();
    let balance = office.balance(&admin)?;

    Ok(Json(BalanceResponse { balance }))
}
