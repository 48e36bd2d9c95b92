//! Custom Axum extractors for request authentication.
//!
//! Provides:
//! - `Caller` – resolves the acting party from the `Boxoffice-Party`
//!   header, asserted by the fronting gateway (used by the User API).
//! - `AdminAuthorized` – verifies the `Boxoffice-Admin-Authorization`
//!   header against the argon2-hashed admin secret (used by the Admin
//!   API).

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use boxoffice_core::entities::PartyId;
use boxoffice_sdk::headers::{ADMIN_AUTH_HEADER, PARTY_HEADER};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Caller – party identity resolution
// ---------------------------------------------------------------------------

/// The acting party, resolved per call from the `Boxoffice-Party` header.
pub struct Caller(pub PartyId);

/// Errors that can occur while resolving the caller.
#[derive(Debug)]
pub enum CallerError {
    MissingHeader,
    InvalidHeader,
}

impl IntoResponse for CallerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CallerError::MissingHeader => {
                (StatusCode::UNAUTHORIZED, "missing Boxoffice-Party header")
            }
            CallerError::InvalidHeader => {
                (StatusCode::BAD_REQUEST, "invalid Boxoffice-Party header")
            }
        };
        (status, message).into_response()
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = CallerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(PARTY_HEADER)
            .ok_or(CallerError::MissingHeader)?
            .to_str()
            .map_err(|_| CallerError::InvalidHeader)?
            .trim();

        if value.is_empty() {
            return Err(CallerError::InvalidHeader);
        }

        Ok(Caller(PartyId::from(value)))
    }
}

// ---------------------------------------------------------------------------
// AdminAuthorized – admin secret verification
// ---------------------------------------------------------------------------

/// Marker extractor proving the request carried the valid admin secret.
///
/// Admin handlers list this before their other inputs so the access
/// check runs before any other validation.
pub struct AdminAuthorized;

/// Errors that can occur during admin authorization.
#[derive(Debug)]
pub enum AdminAuthError {
    MissingHeader,
    InvalidHeader,
    AccessDenied,
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AdminAuthError::MissingHeader => (
                StatusCode::UNAUTHORIZED,
                "missing Boxoffice-Admin-Authorization header",
            ),
            AdminAuthError::InvalidHeader => (
                StatusCode::BAD_REQUEST,
                "invalid Boxoffice-Admin-Authorization header",
            ),
            AdminAuthError::AccessDenied => (StatusCode::FORBIDDEN, "access denied"),
        };
        (status, message).into_response()
    }
}

impl FromRequestParts<AppState> for AdminAuthorized {
    type Rejection = AdminAuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(ADMIN_AUTH_HEADER)
            .ok_or(AdminAuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AdminAuthError::InvalidHeader)?;

        if !state.admin_auth.verify_secret(value) {
            return Err(AdminAuthError::AccessDenied);
        }

        Ok(AdminAuthorized)
    }
}
