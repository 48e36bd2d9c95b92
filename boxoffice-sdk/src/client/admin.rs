//! Admin API client (admin dashboard → boxoffice server).
//!
//! All requests carry the plaintext admin secret in the
//! `Boxoffice-Admin-Authorization` header.

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_response};
use crate::headers::ADMIN_AUTH_HEADER;
use crate::objects::{
    BalanceResponse, CreateEventRequest, EventCreatedResponse, ParticipantsResponse,
    ToggleRegistrationRequest,
};

/// Typed HTTP client for the boxoffice **Admin API**.
///
/// Authentication uses a plaintext secret sent in the
/// `Boxoffice-Admin-Authorization` header, verified server-side against
/// an argon2-hashed value.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: Url,
    admin_secret: String,
}

impl AdminClient {
    /// Create a new `AdminClient`.
    ///
    /// * `base_url` – root URL of the boxoffice server.
    /// * `admin_secret` – the plaintext admin secret.
    pub fn new(base_url: Url, admin_secret: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            admin_secret: admin_secret.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /api/v1/admin/events` – create a new event.
    pub async fn create_event(
        &self,
        request: &CreateEventRequest,
    ) -> Result<EventCreatedResponse, ClientError> {
        let url = self.base_url.join("/api/v1/admin/events")?;
        let resp = self
            .http
            .post(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .json(request)
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `POST /api/v1/admin/events/{event_id}/registration` – pause or
    /// resume ticket registration.
    pub async fn toggle_registration(
        &self,
        event_id: &str,
        request: &ToggleRegistrationRequest,
    ) -> Result<(), ClientError> {
        let url = self
            .base_url
            .join(&format!("/api/v1/admin/events/{event_id}/registration"))?;
        let resp = self
            .http
            .post(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }
        Ok(())
    }

    /// `GET /api/v1/admin/events/{event_id}/participants` – the event's
    /// current ticket collection.
    pub async fn participants(
        &self,
        event_id: &str,
    ) -> Result<ParticipantsResponse, ClientError> {
        let url = self
            .base_url
            .join(&format!("/api/v1/admin/events/{event_id}/participants"))?;
        let resp = self
            .http
            .get(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/admin/balance` – aggregate funds held.
    pub async fn balance(&self) -> Result<BalanceResponse, ClientError> {
        let url = self.base_url.join("/api/v1/admin/balance")?;
        let resp = self
            .http
            .get(url)
            .header(ADMIN_AUTH_HEADER, &self.admin_secret)
            .send()
            .await?;
        parse_response(resp).await
    }
}
