//! User API client (buyer frontend → boxoffice server).
//!
//! All requests carry the caller's party identity in the
//! `Boxoffice-Party` header.

use compact_str::CompactString;
use reqwest::{Client, StatusCode};
use url::Url;

use super::{ClientError, parse_response};
use crate::headers::PARTY_HEADER;
use crate::objects::{
    BuyTicketRequest, CancellationResponse, EventListResponse, EventSummaryResponse,
    TicketResponse,
};

/// Typed HTTP client for the boxoffice **User API**.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: Client,
    base_url: Url,
    party: CompactString,
}

impl UserClient {
    /// Create a new `UserClient`.
    ///
    /// * `base_url` – root URL of the boxoffice server.
    /// * `party` – the caller's party identity.
    pub fn new(base_url: Url, party: impl Into<CompactString>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            party: party.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `GET /api/v1/events` – the full ordered list of event ids.
    pub async fn list_events(&self) -> Result<EventListResponse, ClientError> {
        let url = self.base_url.join("/api/v1/events")?;
        let resp = self
            .http
            .get(url)
            .header(PARTY_HEADER, self.party.as_str())
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/events/{event_id}` – one event's summary.
    pub async fn event_summary(
        &self,
        event_id: &str,
    ) -> Result<EventSummaryResponse, ClientError> {
        let url = self.base_url.join(&format!("/api/v1/events/{event_id}"))?;
        let resp = self
            .http
            .get(url)
            .header(PARTY_HEADER, self.party.as_str())
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `POST /api/v1/events/{event_id}/tickets` – buy a ticket.
    pub async fn buy_ticket(
        &self,
        event_id: &str,
        request: &BuyTicketRequest,
    ) -> Result<TicketResponse, ClientError> {
        let url = self
            .base_url
            .join(&format!("/api/v1/events/{event_id}/tickets"))?;
        let resp = self
            .http
            .post(url)
            .header(PARTY_HEADER, self.party.as_str())
            .json(request)
            .send()
            .await?;
        parse_response(resp).await
    }

    /// `GET /api/v1/events/{event_id}/tickets/me` – the caller's ticket,
    /// or `None` if they do not hold one.
    pub async fn my_ticket(
        &self,
        event_id: &str,
    ) -> Result<Option<TicketResponse>, ClientError> {
        let url = self
            .base_url
            .join(&format!("/api/v1/events/{event_id}/tickets/me"))?;
        let resp = self
            .http
            .get(url)
            .header(PARTY_HEADER, self.party.as_str())
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        parse_response(resp).await.map(Some)
    }

    /// `POST /api/v1/events/{event_id}/tickets/cancel` – cancel the
    /// caller's ticket and refund it.
    pub async fn cancel_ticket(
        &self,
        event_id: &str,
    ) -> Result<CancellationResponse, ClientError> {
        let url = self
            .base_url
            .join(&format!("/api/v1/events/{event_id}/tickets/cancel"))?;
        let resp = self
            .http
            .post(url)
            .header(PARTY_HEADER, self.party.as_str())
            .send()
            .await?;
        parse_response(resp).await
    }
}
