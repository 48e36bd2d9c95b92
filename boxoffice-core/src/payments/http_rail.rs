//! HTTP delivery of transfer instructions.

use super::{PaymentRail, RailError, Transfer};
use url::Url;

/// A [`PaymentRail`] that POSTs each transfer instruction as JSON to a
/// settlement endpoint.
///
/// Any non-2xx response is a rejected transfer; the caller rolls back.
pub struct RailOverHttp {
    endpoint: Url,
    http: reqwest::Client,
}

impl RailOverHttp {
    /// Create a rail pointed at the given settlement endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

#[async_trait::async_trait]
impl PaymentRail for RailOverHttp {
    async fn transfer(&self, transfer: Transfer) -> Result<(), RailError> {
        tracing::debug!(
            transfer_id = %transfer.transfer_id,
            to = %transfer.to,
            amount = transfer.amount,
            "Dispatching transfer to settlement endpoint"
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&transfer)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(transfer_id = %transfer.transfer_id, "Transfer settled");
        Ok(())
    }
}
