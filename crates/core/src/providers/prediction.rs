use std::time::Duration;

use reqwest::Client;

use crate::errors::ClientError;

/// Client for the optional external price-prediction service.
///
/// The payload is opaque JSON rendered as-is by the caller. The service
/// being unreachable is an expected condition (it may simply not be
/// deployed); callers present any failure as a soft "offline" status
/// rather than an error.
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `GET /predict/{coin_id}` — an opaque prediction payload.
    pub async fn predict(&self, coin_id: &str) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}/predict/{coin_id}", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
