use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::ClientError;
use crate::storage::store::SessionStore;

/// The single chokepoint through which all backend HTTP calls pass.
///
/// Attaches the current bearer credential from the session store to every
/// outgoing request (when one is present), centralizes the base URL, and
/// maps non-2xx replies to `ClientError::Api` with the status preserved.
///
/// Every call is independent and immediate: no retries, no queueing, no
/// deduplication of concurrent identical requests. An unauthorized (401)
/// response is logged but surfaced unchanged — the session is not
/// cleared and no redirect is forced.
pub struct ApiGateway {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Build a request for `path` with the bearer header attached iff a
    /// credential is present in the session store at call time.
    ///
    /// Public so callers (and tests) can inspect the outgoing request
    /// without sending it.
    pub fn prepare(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `GET path`, decoding the JSON body verbatim.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.prepare(Method::GET, path).send().await?;
        self.decode(path, response).await
    }

    /// `POST path` with a JSON body, decoding the JSON reply verbatim.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.prepare(Method::POST, path).json(body).send().await?;
        self.decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "Unauthorized response from backend");
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ClientError::Deserialization(format!("Failed to decode response from {path}: {e}"))
        })
    }
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}
