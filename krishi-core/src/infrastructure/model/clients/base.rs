//! Base HTTP client with shared logic

use crate::infrastructure::model::types::{ProviderError, ProviderOutcome};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub id: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub http: Client,
}

impl HttpClientBase {
    /// Build on a shared connection pool
    pub fn with_client(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: Option<String>,
        http: Client,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            api_key,
            http,
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON with query param auth (Gemini style)
    pub async fn post_with_query_key<Req>(
        &self,
        url: &str,
        body: &Req,
        timeout: Duration,
    ) -> ProviderOutcome
    where
        Req: Serialize + ?Sized,
    {
        let api_key = match self.require_api_key() {
            Ok(key) => key,
            Err(error) => return ProviderOutcome::Fatal(error),
        };

        let request = self
            .http
            .post(url)
            .query(&[("key", api_key)])
            .json(body)
            .timeout(timeout);
        self.execute(request, timeout).await
    }

    /// GET with query param auth plus extra query parameters (weatherapi style)
    pub async fn get_with_query_key<Q>(&self, url: &str, query: &Q, timeout: Duration) -> ProviderOutcome
    where
        Q: Serialize + ?Sized,
    {
        let api_key = match self.require_api_key() {
            Ok(key) => key,
            Err(error) => return ProviderOutcome::Fatal(error),
        };

        let request = self
            .http
            .get(url)
            .query(&[("key", api_key)])
            .query(query)
            .timeout(timeout);
        self.execute(request, timeout).await
    }

    async fn execute(&self, request: RequestBuilder, timeout: Duration) -> ProviderOutcome {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return ProviderOutcome::Fatal(ProviderError::transport(&self.id, err, timeout)),
        };

        let status = response.status();
        debug!(provider = self.id.as_str(), status = status.as_u16(), "Provider responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return ProviderOutcome::from_status(&self.id, status, body);
        }

        match response.json::<Value>().await {
            Ok(envelope) => ProviderOutcome::Success(envelope),
            Err(err) if err.is_timeout() => {
                ProviderOutcome::Fatal(ProviderError::transport(&self.id, err, timeout))
            }
            Err(err) => ProviderOutcome::Fatal(ProviderError::invalid_response(
                &self.id,
                format!("undecodable body: {err}"),
            )),
        }
    }

    fn require_api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::missing_api_key(&self.id))
    }
}
