//! HTTP client for LLM services (LM Studio, OpenAI, and compatible servers)

use crate::error::{JanaError, Result};
use std::time::Duration;

/// Fixed request timeout for provider calls
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Base client for LLM API calls
///
/// Issues JSON POST requests against `base_url + endpoint` and maps the
/// failure modes onto the typed taxonomy: [`JanaError::Transport`] when the
/// server could not be reached, [`JanaError::Provider`] when it answered
/// with a non-success status, [`JanaError::MalformedResponse`] when the body
/// was not JSON.
pub struct LlmClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LlmClient {
    /// Create a new LLM client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(JanaError::Transport)?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a POST request and return the parsed JSON body
    pub async fn send_request(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
        headers: &[(String, String)],
    ) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.http_client.post(&url).json(payload);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(JanaError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JanaError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| JanaError::MalformedResponse(e.to_string()))
    }
}

/// Build the Authorization header list for a bearer token
pub(crate) fn bearer_headers(api_key: &str) -> Vec<(String, String)> {
    vec![(
        "Authorization".to_string(),
        format!("Bearer {}", api_key),
    )]
}
