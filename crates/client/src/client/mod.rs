//! HTTP client for the contactbook API.

pub mod contacts;
pub mod health;

use crate::error::{ClientError, Result};

/// HTTP client for the contactbook API.
#[derive(Debug, Clone)]
pub struct ContactbookClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContactbookClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a successful response or turn the error body into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(error_from_body(status.as_u16(), resource, &body))
    }
}

/// Build a `ClientError` from a non-success status and its body.
///
/// The server sends `{"error": "..."}`; other bodies are passed through as-is.
fn error_from_body(status: u16, resource: &str, body: &str) -> ClientError {
    if status == 404 {
        return ClientError::NotFound {
            resource: resource.to_string(),
        };
    }

    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string());

    ClientError::ServerError { status, message }
}
