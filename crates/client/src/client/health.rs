//! Health check operations.

use super::ContactbookClient;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Readiness probe result.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyStatus {
    pub ready: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactbookClient {
    /// Check that the server accepts connections.
    pub async fn livez(&self) -> Result<bool> {
        let response = self.client.get(self.url("/livez")).send().await?;
        Ok(response.status().is_success())
    }

    /// Check that the server can reach its storage.
    ///
    /// A 503 still carries a readiness body, so it is decoded rather than
    /// treated as an error.
    pub async fn readyz(&self) -> Result<ReadyStatus> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return response.json().await.map_err(ClientError::from);
        }
        self.handle_response(response, "Readiness").await
    }
}
