//! Synchronous API dispatch strategy
//!
//! Sends the payload to a classification endpoint and holds the host's call
//! stack open for the full round trip. Only appropriate when backend latency
//! is bounded and fits the host's own timeout budget; no internal timeout is
//! imposed here, so the bound belongs to the host or the transport client.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use filtergate_core::{Error, FilePayload, Result, Verdict};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::strategy::CheckStrategy;

/// Strategy that calls a remote classification endpoint inline
#[derive(Debug, Clone)]
pub struct ApiStrategy {
    client: reqwest::Client,
    endpoint: String,
}

impl ApiStrategy {
    /// Create a strategy targeting the given check endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create with a shared client (connection pooling across strategies)
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CheckStrategy for ApiStrategy {
    async fn check(&self, payload: &FilePayload) -> Result<Verdict> {
        let request = CheckRequest {
            buffer: BASE64.encode(&payload.buffer),
            mimetype: &payload.mime_type,
            txid: &payload.tx_id,
        };

        let response = self
            .client
            .put(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::transport(format!("backend request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(format!("backend returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read backend response: {e}")))?;

        let value = parse_check_response(&body)?;
        debug!(tx_id = %payload.tx_id, flagged = value, "inline verdict received");

        Ok(Verdict::flagged(value))
    }

    fn name(&self) -> &str {
        "api"
    }
}

/// Request body sent to the check endpoint
#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    buffer: String,
    mimetype: &'a str,
    txid: &'a str,
}

/// Expected response shape from the check endpoint
#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(rename = "flaggedResult")]
    flagged_result: bool,
}

/// Strictly parse the backend's verdict payload.
///
/// A missing or non-boolean `flaggedResult` is a transport error, never a
/// defaulted `false`.
fn parse_check_response(body: &str) -> Result<bool> {
    match serde_json::from_str::<CheckResponse>(body) {
        Ok(response) => Ok(response.flagged_result),
        Err(e) => Err(Error::transport(format!(
            "malformed backend response: {e}"
        ))),
    }
}
