//! Durable payload store seam

use async_trait::async_trait;
use bytes::Bytes;
use filtergate_core::{Error, Result};
use tracing::debug;

/// Durable object storage for deferred payload hand-off.
///
/// Implementations must only return `Ok(())` once the write is acknowledged;
/// the deferral contract transfers responsibility for the verdict to the
/// external pipeline the moment `put` succeeds. Overwrite semantics for a
/// reused key are the store's own.
#[async_trait]
pub trait PayloadStore: Send + Sync {
    /// Write `body` under `key`, tagging the stored object with
    /// `content_type` for downstream consumers.
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> Result<()>;
}

/// S3-compatible object store reached over HTTP.
///
/// Objects are written with `PUT {base_url}/{bucket}/{key}` carrying the
/// payload's media type as the `Content-Type` header.
#[derive(Debug, Clone)]
pub struct HttpPayloadStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl HttpPayloadStore {
    /// Create a store client for the given endpoint and bucket
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.bucket,
            key
        )
    }
}

#[async_trait]
impl PayloadStore for HttpPayloadStore {
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> Result<()> {
        let url = self.object_url(key);

        let response = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::storage(format!("store write failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::storage(format!(
                "store returned {status} for key {key}"
            )));
        }

        debug!(key, content_type, "payload write acknowledged");
        Ok(())
    }
}
