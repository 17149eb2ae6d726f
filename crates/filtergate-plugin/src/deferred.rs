//! Deferred dispatch strategy
//!
//! Decouples heavyweight classification from the host's latency budget: the
//! payload is written to durable storage keyed by transaction id and the host
//! receives an immediate "noop" deferral signal instead of a verdict. Once the
//! write acknowledges, producing the verdict is the external pipeline's job;
//! how it reports back to the host is outside this crate.

use std::sync::Arc;

use async_trait::async_trait;
use filtergate_core::{FilePayload, Result, Verdict};
use tracing::debug;

use crate::store::PayloadStore;
use crate::strategy::CheckStrategy;

/// Strategy that hands payloads off to durable storage
pub struct DeferredStrategy {
    store: Arc<dyn PayloadStore>,
}

impl DeferredStrategy {
    /// Create a strategy writing to the given store
    pub fn new(store: Arc<dyn PayloadStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CheckStrategy for DeferredStrategy {
    async fn check(&self, payload: &FilePayload) -> Result<Verdict> {
        // Success here means the write was acknowledged; a failed write must
        // never be reported as queued.
        self.store
            .put(&payload.tx_id, &payload.mime_type, payload.buffer.clone())
            .await?;

        debug!(tx_id = %payload.tx_id, "payload handed off for out-of-band classification");
        Ok(Verdict::noop())
    }

    fn name(&self) -> &str {
        "deferred"
    }
}
