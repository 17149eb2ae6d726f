//! Dispatch strategy trait

use async_trait::async_trait;
use filtergate_core::{FilePayload, Result, Verdict};

/// A verdict-producing dispatch strategy.
///
/// Exactly one strategy is bound to a [`crate::FilterPlugin`] at construction
/// time. A strategy either resolves a definitive verdict inline
/// ([`crate::ApiStrategy`]) or hands the payload off to durable storage and
/// signals deferral ([`crate::DeferredStrategy`]). Callers wanting per-request
/// strategy choice should implement this trait as a composite.
#[async_trait]
pub trait CheckStrategy: Send + Sync {
    /// One-time setup before first use. Errors here are fatal to plugin
    /// startup; they are never converted into a verdict.
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    /// Produce a verdict for the payload.
    ///
    /// Per-call failures are returned as errors; the plugin interface converts
    /// them to [`Verdict::Failed`] before they reach the host.
    async fn check(&self, payload: &FilePayload) -> Result<Verdict>;

    /// Strategy name for logs and metrics
    fn name(&self) -> &str;
}
