//! Plugin interface presented to the moderation host

use std::sync::Arc;

use filtergate_core::{FilePayload, Result, Verdict};
use tracing::{info, warn};

use crate::api::ApiStrategy;
use crate::config::{DispatchMode, PluginConfig};
use crate::deferred::DeferredStrategy;
use crate::store::HttpPayloadStore;
use crate::strategy::CheckStrategy;

/// The uniform contract the host invokes, regardless of dispatch strategy.
///
/// Holds exactly one [`CheckStrategy`] bound at construction and no other
/// state; concurrent invocations share nothing but the strategy itself.
pub struct FilterPlugin {
    strategy: Arc<dyn CheckStrategy>,
}

impl FilterPlugin {
    /// Create a plugin bound to the given strategy
    pub fn new(strategy: Arc<dyn CheckStrategy>) -> Self {
        Self { strategy }
    }

    /// Build a plugin from validated configuration.
    ///
    /// A missing section for the selected mode fails here, before the plugin
    /// can report itself ready.
    pub fn from_config(config: &PluginConfig) -> Result<Self> {
        let strategy: Arc<dyn CheckStrategy> = match config.mode {
            DispatchMode::Api => {
                let api = config.api()?;
                Arc::new(ApiStrategy::new(api.endpoint.clone()))
            }
            DispatchMode::Deferred => {
                let store = config.store()?;
                Arc::new(DeferredStrategy::new(Arc::new(HttpPayloadStore::new(
                    store.base_url.clone(),
                    store.bucket.clone(),
                ))))
            }
        };

        Ok(Self::new(strategy))
    }

    /// One-time setup hook, called once by the host before first use.
    ///
    /// Failures surface to the host's loader and abort startup; this is the
    /// only path allowed to error without resolving into a verdict.
    pub async fn init(&self) -> Result<()> {
        self.strategy.init().await?;
        info!(strategy = self.strategy.name(), "filter plugin initialised");
        Ok(())
    }

    /// Name of the bound strategy
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Check a payload and always resolve a verdict.
    ///
    /// Strategy errors are converted to [`Verdict::Failed`] so the host can
    /// treat every outcome uniformly; nothing is thrown across this boundary.
    pub async fn check_image(&self, payload: &FilePayload) -> Verdict {
        let verdict = match self.strategy.check(payload).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(tx_id = %payload.tx_id, error = %e, "check failed");
                Verdict::failed(e.to_string())
            }
        };

        metrics::counter!(
            "filtergate_checks_total",
            "strategy" => self.strategy.name().to_string(),
            "outcome" => outcome_label(&verdict)
        )
        .increment(1);

        verdict
    }
}

fn outcome_label(verdict: &Verdict) -> &'static str {
    match verdict {
        Verdict::Flagged { .. } => "flagged",
        Verdict::Deferred { .. } => "deferred",
        Verdict::Failed { .. } => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use filtergate_core::Error;

    struct FixedStrategy(bool);

    #[async_trait]
    impl CheckStrategy for FixedStrategy {
        async fn check(&self, _payload: &FilePayload) -> Result<Verdict> {
            Ok(Verdict::flagged(self.0))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct BrokenStrategy;

    #[async_trait]
    impl CheckStrategy for BrokenStrategy {
        async fn init(&self) -> Result<()> {
            Err(Error::config("store bucket not configured"))
        }

        async fn check(&self, _payload: &FilePayload) -> Result<Verdict> {
            Err(Error::transport("transport timeout"))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn payload() -> FilePayload {
        FilePayload::new(&b"\xFF\xD8\xFF\xE0"[..], "image/jpeg", "tx-1")
    }

    #[tokio::test]
    async fn test_verdict_passes_through_unmodified() {
        let plugin = FilterPlugin::new(Arc::new(FixedStrategy(true)));
        assert_eq!(plugin.check_image(&payload()).await, Verdict::flagged(true));

        let plugin = FilterPlugin::new(Arc::new(FixedStrategy(false)));
        assert_eq!(
            plugin.check_image(&payload()).await,
            Verdict::flagged(false)
        );
    }

    #[tokio::test]
    async fn test_strategy_error_resolves_to_failed() {
        let plugin = FilterPlugin::new(Arc::new(BrokenStrategy));
        let verdict = plugin.check_image(&payload()).await;
        assert_eq!(
            verdict,
            Verdict::failed("transport error: transport timeout")
        );
    }

    #[tokio::test]
    async fn test_init_error_is_not_a_verdict() {
        let plugin = FilterPlugin::new(Arc::new(BrokenStrategy));
        assert!(matches!(plugin.init().await, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_repeat_checks_share_no_state() {
        let plugin = FilterPlugin::new(Arc::new(FixedStrategy(true)));
        let payload = payload();
        let first = plugin.check_image(&payload).await;
        let second = plugin.check_image(&payload).await;
        assert_eq!(first, second);
        assert_eq!(first, Verdict::flagged(true));
    }

    #[test]
    fn test_from_config_requires_mode_section() {
        let config = PluginConfig {
            mode: DispatchMode::Api,
            api: None,
            store: None,
        };
        assert!(matches!(
            FilterPlugin::from_config(&config),
            Err(Error::Config(_))
        ));

        let config = PluginConfig {
            mode: DispatchMode::Deferred,
            api: None,
            store: None,
        };
        assert!(matches!(
            FilterPlugin::from_config(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_from_config_binds_selected_strategy() {
        let config = PluginConfig {
            mode: DispatchMode::Api,
            api: Some(crate::config::ApiConfig {
                endpoint: "http://classifier.local/check".to_string(),
            }),
            store: None,
        };
        let plugin = FilterPlugin::from_config(&config).unwrap();
        assert_eq!(plugin.strategy_name(), "api");

        let config = PluginConfig {
            mode: DispatchMode::Deferred,
            api: None,
            store: Some(crate::config::StoreConfig {
                base_url: "http://store.local:9000".to_string(),
                bucket: "inbound".to_string(),
            }),
        };
        let plugin = FilterPlugin::from_config(&config).unwrap();
        assert_eq!(plugin.strategy_name(), "deferred");
    }
}
