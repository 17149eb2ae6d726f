//! Plugin configuration

use filtergate_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which dispatch strategy the plugin binds at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Inline call to the classification endpoint
    Api,
    /// Durable hand-off to the payload store
    Deferred,
}

/// Plugin configuration, read once at startup.
///
/// Validation happens at plugin construction, never per call; a missing
/// section for the selected mode is a fatal configuration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Selected dispatch mode
    pub mode: DispatchMode,

    /// Classification endpoint settings (required for api mode)
    #[serde(default)]
    pub api: Option<ApiConfig>,

    /// Durable store settings (required for deferred mode)
    #[serde(default)]
    pub store: Option<StoreConfig>,
}

/// Classification endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Check endpoint URL
    pub endpoint: String,
}

/// Durable store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Object store base URL
    pub base_url: String,

    /// Bucket receiving deferred payloads
    pub bucket: String,
}

impl PluginConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// API settings, or a configuration error if the section is missing
    pub fn api(&self) -> Result<&ApiConfig> {
        self.api
            .as_ref()
            .ok_or_else(|| Error::config("api mode selected but api section is missing"))
    }

    /// Store settings, or a configuration error if the section is missing
    pub fn store(&self) -> Result<&StoreConfig> {
        self.store
            .as_ref()
            .ok_or_else(|| Error::config("deferred mode selected but store section is missing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_api_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "mode: api\napi:\n  endpoint: http://classifier.local/check"
        )
        .unwrap();

        let config = PluginConfig::load(file.path()).unwrap();
        assert_eq!(config.mode, DispatchMode::Api);
        assert_eq!(config.api().unwrap().endpoint, "http://classifier.local/check");
    }

    #[test]
    fn test_load_deferred_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "mode: deferred\nstore:\n  base_url: http://store.local:9000\n  bucket: inbound"
        )
        .unwrap();

        let config = PluginConfig::load(file.path()).unwrap();
        assert_eq!(config.mode, DispatchMode::Deferred);
        let store = config.store().unwrap();
        assert_eq!(store.base_url, "http://store.local:9000");
        assert_eq!(store.bucket, "inbound");
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let config = PluginConfig {
            mode: DispatchMode::Deferred,
            api: None,
            store: None,
        };
        assert!(matches!(
            config.store().unwrap_err(),
            Error::Config(_)
        ));
    }

    #[test]
    fn test_missing_file_fails_load() {
        assert!(PluginConfig::load("/nonexistent/filtergate.yaml").is_err());
    }
}
