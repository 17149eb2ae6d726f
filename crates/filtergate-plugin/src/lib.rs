//! Filtergate Plugin
//!
//! Dual-mode dispatch plugin for content-moderation hosts.
//!
//! The host hands a [`filtergate_core::FilePayload`] to [`FilterPlugin::check_image`]
//! and always gets a resolved [`filtergate_core::Verdict`] back. Which kind depends
//! on the strategy bound at construction:
//!
//! - [`ApiStrategy`] calls a classification endpoint inline and returns the
//!   backend's boolean verdict, holding the host's call stack open for the
//!   round trip.
//! - [`DeferredStrategy`] writes the payload to durable storage keyed by
//!   transaction id and returns an explicit "noop" deferral, releasing the
//!   host immediately; the verdict arrives later through an external channel.

pub mod api;
pub mod config;
pub mod deferred;
pub mod plugin;
pub mod store;
pub mod strategy;

pub use api::ApiStrategy;
pub use config::{ApiConfig, DispatchMode, PluginConfig, StoreConfig};
pub use deferred::DeferredStrategy;
pub use plugin::FilterPlugin;
pub use store::{HttpPayloadStore, PayloadStore};
pub use strategy::CheckStrategy;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::plugin::FilterPlugin;
    pub use crate::strategy::CheckStrategy;
    pub use filtergate_core::prelude::*;
}
