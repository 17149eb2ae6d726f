//! Filtergate Core
//!
//! Shared types for Filtergate moderation plugins.
//!
//! This crate provides:
//! - The [`FilePayload`] handed from the host to a plugin
//! - The tagged [`Verdict`] a plugin resolves every check into
//! - Error types and result handling

pub mod error;
pub mod payload;
pub mod verdict;

pub use error::{Error, Result};
pub use payload::FilePayload;
pub use verdict::{Verdict, NOOP};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::payload::FilePayload;
    pub use crate::verdict::Verdict;
}
