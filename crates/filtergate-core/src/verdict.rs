//! Verdict returned to the moderation host

use serde::{Deserialize, Serialize};

/// Deferral marker carried by [`Verdict::Deferred`].
///
/// Tells the host the payload is being processed out of band and the absence
/// of a flagged value must not be read as "unflagged".
pub const NOOP: &str = "noop";

/// Outcome of a single classification attempt.
///
/// Exactly one variant is populated per response. The host never receives an
/// ambiguous or default-coerced result: a missing backend answer is `Failed`
/// or `Deferred`, never `Flagged { value: false }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    /// Definitive synchronous outcome
    Flagged {
        /// The backend's boolean result, unmodified
        value: bool,
    },

    /// Explicit "do not wait for me" signal; the real verdict arrives through
    /// an external channel keyed by the submission's transaction id
    Deferred {
        /// Always [`NOOP`]
        reason: String,
    },

    /// Classification could not be produced
    Failed {
        /// Host-visible failure description
        reason: String,
    },
}

impl Verdict {
    /// Create a definitive flagged/unflagged verdict
    pub fn flagged(value: bool) -> Self {
        Self::Flagged { value }
    }

    /// Create the deferral signal
    pub fn noop() -> Self {
        Self::Deferred {
            reason: NOOP.to_string(),
        }
    }

    /// Create a failure verdict
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Whether this verdict carries a definitive boolean
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Flagged { .. })
    }

    /// Whether this verdict defers to out-of-band processing
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred { .. })
    }

    /// Whether this verdict reports a failure
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The definitive boolean, if this verdict carries one
    pub fn value(&self) -> Option<bool> {
        match self {
            Self::Flagged { value } => Some(*value),
            _ => None,
        }
    }
}
