//! File payload handed to the plugin by the moderation host

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An in-memory file submitted for classification.
///
/// The buffer is immutable once constructed; `Bytes` makes sharing it across
/// the check call cheap without copying. The transaction id is the correlation
/// key linking this submission to any out-of-band verdict produced later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePayload {
    /// Raw file content
    pub buffer: Bytes,

    /// Media type of the content (e.g. "image/jpeg")
    pub mime_type: String,

    /// Transaction identifier, unique per submission
    pub tx_id: String,
}

impl FilePayload {
    /// Create a new payload
    pub fn new(
        buffer: impl Into<Bytes>,
        mime_type: impl Into<String>,
        tx_id: impl Into<String>,
    ) -> Self {
        Self {
            buffer: buffer.into(),
            mime_type: mime_type.into(),
            tx_id: tx_id.into(),
        }
    }

    /// Length of the file content in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the payload carries no content
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
