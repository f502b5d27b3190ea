use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the drawing core to the UI layer
#[derive(Debug, Error)]
pub enum PaintError {
    /// A textual tool tag did not name a known color or shape kind
    #[error("Invalid {kind} tag: {value:?}")]
    InvalidArgument {
        kind: &'static str,
        value: String,
    },

    /// The drawing could not be written to its destination
    #[error("Failed to write drawing to {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing could not be encoded
    #[error("Failed to encode drawing: {0}")]
    Encode(#[from] serde_json::Error),

    /// The source could not be read, or its content is not a valid drawing
    #[error("Failed to decode drawing: {0}")]
    Decode(String),
}

impl PaintError {
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Encode(_))
    }

    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result type for drawing operations
pub type PaintResult<T> = Result<T, PaintError>;
