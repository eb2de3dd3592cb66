use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the caption styler and subtitle serializer.
#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("Invalid style: {0}. Available: meme, formal, casual, aesthetic")]
    InvalidStyle(String),

    #[error("Failed to write subtitle file {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed subtitle at line {line}: {reason}")]
    MalformedSubtitle { line: usize, reason: String },
}

/// Recovery failures. These never leave `recover`; they pick the next tier.
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("payload has an unexpected shape: {0}")]
    Shape(String),
}
