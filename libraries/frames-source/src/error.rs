/// Source-specific errors
use thiserror::Error;

/// Result type alias using `SourceError`
pub type Result<T> = std::result::Result<T, SourceError>;

/// Source error types
#[derive(Error, Debug)]
pub enum SourceError {
    /// Invalid range, view or signal description
    #[error(transparent)]
    Frames(#[from] frames_core::FramesError),

    /// Destination slice does not match the requested frame range
    #[error("Slice length mismatch: expected {expected} samples, got {actual}")]
    SliceLengthMismatch { expected: usize, actual: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for SourceError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
