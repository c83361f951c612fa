//! Error types for diffd

use super::Side;
use thiserror::Error;

/// Error types for diffd operations
///
/// Every rejection carries the specific cause; the transport layer maps
/// each variant to a status code and a human-readable reason.
#[derive(Debug, Error)]
pub enum DiffdError {
    /// Submission arrived without a payload field, or with an empty one
    #[error("missing data")]
    MissingPayload,

    /// Comparison requested before the named side was submitted
    #[error("{0} missing")]
    MissingSide(Side),

    /// Stored payload is not valid base64 (automatically converted via #[from])
    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiffdError {
    /// Check if this error was caused by client input
    ///
    /// Client input errors are surfaced synchronously as rejections and
    /// never logged as faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DiffdError::MissingPayload | DiffdError::MissingSide(_) | DiffdError::Decode(_)
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, DiffdError::Config(_))
    }
}
