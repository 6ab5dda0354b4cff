//! Error types for launchgate-core.
//!
//! The authorization rule itself is total and never fails; these errors
//! cover loading and running drills only.

/// Result type alias for launchgate operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Errors raised while configuring or running drills.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Configuration error (parse or validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// An attempt referenced a code label that was never issued.
    #[error("unknown launch code: {0}")]
    UnknownCode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LaunchError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an unknown code error.
    #[must_use]
    pub fn unknown_code(label: impl Into<String>) -> Self {
        Self::UnknownCode(label.into())
    }
}
