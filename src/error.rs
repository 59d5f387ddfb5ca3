use thiserror::Error;

/// Unified error type for release-versioning operations
#[derive(Error, Debug)]
pub enum VersioningError {
    #[error("Malformed version: '{0}'")]
    MalformedVersion(String),

    #[error("Invalid bump classification: '{0}' (expected patch, minor, breaking or major)")]
    InvalidClassification(String),

    #[error("Version component overflow while bumping {0}")]
    VersionOverflow(String),

    #[error("Unknown versioning strategy: '{0}'")]
    UnknownStrategy(String),

    #[error("Versioning strategy already registered: '{0}'")]
    DuplicateStrategy(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-versioning
pub type Result<T> = std::result::Result<T, VersioningError>;

impl VersioningError {
    /// Create a malformed version error for the offending input
    pub fn malformed(input: impl Into<String>) -> Self {
        VersioningError::MalformedVersion(input.into())
    }

    /// Create an invalid classification error for the offending input
    pub fn classification(input: impl Into<String>) -> Self {
        VersioningError::InvalidClassification(input.into())
    }

    /// Create an overflow error naming the version being bumped
    pub fn overflow(version: impl Into<String>) -> Self {
        VersioningError::VersionOverflow(version.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersioningError::Config(msg.into())
    }
}
