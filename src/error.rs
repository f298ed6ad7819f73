use thiserror::Error;

/// Unified error type for dynamic-versioning operations
#[derive(Error, Debug)]
pub enum DynamicVersioningError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("No version source available: {0}")]
    NoVersionSource(String),

    #[error("Invalid version bump '{0}' - expected one of: major, minor, patch, update")]
    InvalidBumpKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in dynamic-versioning
pub type Result<T> = std::result::Result<T, DynamicVersioningError>;

impl DynamicVersioningError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DynamicVersioningError::Config(msg.into())
    }

    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        DynamicVersioningError::Parse(msg.into())
    }

    /// Create a no-version-source error with context
    pub fn no_version_source(msg: impl Into<String>) -> Self {
        DynamicVersioningError::NoVersionSource(msg.into())
    }
}
