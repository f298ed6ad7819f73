use std::fmt;

/// Non-fatal conditions met while gathering tag data.
/// These are reported to the user; resolution continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Repository has no annotated tags to describe
    NoAnnotatedTags,
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Fetch failed; tag data may be stale
    FetchFailed { remote: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoAnnotatedTags => {
                write!(
                    f,
                    "No annotated tags found; falling back to the configured current-version"
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tag data.",
                    remote, reason
                )
            }
        }
    }
}
