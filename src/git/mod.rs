//! Git tag data abstraction layer
//!
//! The resolver only needs two facts from git: the nearest annotated tag and
//! the number of commits since it. The [TagSource] trait captures exactly
//! that, with a real implementation over the `git2` crate and a mock for
//! tests.

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::GitRepository;

use crate::error::{DynamicVersioningError, Result};
use regex::Regex;

/// The nearest annotated tag and its distance from HEAD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescription {
    /// Tag name as written, possibly `v`/`V` prefixed
    pub tag: String,
    /// Commits since the tag; 0 when the tag is the current commit
    pub commits_since_tag: u32,
}

/// Source of annotated-tag data for the current project
pub trait TagSource {
    /// Nearest annotated tag reachable from HEAD, or `None` when the
    /// repository has no annotated tags
    fn describe(&self) -> Result<Option<TagDescription>>;

    /// Pull down the latest tags from a remote
    fn fetch_tags(&self, remote: &str) -> Result<()>;
}

/// Parse a `git describe --long` line ("v1.2.3-12-gdeadbee") into its tag
/// and commit-count parts.
pub fn parse_describe_line(line: &str) -> Result<TagDescription> {
    let re = Regex::new(r"^(?P<tag>.+)-(?P<commits>\d+)-g[0-9a-f]+$")
        .map_err(|e| DynamicVersioningError::parse(format!("describe pattern: {}", e)))?;

    let captures = re.captures(line.trim()).ok_or_else(|| {
        DynamicVersioningError::parse(format!(
            "cannot parse git describe output: '{}'",
            line.trim()
        ))
    })?;

    let commits = captures["commits"].parse::<u32>().map_err(|_| {
        DynamicVersioningError::parse(format!(
            "invalid commit count in git describe output: '{}'",
            line.trim()
        ))
    })?;

    Ok(TagDescription {
        tag: captures["tag"].to_string(),
        commits_since_tag: commits,
    })
}
