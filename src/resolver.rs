//! Version resolution - the policy that turns tag history and configuration
//! directives into a single version string.
//!
//! Precedence, first match wins:
//! 1. `new-version` is returned verbatim.
//! 2. `version-bump` (without `dev-version`) bumps the current version, or
//!    yields the bootstrap `0.0.1` when the project has no version source yet.
//! 3. `dev-version` produces a PEP 440 development release
//!    (`{major}.{minor}.{patch}.dev{commits}`).
//! 4. With no directives at all, behave as `dev-version` with a default
//!    major bump.

use crate::config::Directives;
use crate::domain::{BumpKind, Version};
use crate::error::{DynamicVersioningError, Result};
use crate::git::TagDescription;

/// First release stamped when no tag and no current-version fallback exist
pub const BOOTSTRAP_VERSION: Version = Version::new(0, 0, 1);

/// All inputs the resolver needs, gathered by collaborators up front.
///
/// The resolver itself performs no I/O and holds no state across calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionInput {
    /// Explicit version, trusted verbatim when non-empty
    pub new_version: Option<String>,
    /// Which part of the current version to bump
    pub version_bump: Option<BumpKind>,
    /// Fallback version used when no annotated tag is available
    pub current_version: Option<String>,
    /// Whether a development release was requested
    pub dev_version: bool,
    /// Most recent annotated tag, possibly `v`/`V` prefixed
    pub tag: Option<String>,
    /// Commits since that tag (0 when the tag is the current commit)
    pub commits_since_tag: u32,
}

impl ResolutionInput {
    /// Combine loaded directives with the tag data gathered from git
    pub fn from_parts(directives: Directives, description: Option<TagDescription>) -> Self {
        let (tag, commits_since_tag) = match description {
            Some(desc) => (Some(desc.tag), desc.commits_since_tag),
            None => (None, 0),
        };

        ResolutionInput {
            new_version: directives.new_version,
            version_bump: directives.version_bump,
            current_version: directives.current_version,
            dev_version: directives.dev_version,
            tag,
            commits_since_tag,
        }
    }
}

/// Compute the version string for the given inputs.
///
/// This is a pure function; every failure is deterministic and reflects a
/// configuration or tag-history problem, never a transient condition.
pub fn resolve(input: &ResolutionInput) -> Result<String> {
    // an explicit new-version overrides everything else; an empty value is
    // treated as absent, consistent with the other directives
    if let Some(new_version) = &input.new_version {
        if !new_version.trim().is_empty() {
            return Ok(new_version.clone());
        }
    }

    if let Some(kind) = input.version_bump {
        if !input.dev_version {
            return match resolve_current(input.tag.as_deref(), input.current_version.as_deref()) {
                Ok(current) => Ok(current.bump(kind).to_string()),
                // no tag and no fallback: seed the project's first release
                Err(DynamicVersioningError::NoVersionSource(_)) => {
                    Ok(BOOTSTRAP_VERSION.to_string())
                }
                Err(e) => Err(e),
            };
        }
    }

    // dev-version mode, which is also the zero-configuration default
    let current = resolve_current(input.tag.as_deref(), input.current_version.as_deref())?;

    if input.commits_since_tag == 0 {
        // no development work since the last release
        return Ok(current.to_string());
    }

    let next = current.bump(input.version_bump.unwrap_or(BumpKind::Major));
    Ok(format!("{}.dev{}", next, input.commits_since_tag))
}

/// Determine the current version from the tag, falling back to the
/// configured current-version.
///
/// A malformed tag is treated the same as an absent tag. A malformed
/// fallback propagates as a parse error, since it is the last source.
pub fn resolve_current(tag: Option<&str>, fallback: Option<&str>) -> Result<Version> {
    if let Some(tag) = tag {
        if let Ok(version) = Version::parse(tag) {
            return Ok(version);
        }
    }

    match fallback {
        Some(value) => Version::parse(value),
        None => Err(DynamicVersioningError::no_version_source(
            "no annotated tag and no current-version fallback; create an annotated tag, \
             set current-version, or supply new-version",
        )),
    }
}
