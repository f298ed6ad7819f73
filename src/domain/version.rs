use crate::error::{DynamicVersioningError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a tag or configuration string (e.g., "v1.2.3" -> Version(1,2,3)).
    ///
    /// Accepts an optional leading 'v'/'V'. Content after the patch number is
    /// ignored, so describe-style tags like "v1.2.3-4-gdeadbee" parse too.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.trim();
        let clean = clean.strip_prefix(&['v', 'V'][..]).unwrap_or(clean);

        let mut parts = clean.split('.');

        let major = Self::parse_part(parts.next(), text, "major")?;
        let minor = Self::parse_part(parts.next(), text, "minor")?;

        // tags may carry a suffix after the patch number
        let patch_part = parts.next().ok_or_else(|| {
            DynamicVersioningError::parse(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            ))
        })?;
        let digits_end = patch_part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(patch_part.len());
        if digits_end == 0 {
            return Err(DynamicVersioningError::parse(format!(
                "Invalid patch version in '{}': {}",
                text, patch_part
            )));
        }
        let patch = patch_part[..digits_end].parse::<u32>().map_err(|_| {
            DynamicVersioningError::parse(format!(
                "Invalid patch version in '{}': {}",
                text, patch_part
            ))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    fn parse_part(part: Option<&str>, text: &str, name: &str) -> Result<u32> {
        let part = part.ok_or_else(|| {
            DynamicVersioningError::parse(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            ))
        })?;
        part.parse::<u32>().map_err(|_| {
            DynamicVersioningError::parse(format!("Invalid {} version in '{}': {}", name, text, part))
        })
    }

    /// Bump version according to bump kind
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The part of a semantic version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpKind {
    type Err = DynamicVersioningError;

    /// Case-insensitive; "update" is an alias for "patch"
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" | "update" => Ok(BumpKind::Patch),
            _ => Err(DynamicVersioningError::InvalidBumpKind(s.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        };
        write!(f, "{}", name)
    }
}
