//! Loading of the four versioning directives from configuration sources.
//!
//! For each directive the first present value wins, in this order:
//! 1. `dynamic_versioning.toml` in the project directory (or an explicit
//!    custom path, which replaces this slot)
//! 2. the `[tool.dynamic_versioning]` table of `pyproject.toml`
//! 3. `dynamic_versioning.toml` in the user config directory
//! 4. the `DV_*` environment variables
//!
//! Empty or whitespace-only values are treated as absent. String-keyed raw
//! values normalize into the typed [Directives] here; the resolver never
//! sees raw configuration syntax.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::domain::BumpKind;
use crate::error::{DynamicVersioningError, Result};

/// Project-local configuration file name
pub const CONFIG_FILE_NAME: &str = "dynamic_versioning.toml";
/// Project configuration file carrying the `[tool.dynamic_versioning]` table
pub const PROJECT_FILE_NAME: &str = "pyproject.toml";

pub const ENV_NEW_VERSION: &str = "DV_NEW_VERSION";
pub const ENV_VERSION_BUMP: &str = "DV_VERSION_BUMP";
pub const ENV_CURRENT_VERSION: &str = "DV_CURRENT_VERSION";
pub const ENV_DEV_VERSION: &str = "DV_DEV_VERSION";

/// The fully-typed directive set handed to the resolver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directives {
    pub new_version: Option<String>,
    pub version_bump: Option<BumpKind>,
    pub current_version: Option<String>,
    pub dev_version: bool,
}

/// Directives as they appear in files and the environment, before
/// normalization
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawDirectives {
    pub new_version: Option<String>,
    pub version_bump: Option<String>,
    pub current_version: Option<String>,
    pub dev_version: Option<DevFlag>,
}

/// The dev-version directive accepts a native TOML boolean or the string
/// forms "true"/"t" (case-insensitive)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DevFlag {
    Bool(bool),
    Text(String),
}

impl DevFlag {
    fn as_bool(&self) -> bool {
        match self {
            DevFlag::Bool(b) => *b,
            DevFlag::Text(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "t"),
        }
    }

    fn is_empty_text(&self) -> bool {
        matches!(self, DevFlag::Text(s) if s.trim().is_empty())
    }
}

impl RawDirectives {
    /// Drop empty-string values so they read as absent
    fn cleaned(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        RawDirectives {
            new_version: non_empty(self.new_version),
            version_bump: non_empty(self.version_bump),
            current_version: non_empty(self.current_version),
            dev_version: self.dev_version.filter(|f| !f.is_empty_text()),
        }
    }

    /// Fill absent directives from a lower-precedence source
    fn or(self, lower: RawDirectives) -> Self {
        RawDirectives {
            new_version: self.new_version.or(lower.new_version),
            version_bump: self.version_bump.or(lower.version_bump),
            current_version: self.current_version.or(lower.current_version),
            dev_version: self.dev_version.or(lower.dev_version),
        }
    }

    /// Normalize into the typed directive set.
    ///
    /// An unrecognized version-bump value is fatal here, before any git work
    /// happens.
    pub fn into_directives(self) -> Result<Directives> {
        let version_bump = self
            .version_bump
            .map(|raw| raw.parse::<BumpKind>())
            .transpose()?;

        Ok(Directives {
            new_version: self.new_version,
            version_bump,
            current_version: self.current_version,
            dev_version: self.dev_version.map(|f| f.as_bool()).unwrap_or(false),
        })
    }
}

/// Loads the directive set for a project.
///
/// # Arguments
/// * `config_path` - Optional custom configuration file; replaces the
///   project-local `dynamic_versioning.toml` lookup and must exist
/// * `project_dir` - Directory holding `dynamic_versioning.toml` and
///   `pyproject.toml`
pub fn load_directives(config_path: Option<&Path>, project_dir: &Path) -> Result<Directives> {
    let file = match config_path {
        Some(path) => Some(read_directives_file(path)?),
        None => read_optional_directives_file(&project_dir.join(CONFIG_FILE_NAME))?,
    };
    let project = read_pyproject_table(&project_dir.join(PROJECT_FILE_NAME))?;
    let user = read_user_config()?;
    let environment = read_environment();

    let merged = file
        .unwrap_or_default()
        .or(project.unwrap_or_default())
        .or(user.unwrap_or_default())
        .or(environment);

    merged.into_directives()
}

/// Read the `dynamic_versioning.toml` in the user config directory, if any
fn read_user_config() -> Result<Option<RawDirectives>> {
    match dirs::config_dir() {
        Some(config_dir) => read_optional_directives_file(&config_dir.join(CONFIG_FILE_NAME)),
        None => Ok(None),
    }
}

fn read_optional_directives_file(path: &Path) -> Result<Option<RawDirectives>> {
    if !path.exists() {
        return Ok(None);
    }
    read_directives_file(path).map(Some)
}

/// A file that exists but cannot be read or parsed is a configuration error
fn read_directives_file(path: &Path) -> Result<RawDirectives> {
    let contents = fs::read_to_string(path).map_err(|e| {
        DynamicVersioningError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    let raw: RawDirectives = toml::from_str(&contents).map_err(|e| {
        DynamicVersioningError::config(format!("cannot parse '{}': {}", path.display(), e))
    })?;

    Ok(raw.cleaned())
}

/// Extract the `[tool.dynamic_versioning]` table from a pyproject file.
///
/// A missing file or missing table is simply an absent source.
fn read_pyproject_table(path: &Path) -> Result<Option<RawDirectives>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DynamicVersioningError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    let document: toml::Value = toml::from_str(&contents).map_err(|e| {
        DynamicVersioningError::config(format!("cannot parse '{}': {}", path.display(), e))
    })?;

    let table = match document
        .get("tool")
        .and_then(|tool| tool.get("dynamic_versioning"))
    {
        Some(table) => table.clone(),
        None => return Ok(None),
    };

    let raw: RawDirectives = table.try_into().map_err(|e| {
        DynamicVersioningError::config(format!(
            "invalid [tool.dynamic_versioning] table in '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(Some(raw.cleaned()))
}

/// Environment variables are the lowest-precedence source
fn read_environment() -> RawDirectives {
    RawDirectives {
        new_version: env::var(ENV_NEW_VERSION).ok(),
        version_bump: env::var(ENV_VERSION_BUMP).ok(),
        current_version: env::var(ENV_CURRENT_VERSION).ok(),
        dev_version: env::var(ENV_DEV_VERSION).ok().map(DevFlag::Text),
    }
    .cleaned()
}
