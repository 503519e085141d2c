//! Gate configuration
//!
//! Everything the core needs is carried here explicitly; only the CLI layer
//! looks at the process environment to fill it in.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::anyhow;

use crate::criteria::{load_criteria, CriteriaSet};
use crate::error::ConfigError;
use crate::{DEFAULT_HEADER, DEFAULT_INDENT_GLYPH};

/// Default criteria file, relative to the repository root
pub const DEFAULT_DOD_YAML: &str = ".github/dod.yml";

/// Default GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Where the checklist is kept on the pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecklistLocation {
    /// Appended to the pull request description
    #[default]
    Description,
    /// A dedicated comment posted by a bot account
    Comment,
}

impl FromStr for ChecklistLocation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "description" | "body" => Ok(ChecklistLocation::Description),
            "comment" => Ok(ChecklistLocation::Comment),
            _ => Err(anyhow!(
                "Unsupported checklist location: {s}. Supported locations: description, comment"
            )),
        }
    }
}

impl fmt::Display for ChecklistLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecklistLocation::Description => write!(f, "description"),
            ChecklistLocation::Comment => write!(f, "comment"),
        }
    }
}

/// Settings for one evaluation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub header: String,
    pub optional_tag: Option<String>,
    pub indent_glyph: String,
    /// Default criteria file, relative to `repository_root`
    pub dod_yaml: PathBuf,
    pub repository_root: PathBuf,
    pub location: ChecklistLocation,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            optional_tag: None,
            indent_glyph: DEFAULT_INDENT_GLYPH.to_string(),
            dod_yaml: PathBuf::from(DEFAULT_DOD_YAML),
            repository_root: PathBuf::from("."),
            location: ChecklistLocation::default(),
        }
    }
}

impl GateConfig {
    pub fn new(repository_root: impl Into<PathBuf>) -> Self {
        Self {
            repository_root: repository_root.into(),
            ..Self::default()
        }
    }

    /// Optional tag, with an empty string treated as no tag.
    pub fn optional_tag(&self) -> Option<&str> {
        self.optional_tag.as_deref().filter(|tag| !tag.is_empty())
    }

    pub fn root(&self) -> &Path {
        &self.repository_root
    }

    /// Absolute location of the default criteria file.
    pub fn criteria_path(&self) -> PathBuf {
        self.repository_root.join(&self.dod_yaml)
    }

    /// Load the default criteria file.
    pub fn load_default_criteria(&self) -> Result<CriteriaSet, ConfigError> {
        load_criteria(&self.criteria_path(), &self.indent_glyph)
    }
}

/// Connection settings for the GitHub REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubSettings {
    pub api_url: String,
    /// `owner/name`
    pub repository: String,
    pub token: Option<String>,
}
