//! Author-selected criteria overrides
//!
//! A pull request author may end the description with a YAML fence naming an
//! alternate criteria file:
//!
//! ````markdown
//! ```yaml
//! dod_yaml: .github/dod-docs-only.yml
//! ```
//! ````
//!
//! Anything short of a valid, existing file falls back to the default
//! criteria. A file that exists but fails validation is an error.

mod fence;

#[cfg(test)]
mod tests;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::GateConfig;
use crate::criteria::{load_criteria, CriteriaSet};
use crate::error::ConfigError;

pub use fence::extract_trailing_yaml;

/// Parsed content of an override fence
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverrideDirective {
    pub dod_yaml: PathBuf,
}

/// Criteria in effect for an evaluation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub criteria: CriteriaSet,
    pub replaced: bool,
}

impl Resolution {
    fn default_criteria(criteria: CriteriaSet) -> Self {
        Self {
            criteria,
            replaced: false,
        }
    }
}

/// Pick the criteria for this pass, honouring a trailing override fence.
pub fn resolve(
    default_criteria: CriteriaSet,
    description: &str,
    config: &GateConfig,
) -> Result<Resolution, ConfigError> {
    let Some(directive) = parse_directive(description, &config.header) else {
        return Ok(Resolution::default_criteria(default_criteria));
    };

    if !is_within_repository(&directive.dod_yaml) {
        warn!(
            path = %directive.dod_yaml.display(),
            "ignoring override outside the repository"
        );
        return Ok(Resolution::default_criteria(default_criteria));
    }

    let path = config.root().join(&directive.dod_yaml);
    if !path.is_file() {
        debug!(path = %path.display(), "override criteria file not found");
        return Ok(Resolution::default_criteria(default_criteria));
    }

    let criteria = load_criteria(&path, &config.indent_glyph)?;
    info!(path = %path.display(), count = criteria.len(), "using override criteria");

    Ok(Resolution {
        criteria,
        replaced: true,
    })
}

/// Read the override directive at the end of the author's text, if any.
///
/// Everything from the first checklist header onwards is ignored.
pub fn parse_directive(description: &str, header: &str) -> Option<OverrideDirective> {
    let authored = match description.find(header) {
        Some(idx) => &description[..idx],
        None => description,
    };

    let yaml = extract_trailing_yaml(authored.trim_end())?;
    match serde_yaml::from_str::<OverrideDirective>(yaml) {
        Ok(directive) => Some(directive),
        Err(e) => {
            debug!(error = %e, "trailing YAML fence is not an override directive");
            None
        }
    }
}

fn is_within_repository(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
