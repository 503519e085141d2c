//! Criteria file loading and validation
//!
//! A criteria file is a YAML mapping with a `dod` key bound to a sequence of
//! strings. Each string may carry the indent glyph any number of times to nest
//! the rendered checkbox.

use serde_yaml::Value;
use std::path::Path;

use super::types::{CriteriaSet, Criterion};
use crate::error::ConfigError;

/// Read and validate a criteria file.
pub fn load_criteria(path: &Path, indent_glyph: &str) -> Result<CriteriaSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_criteria(&content, indent_glyph)
}

/// Validate criteria YAML already held in memory.
pub fn parse_criteria(content: &str, indent_glyph: &str) -> Result<CriteriaSet, ConfigError> {
    let document: Value = serde_yaml::from_str(content)?;

    let mapping = document.as_mapping().ok_or(ConfigError::NotAMapping)?;
    let dod = mapping.get("dod").ok_or(ConfigError::MissingDod)?;
    let entries = dod.as_sequence().ok_or(ConfigError::DodNotSequence)?;

    let mut criteria = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let raw = entry
            .as_str()
            .ok_or(ConfigError::NonStringEntry { index: idx + 1 })?;

        let criterion = Criterion::parse(raw, indent_glyph);
        if criterion.text.is_empty() {
            return Err(ConfigError::EmptyCriterion { index: idx + 1 });
        }
        criteria.push(criterion);
    }

    CriteriaSet::new(criteria)
}
