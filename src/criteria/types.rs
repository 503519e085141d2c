//! Criteria type definitions

use crate::error::ConfigError;

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    /// Nesting level, one per indent glyph in the source entry
    pub depth: usize,
    /// Entry text with every indent glyph removed
    pub text: String,
}

impl Criterion {
    /// Split a raw `dod` entry into depth and visible text.
    pub fn parse(raw: &str, indent_glyph: &str) -> Self {
        if indent_glyph.is_empty() {
            return Self {
                depth: 0,
                text: raw.trim().to_string(),
            };
        }

        Self {
            depth: raw.matches(indent_glyph).count(),
            text: raw.replace(indent_glyph, "").trim().to_string(),
        }
    }
}

/// Ordered, non-empty list of criteria
///
/// Order drives rendering, and the final criterion bounds the checklist block
/// when it is searched for in a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ConfigError> {
        if criteria.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(Self { criteria })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// The final criterion, which marks the end of a rendered checklist.
    pub fn last(&self) -> &Criterion {
        // non-empty by construction
        &self.criteria[self.criteria.len() - 1]
    }
}

impl<'a> IntoIterator for &'a CriteriaSet {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}
