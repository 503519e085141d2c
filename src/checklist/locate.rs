//! Finding a previously posted checklist inside freeform text

use tracing::warn;

use crate::criteria::CriteriaSet;

/// A checklist region of a larger text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistBlock<'a> {
    pub raw_text: &'a str,
    /// Byte offset of the header
    pub start: usize,
    /// Byte offset just past the last criterion's text
    pub end: usize,
}

/// Outcome of searching a description for a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located<'a> {
    /// Header not present: nothing has been posted yet
    Missing,
    Found(ChecklistBlock<'a>),
    /// Header present but the last criterion's text does not follow it
    Malformed { start: usize },
}

/// Locate the checklist block in `description`.
///
/// The block starts at the first occurrence of `header` and ends after the
/// first occurrence of the last criterion's text that follows it.
pub fn locate<'a>(description: &'a str, header: &str, criteria: &CriteriaSet) -> Located<'a> {
    let Some(start) = description.find(header) else {
        return Located::Missing;
    };

    let last_text = criteria.last().text.as_str();
    match description[start..].find(last_text) {
        Some(offset) => {
            let end = start + offset + last_text.len();
            Located::Found(ChecklistBlock {
                raw_text: &description[start..end],
                start,
                end,
            })
        }
        None => {
            warn!(
                start,
                last_criterion = last_text,
                "checklist header found but last criterion is missing"
            );
            Located::Malformed { start }
        }
    }
}
