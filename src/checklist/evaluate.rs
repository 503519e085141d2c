//! Deciding whether a located checklist is satisfied

use std::fmt;

use super::locate::Located;
use crate::EMPTY_CHECKBOX;

/// Verdict on a pull request's checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatisfactionResult {
    Satisfied,
    Unsatisfied,
    /// The checklist no longer matches the configured criteria
    Malformed,
}

impl SatisfactionResult {
    pub fn is_satisfied(self) -> bool {
        self == SatisfactionResult::Satisfied
    }
}

impl fmt::Display for SatisfactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatisfactionResult::Satisfied => write!(f, "satisfied"),
            SatisfactionResult::Unsatisfied => write!(f, "unsatisfied"),
            SatisfactionResult::Malformed => write!(f, "malformed"),
        }
    }
}

/// Judge a located checklist.
///
/// Unchecked lines whose text starts or ends with `optional_tag` do not block
/// satisfaction. Lines are scanned in order and the first blocking line decides.
/// Returns `None` when there is no checklist to judge.
pub fn evaluate(located: &Located<'_>, optional_tag: Option<&str>) -> Option<SatisfactionResult> {
    match located {
        Located::Missing => None,
        Located::Malformed { .. } => Some(SatisfactionResult::Malformed),
        Located::Found(block) => Some(evaluate_text(block.raw_text, optional_tag)),
    }
}

/// Judge raw checklist text.
pub fn evaluate_text(raw_text: &str, optional_tag: Option<&str>) -> SatisfactionResult {
    if !raw_text.contains(EMPTY_CHECKBOX) {
        return SatisfactionResult::Satisfied;
    }

    let tag = match optional_tag {
        Some(tag) if !tag.is_empty() => tag,
        _ => return SatisfactionResult::Unsatisfied,
    };

    for line in raw_text.lines() {
        let Some(text) = line.trim().strip_prefix(EMPTY_CHECKBOX) else {
            continue;
        };
        let text = text.trim();
        if !(text.starts_with(tag) || text.ends_with(tag)) {
            return SatisfactionResult::Unsatisfied;
        }
    }

    SatisfactionResult::Satisfied
}
