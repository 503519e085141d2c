//! Checklist message rendering

use crate::criteria::CriteriaSet;
use crate::EMPTY_CHECKBOX;

/// Render the checklist block posted to a pull request.
///
/// The header is followed by one unchecked line per criterion, indented by two
/// spaces per nesting level. The locator recognises exactly this layout.
pub fn compose(header: &str, criteria: &CriteriaSet) -> String {
    let mut message = String::with_capacity(header.len() + 1 + criteria.len() * 32);
    message.push_str(header);
    message.push('\n');

    for criterion in criteria {
        message.push_str(&"  ".repeat(criterion.depth));
        message.push_str(EMPTY_CHECKBOX);
        message.push(' ');
        message.push_str(&criterion.text);
        message.push('\n');
    }

    message
}
