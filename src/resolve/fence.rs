//! Trailing YAML fence extraction

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

#[allow(clippy::expect_used)]
static YAML_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(`{3,})ya?ml[ \t]*\r?$").expect("constant regex pattern is valid")
});

/// Return the body of a YAML fence that closes exactly at the end of `text`.
///
/// The opening fence is the first line consisting of three or more backticks
/// followed by `yaml` or `yml`. The closing fence is the run of backticks
/// ending `text` and must be at least as long as the opener. `text` is
/// expected to be trimmed of trailing whitespace.
pub fn extract_trailing_yaml(text: &str) -> Option<&str> {
    if !text.ends_with("```") {
        return None;
    }

    let captures = YAML_OPENER.captures(text)?;
    let fence_len = captures.get(1)?.len();
    let body_start = captures.get(0)?.end();

    let closer_len = text.len() - text.trim_end_matches('`').len();
    if closer_len < fence_len {
        debug!(closer_len, fence_len, "closing fence shorter than opening fence");
        return None;
    }

    let close = text.len() - closer_len;
    if close < body_start {
        debug!("YAML fence is never closed");
        return None;
    }

    Some(text[body_start..close].trim())
}
