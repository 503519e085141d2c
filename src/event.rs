//! Pipeline event payload
//!
//! GitHub Actions writes the triggering event as JSON to the file named by
//! `GITHUB_EVENT_PATH`. Only the pull request fields the gate needs are read.

use serde::Deserialize;
use std::path::Path;

use crate::error::GateError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub pull_request: Option<PullRequestEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub number: u64,
}

impl EventPayload {
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let content = std::fs::read_to_string(path).map_err(|e| GateError::Event {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| GateError::Event {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn pull_request_number(&self) -> Option<u64> {
        self.pull_request
            .as_ref()
            .map(|pr| pr.number)
            .or(self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_pull_request_event() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        std::fs::write(
            &path,
            r#"{"action":"edited","number":7,"pull_request":{"number":7,"body":"Hello","title":"x"}}"#,
        )
        .unwrap();

        let event = EventPayload::load(&path).unwrap();
        assert_eq!(event.pull_request_number(), Some(7));
    }

    #[test]
    fn test_number_fallbacks() {
        let event: EventPayload =
            serde_json::from_str(r#"{"pull_request":{"number":3,"body":null}}"#).unwrap();
        assert_eq!(event.pull_request_number(), Some(3));

        let event: EventPayload = serde_json::from_str(r#"{"number":11,"issue":{}}"#).unwrap();
        assert_eq!(event.pull_request_number(), Some(11));

        let event: EventPayload = serde_json::from_str(r#"{"issue":{}}"#).unwrap();
        assert_eq!(event.pull_request_number(), None);
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            EventPayload::load(&path),
            Err(GateError::Event { .. })
        ));
    }
}
