//! Gate run against a live pull request

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::print_verdict;
use crate::config::{ChecklistLocation, GateConfig, GitHubSettings};
use crate::error::GateError;
use crate::event::EventPayload;
use crate::gate::{self, append_checklist, GateOutcome};
use crate::github::{find_bot_comment, GitHubClient};

/// Execute the check command. Returns whether the gate passed.
pub fn execute(
    config: &GateConfig,
    settings: GitHubSettings,
    pull_request: Option<u64>,
    event_path: Option<&Path>,
) -> Result<bool> {
    let default_criteria = config.load_default_criteria().with_context(|| {
        format!(
            "Failed to load criteria from {}",
            config.criteria_path().display()
        )
    })?;

    let number = pull_request_number(pull_request, event_path)?;
    let client = GitHubClient::new(settings)?;
    let description = client
        .pull_request_body(number)
        .with_context(|| format!("Failed to read pull request #{number}"))?;

    let report = match config.location {
        ChecklistLocation::Description => {
            let report = gate::run(config, default_criteria, &description)?;
            if let GateOutcome::NoExistingChecklist { message } = &report.outcome {
                client
                    .update_pull_request_body(number, &append_checklist(&description, message))
                    .context("Failed to add checklist to pull request description")?;
                println!(
                    "{} Added Definition of Done checklist to pull request #{}",
                    "→".cyan().bold(),
                    number
                );
            }
            report
        }
        ChecklistLocation::Comment => {
            let comments = client
                .list_comments(number)
                .with_context(|| format!("Failed to list comments on pull request #{number}"))?;
            let checklist = find_bot_comment(&comments, &config.header)
                .map(|c| c.body.as_str())
                .unwrap_or_default();

            let report =
                gate::run_with_checklist(config, default_criteria, &description, checklist)?;
            if let GateOutcome::NoExistingChecklist { message } = &report.outcome {
                client
                    .post_comment(number, message)
                    .context("Failed to post checklist comment")?;
                println!(
                    "{} Posted Definition of Done checklist on pull request #{}",
                    "→".cyan().bold(),
                    number
                );
            }
            report
        }
    };

    print_verdict(&report, config.location);
    Ok(report.outcome.is_success())
}

fn pull_request_number(explicit: Option<u64>, event_path: Option<&Path>) -> Result<u64> {
    if let Some(number) = explicit {
        return Ok(number);
    }

    let path = event_path.ok_or(GateError::MissingPullRequest)?;
    let event = EventPayload::load(path)?;
    Ok(event
        .pull_request_number()
        .ok_or(GateError::MissingPullRequest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_number_wins() {
        assert_eq!(pull_request_number(Some(5), None).unwrap(), 5);
    }

    #[test]
    fn test_number_from_event() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        std::fs::write(&path, r#"{"pull_request":{"number":42}}"#).unwrap();

        assert_eq!(pull_request_number(None, Some(&path)).unwrap(), 42);
    }

    #[test]
    fn test_no_number_anywhere() {
        let err = pull_request_number(None, None).unwrap_err();
        assert!(err.to_string().contains("no pull request number"));
    }
}
