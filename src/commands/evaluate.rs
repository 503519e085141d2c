//! Offline gate run against local files

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::print_verdict;
use crate::config::{ChecklistLocation, GateConfig};
use crate::gate::{self, append_checklist, GateOutcome};

/// Execute the evaluate command. Returns whether the gate passed.
///
/// With `write`, a missing checklist is appended to the description file (or
/// written to the checklist file when one is given).
pub fn execute(
    config: &GateConfig,
    description_file: &Path,
    checklist_file: Option<&Path>,
    write: bool,
) -> Result<bool> {
    let default_criteria = config.load_default_criteria().with_context(|| {
        format!(
            "Failed to load criteria from {}",
            config.criteria_path().display()
        )
    })?;

    let description = read(description_file)?;
    let report = match checklist_file {
        Some(path) => {
            let checklist = if path.exists() {
                read(path)?
            } else {
                String::new()
            };
            gate::run_with_checklist(config, default_criteria, &description, &checklist)?
        }
        None => gate::run(config, default_criteria, &description)?,
    };

    if let GateOutcome::NoExistingChecklist { message } = &report.outcome {
        if write {
            let (target, content) = match checklist_file {
                Some(path) => (path, message.clone()),
                None => (description_file, append_checklist(&description, message)),
            };
            std::fs::write(target, content)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            println!(
                "{} Wrote Definition of Done checklist to {}",
                "→".cyan().bold(),
                target.display()
            );
        } else {
            print!("{message}");
        }
    }

    print_verdict(&report, verdict_location(checklist_file));
    Ok(report.outcome.is_success())
}

/// A separate checklist file stands in for the bot comment.
fn verdict_location(checklist_file: Option<&Path>) -> ChecklistLocation {
    if checklist_file.is_some() {
        ChecklistLocation::Comment
    } else {
        ChecklistLocation::Description
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
