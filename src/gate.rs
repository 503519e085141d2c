//! One evaluation pass of the Definition of Done gate
//!
//! The pass is pure: the caller reads the pull request text, runs the gate,
//! and writes back whatever the outcome asks for.

use tracing::info;

use crate::checklist::{compose, evaluate, locate, SatisfactionResult};
use crate::config::{ChecklistLocation, GateConfig};
use crate::criteria::CriteriaSet;
use crate::error::ConfigError;
use crate::resolve::resolve;

/// What the caller has to do after a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// No checklist yet; `message` must be posted and the gate fails
    NoExistingChecklist { message: String },
    Evaluated(SatisfactionResult),
}

impl GateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GateOutcome::Evaluated(SatisfactionResult::Satisfied))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Text shown to maintainers for this outcome.
    pub fn verdict(&self, location: ChecklistLocation) -> String {
        match self {
            GateOutcome::Evaluated(SatisfactionResult::Satisfied) => {
                "All DoD criteria are satisfied. 🎉".to_string()
            }
            GateOutcome::Evaluated(SatisfactionResult::Unsatisfied) => format!(
                "The Definition of Done for this pull request has not yet been fully marked as \
                 satisfied by a repository maintainer. Please make sure all checkboxes in the \
                 pull request {location} have been checked off."
            ),
            GateOutcome::Evaluated(SatisfactionResult::Malformed) => format!(
                "The Definition of Done checklist in the pull request {location} no longer \
                 matches the configured criteria. Please remove the stale checklist so a fresh \
                 one can be posted."
            ),
            GateOutcome::NoExistingChecklist { .. } => format!(
                "The Definition of Done for this pull request has not yet been fully marked as \
                 satisfied by a repository maintainer. Please make sure to check the criteria \
                 off in the pull request {location} once they are met."
            ),
        }
    }
}

/// Outcome plus how the criteria were chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    pub outcome: GateOutcome,
    pub criteria: CriteriaSet,
    /// True when the author's override replaced the default criteria
    pub replaced: bool,
}

/// Run the gate on a description that also holds the checklist.
pub fn run(
    config: &GateConfig,
    default_criteria: CriteriaSet,
    description: &str,
) -> Result<GateReport, ConfigError> {
    run_with_checklist(config, default_criteria, description, description)
}

/// Run the gate where the checklist lives apart from the description.
///
/// `description` is only consulted for an override directive; `checklist_text`
/// is searched for the posted checklist.
pub fn run_with_checklist(
    config: &GateConfig,
    default_criteria: CriteriaSet,
    description: &str,
    checklist_text: &str,
) -> Result<GateReport, ConfigError> {
    let resolution = resolve(default_criteria, description, config)?;
    let criteria = resolution.criteria;

    let located = locate(checklist_text, &config.header, &criteria);
    let outcome = match evaluate(&located, config.optional_tag()) {
        Some(result) => GateOutcome::Evaluated(result),
        None => GateOutcome::NoExistingChecklist {
            message: compose(&config.header, &criteria),
        },
    };

    info!(
        replaced = resolution.replaced,
        criteria = criteria.len(),
        success = outcome.is_success(),
        "gate evaluated"
    );

    Ok(GateReport {
        outcome,
        criteria,
        replaced: resolution.replaced,
    })
}

/// Description with a freshly composed checklist appended.
pub fn append_checklist(description: &str, message: &str) -> String {
    let trimmed = description.trim_end();
    if trimmed.is_empty() {
        return message.to_string();
    }
    format!("{trimmed}\n\n{message}")
}
