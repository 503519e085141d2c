pub mod check;
pub mod evaluate;
pub mod render;

use colored::Colorize;

use crate::checklist::SatisfactionResult;
use crate::config::ChecklistLocation;
use crate::gate::{GateOutcome, GateReport};

/// Print the maintainer-facing verdict for a gate run.
pub(crate) fn print_verdict(report: &GateReport, location: ChecklistLocation) {
    if report.replaced {
        println!(
            "{} Using criteria selected in the pull request description",
            "→".cyan().bold()
        );
    }

    let text = report.outcome.verdict(location);
    match &report.outcome {
        GateOutcome::Evaluated(SatisfactionResult::Satisfied) => {
            println!("{} {}", "✓".green().bold(), text);
        }
        GateOutcome::Evaluated(SatisfactionResult::Malformed) => {
            println!("{} {}", "✗".red().bold(), text.red());
        }
        GateOutcome::Evaluated(SatisfactionResult::Unsatisfied)
        | GateOutcome::NoExistingChecklist { .. } => {
            println!("{} {}", "✗".red().bold(), text.yellow());
        }
    }
}
