//! Print the checklist that would be posted

use anyhow::{Context, Result};
use std::path::Path;

use crate::checklist::compose;
use crate::config::GateConfig;
use crate::resolve::resolve;

/// Execute the render command
pub fn execute(config: &GateConfig, description_file: Option<&Path>) -> Result<()> {
    let default_criteria = config.load_default_criteria().with_context(|| {
        format!(
            "Failed to load criteria from {}",
            config.criteria_path().display()
        )
    })?;

    let description = match description_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read description: {}", path.display()))?,
        None => String::new(),
    };

    let resolution = resolve(default_criteria, &description, config)?;
    print!("{}", compose(&config.header, &resolution.criteria));
    Ok(())
}
