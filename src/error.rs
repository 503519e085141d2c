//! Error types for criteria loading and gate evaluation

use std::path::PathBuf;
use thiserror::Error;

/// A criteria definition that cannot be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read criteria file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in criteria definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("criteria definition is not a mapping")]
    NotAMapping,
    #[error("no `dod` section in criteria definition")]
    MissingDod,
    #[error("`dod` must be a sequence of strings")]
    DodNotSequence,
    #[error("`dod` entry #{index} is not a string")]
    NonStringEntry { index: usize },
    #[error("`dod` entry #{index} has no text besides indentation")]
    EmptyCriterion { index: usize },
    #[error("`dod` section contains no criteria")]
    Empty,
}

/// Failures of a full gate run, including the I/O around the core
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{context}: HTTP {status} - {reason}")]
    Http {
        context: String,
        status: u16,
        reason: String,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to read event payload {path}: {message}")]
    Event { path: PathBuf, message: String },
    #[error("no pull request number given and none found in the event payload")]
    MissingPullRequest,
}
