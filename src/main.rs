use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dod_gate::commands::{check, evaluate, render};
use dod_gate::config::{
    ChecklistLocation, GateConfig, GitHubSettings, DEFAULT_API_URL, DEFAULT_DOD_YAML,
};
use dod_gate::{DEFAULT_HEADER, DEFAULT_INDENT_GLYPH};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dod")]
#[command(about = "Definition of Done checklist gate for pull requests", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a pull request, posting the checklist if it is missing
    Check {
        /// Pull request number (read from the event payload when omitted)
        #[arg(long = "pull-request-id")]
        pull_request_id: Option<u64>,

        /// Pipeline event payload
        #[arg(long, env = "GITHUB_EVENT_PATH")]
        event_path: Option<PathBuf>,

        #[command(flatten)]
        github: GitHubArgs,

        #[command(flatten)]
        gate: GateArgs,
    },

    /// Print the checklist that would be posted
    Render {
        /// Pull request description to read an override from
        #[arg(long)]
        description_file: Option<PathBuf>,

        #[command(flatten)]
        gate: GateArgs,
    },

    /// Evaluate a description stored in a local file
    Evaluate {
        /// Pull request description
        #[arg(long)]
        description_file: PathBuf,

        /// Separate file holding the checklist, as in comment mode
        #[arg(long)]
        checklist_file: Option<PathBuf>,

        /// Write a missing checklist back to disk
        #[arg(long)]
        write: bool,

        #[command(flatten)]
        gate: GateArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct GateArgs {
    /// Criteria file, relative to the repository root
    #[arg(long, env = "INPUT_DOD_YAML", default_value = DEFAULT_DOD_YAML)]
    dod_yaml: PathBuf,

    /// Repository root
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// Marker exempting a criterion from blocking when left unchecked
    #[arg(long, env = "INPUT_OPTIONAL_TAG")]
    optional_tag: Option<String>,

    /// Header line identifying the checklist
    #[arg(long, env = "INPUT_HEADER", default_value = DEFAULT_HEADER)]
    header: String,

    /// Glyph marking one nesting level in the criteria file
    #[arg(long, env = "INPUT_INDENT_GLYPH", default_value = DEFAULT_INDENT_GLYPH)]
    indent_glyph: String,

    /// Where the checklist lives (description, comment)
    #[arg(long, env = "INPUT_LOCATION", default_value = "description")]
    location: ChecklistLocation,
}

impl GateArgs {
    fn into_config(self) -> GateConfig {
        let defaults = GateConfig::default();
        GateConfig {
            header: non_empty(self.header).unwrap_or(defaults.header),
            optional_tag: self.optional_tag.and_then(non_empty),
            indent_glyph: self.indent_glyph,
            dod_yaml: if self.dod_yaml.as_os_str().is_empty() {
                defaults.dod_yaml
            } else {
                self.dod_yaml
            },
            repository_root: self.workspace,
            location: self.location,
        }
    }
}

#[derive(Args)]
struct GitHubArgs {
    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: String,

    /// Token used to update the pull request
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl GitHubArgs {
    fn into_settings(self) -> GitHubSettings {
        GitHubSettings {
            api_url: self.api_url,
            repository: self.repository,
            token: self.token.and_then(non_empty),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Check {
            pull_request_id,
            event_path,
            github,
            gate,
        } => {
            let passed = check::execute(
                &gate.into_config(),
                github.into_settings(),
                pull_request_id,
                event_path.as_deref(),
            )?;
            Ok(exit_code(passed))
        }
        Commands::Render {
            description_file,
            gate,
        } => {
            render::execute(&gate.into_config(), description_file.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Evaluate {
            description_file,
            checklist_file,
            write,
            gate,
        } => {
            let passed = evaluate::execute(
                &gate.into_config(),
                &description_file,
                checklist_file.as_deref(),
                write,
            )?;
            Ok(exit_code(passed))
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "dod", &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
