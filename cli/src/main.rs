//! CLI for the Issue Label Mapper.
//!
//! Previews a label mapping file offline: lists the labels a migration would
//! create and the labels it would attach to each issue of a Jira JSON export.

use clap::{Parser, Subcommand};
use issue_label_mapper::{load_mappings, ConfigError, JiraIssue, LabelMappings};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Label Mapper - Preview the labels a mapping file produces.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML mapping file.
    #[arg(long, env = "LABEL_MAPPINGS", default_value = "mappings.toml", global = true)]
    mappings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every distinct label as a JSON array.
    Labels,

    /// Print the labels derived for each issue of a JSON export.
    Derive {
        /// JSON file holding an array of Jira issues.
        #[arg(long)]
        issues: PathBuf,
    },
}

/// Errors that can occur while running the CLI.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Mapping file errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to read the issues file.
    #[error("Failed to read issues file '{path}': {source}")]
    ReadIssues {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the issues file.
    #[error("Failed to parse issues file '{path}': {source}")]
    ParseIssues {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize output.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Labels derived for one issue.
#[derive(Debug, Serialize)]
struct IssueLabels<'a> {
    key: &'a str,
    labels: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic, JSON goes to stdout
    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so that stdout only carries JSON output. The level is
/// taken from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        // Compact single-line output on stderr, without module target paths
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic. Returns the JSON document to print.
fn run(args: Args) -> Result<String, CliError> {
    let mappings = load_mappings(&args.mappings)?;

    match args.command {
        Command::Labels => Ok(serde_json::to_string_pretty(&mappings.all_labels())?),
        Command::Derive { issues } => {
            let issues = read_issues(&issues)?;
            let derived = derive_labels(&mappings, &issues);
            Ok(serde_json::to_string_pretty(&derived)?)
        }
    }
}

/// Reads a JSON array of Jira issues.
fn read_issues(path: &Path) -> Result<Vec<JiraIssue>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::ReadIssues {
        path: path.display().to_string(),
        source: e,
    })?;

    let issues: Vec<JiraIssue> =
        serde_json::from_str(&content).map_err(|e| CliError::ParseIssues {
            path: path.display().to_string(),
            source: e,
        })?;

    info!(count = issues.len(), "Loaded issues");
    Ok(issues)
}

fn derive_labels<'a>(mappings: &LabelMappings, issues: &'a [JiraIssue]) -> Vec<IssueLabels<'a>> {
    issues
        .iter()
        .map(|issue| IssueLabels {
            key: &issue.key,
            labels: mappings.labels_for(issue).into_iter().collect(),
        })
        .collect()
}
