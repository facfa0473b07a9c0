//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Sift - Rank academic job candidates against role profiles")]
pub struct Cli {
    /// Increase log output (-v for info, -vv for debug); SIFT_LOG overrides
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Data directory override shared by commands that read candidates.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Data directory holding candidates/ and roles/ [default: from config]
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,
}

/// Output directory override shared by commands that read or write reports.
#[derive(Args, Debug, Clone, Default)]
pub struct OutArgs {
    /// Directory for report.json [default: from config]
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for `sift ingest`.
#[derive(Args, Debug, Clone)]
pub struct IngestCommand {
    #[command(flatten)]
    /// Data directory override.
    pub data: DataArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift match`.
#[derive(Args, Debug, Clone)]
pub struct MatchCommand {
    /// Role definition (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    pub role: PathBuf,

    #[command(flatten)]
    /// Data directory override.
    pub data: DataArgs,

    #[command(flatten)]
    /// Output directory override.
    pub out: OutArgs,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift report`.
#[derive(Args, Debug, Clone)]
pub struct ReportCommand {
    #[command(flatten)]
    /// Output directory override.
    pub out: OutArgs,

    /// Print the raw report JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift classify`.
#[derive(Args, Debug, Clone)]
pub struct ClassifyCommand {
    /// Role title to classify
    pub title: String,

    /// Directory to save the role JSON [default: roles directory from config]
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for `sift demo`.
#[derive(Args, Debug, Clone)]
pub struct DemoCommand {
    #[command(flatten)]
    /// Data directory override.
    pub data: DataArgs,

    #[command(flatten)]
    /// Output directory override.
    pub out: OutArgs,
}

/// Arguments for commands that only need a role file.
#[derive(Args, Debug, Clone)]
pub struct RoleCommand {
    /// Role definition (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    pub role: PathBuf,
}

/// Arguments for `sift evaluate`.
#[derive(Args, Debug, Clone)]
pub struct EvaluateCommand {
    /// Interview transcript (plain text)
    pub transcript: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.sift.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Ingest resumes and list the candidates found
    Ingest(IngestCommand),

    /// Rank candidates against a role and write report.json
    #[command(after_help = "\
Examples:
  sift match --role data/roles/cs.yaml             Rank data/candidates against a role
  sift match --role cs.yaml --data ./hiring        Use ./hiring/candidates
  sift match --role cs.yaml --out ./reports --json Print the full report as JSON")]
    Match(MatchCommand),

    /// Show the most recent report
    Report(ReportCommand),

    /// Build a role profile from a job title
    Classify(ClassifyCommand),

    /// Create sample data and run a screening
    Demo(DemoCommand),

    /// Generate interview questions for a role
    Interview(RoleCommand),

    /// Show the onboarding checklist for a role
    Onboard(RoleCommand),

    /// Score an interview transcript
    Evaluate(EvaluateCommand),

    /// Initialize sift configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Show status and validate configuration
    Status,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn match_requires_role() {
        assert!(Cli::try_parse_from(["sift", "match"]).is_err());
        let cli = Cli::try_parse_from(["sift", "match", "--role", "cs.yaml", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Match(cmd) = cli.command else {
            panic!("expected match command");
        };
        assert_eq!(cmd.role, PathBuf::from("cs.yaml"));
        assert!(cmd.data.data.is_none());
    }

    #[test]
    fn classify_takes_title() {
        let cli = Cli::try_parse_from([
            "sift",
            "classify",
            "Assistant Professor of Finance",
            "--out",
            "roles",
        ])
        .unwrap();
        let Commands::Classify(cmd) = cli.command else {
            panic!("expected classify command");
        };
        assert_eq!(cmd.title, "Assistant Professor of Finance");
        assert_eq!(cmd.out, Some(PathBuf::from("roles")));
    }
}
