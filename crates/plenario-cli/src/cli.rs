//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use plenario_network::PolicyKind;
use std::path::PathBuf;

/// Plenario - Build legislator alignment networks from enriched records.
#[derive(Debug, Parser)]
#[command(name = "plenario")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PLENARIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (id pairs and weights only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a network and list its edges ascending by weight
    Edges(EdgesArgs),

    /// Build a network and write it as node-link JSON
    Export(ExportArgs),

    /// Build a network and print build statistics
    Summary(InputArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Input file plus weighting policy, shared by every build command.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// JSON file containing an array of records
    pub input: PathBuf,

    /// Weighting policy
    #[arg(short, long, value_enum)]
    pub policy: PolicyArg,
}

/// Arguments for the edges command.
#[derive(Debug, Parser)]
pub struct EdgesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show only the N lowest-weight edges
    #[arg(long, conflicts_with = "highest")]
    pub lowest: Option<usize>,

    /// Show only the N highest-weight edges, strongest first
    #[arg(long)]
    pub highest: Option<usize>,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Print the default configuration file path instead
    #[arg(long)]
    pub path: bool,
}

/// Weighting policy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Shared front/committee memberships
    #[value(alias = "frentes")]
    Membership,
    /// Roll-call agreement
    #[value(alias = "votacoes")]
    Agreement,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PolicyArg> for PolicyKind {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Membership => PolicyKind::Membership,
            PolicyArg::Agreement => PolicyKind::Agreement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_command() {
        let cli = Cli::parse_from([
            "plenario",
            "edges",
            "frentes.json",
            "--policy",
            "membership",
            "--lowest",
            "5",
        ]);
        match cli.command {
            Command::Edges(args) => {
                assert_eq!(args.input.input, PathBuf::from("frentes.json"));
                assert_eq!(args.input.policy, PolicyArg::Membership);
                assert_eq!(args.lowest, Some(5));
                assert_eq!(args.highest, None);
            }
            _ => panic!("Expected Edges command"),
        }
    }

    #[test]
    fn test_policy_alias() {
        let cli = Cli::parse_from(["plenario", "summary", "votos.json", "-p", "votacoes"]);
        match cli.command {
            Command::Summary(args) => assert_eq!(args.policy, PolicyArg::Agreement),
            _ => panic!("Expected Summary command"),
        }
    }

    #[test]
    fn test_lowest_conflicts_with_highest() {
        let result = Cli::try_parse_from([
            "plenario",
            "edges",
            "votos.json",
            "--policy",
            "agreement",
            "--lowest",
            "1",
            "--highest",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_policy_is_required() {
        assert!(Cli::try_parse_from(["plenario", "export", "votos.json"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "plenario",
            "export",
            "votos.json",
            "--policy",
            "agreement",
            "--no-color",
            "-v",
            "--format",
            "json",
        ]);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_policy_conversion() {
        let kind: PolicyKind = PolicyArg::Agreement.into();
        assert_eq!(kind, PolicyKind::Agreement);
    }
}
