//! CLI command definitions and argument parsing.

use claimorder_domain::ClaimNumber;
use clap::{Parser, Subcommand};

/// ClaimOrder - Order dependent claims by the references applied to them.
#[derive(Debug, Parser)]
#[command(name = "claimorder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CLAIMORDER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Plain `Claim N: refs` lines (default)
    Plain,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter interactive REPL mode
    Repl,

    /// Order claims described in a JSON file
    Order(OrderArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the order command.
#[derive(Debug, Parser)]
pub struct OrderArgs {
    /// JSON file containing the claims to order
    #[arg(short, long)]
    pub file: Option<String>,

    /// Read the JSON claims from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for creating a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimArgs {
    /// Claim number
    pub number: ClaimNumber,

    /// Parent claim (`None` for an independent claim)
    pub parent: Option<ClaimNumber>,
}

/// Arguments for adding or deleting a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceArgs {
    /// Claim the edit starts from
    pub number: ClaimNumber,

    /// Reference text
    pub reference: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Plain => crate::config::OutputFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::try_parse_from(["claimorder"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_order_command() {
        let cli = Cli::try_parse_from([
            "claimorder",
            "order",
            "--file",
            "claims.json",
            "-f",
            "table",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Order(args)) => {
                assert_eq!(args.file.as_deref(), Some("claims.json"));
                assert!(!args.stdin);
            }
            _ => panic!("Expected Order command"),
        }
        assert!(matches!(cli.format, Some(CliFormat::Table)));
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::try_parse_from(["claimorder", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigArgs { action: ConfigAction::Init { force: true } }))
        ));
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Json.into();
        assert_eq!(format, OutputFormat::Json);
    }
}
