//! Command-line definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medicctl")]
#[command(about = "Medic - diagnose tool error output and suggest fixes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MEDIC_CONFIG or ~/.config/medic/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Diagnose one error message
    Analyze {
        /// Error text (omit to read stdin)
        message: Option<String>,

        /// Read the message from a file
        #[arg(long, conflicts_with = "message")]
        file: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Use the short fallback text
        #[arg(long)]
        minimal: bool,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Diagnose a JSON request document: {"message": "...", "context": {...}}
    Request {
        /// Request file, or - for stdin
        #[arg(default_value = "-")]
        path: PathBuf,
    },

    /// Quick diagnosis of dev-server terminal output (node, npm, ports)
    ///
    /// Unrecognized output gets the short fallback text unless the config
    /// sets `engine.fallback` or `engine.fallback_text`.
    Terminal {
        /// Terminal output (omit to read stdin)
        message: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Aggregate test outcomes (JSON array) into a fix plan
    Plan {
        /// Outcomes file, or - for stdin
        path: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the JSON run report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["medicctl", "analyze", "boom", "--json", "--minimal"]).unwrap();
        match cli.command {
            Commands::Analyze {
                message,
                json,
                minimal,
                ..
            } => {
                assert_eq!(message.as_deref(), Some("boom"));
                assert!(json);
                assert!(minimal);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_message_and_file_conflict() {
        assert!(Cli::try_parse_from(["medicctl", "analyze", "boom", "--file", "x.log"]).is_err());
    }
}
