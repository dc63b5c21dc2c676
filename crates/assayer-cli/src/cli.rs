//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Assayer - extract and analyze chemical-property tables from technical
/// reports.
#[derive(Debug, Parser)]
#[command(name = "assayer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format for curated documents
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain-text tables (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (one line per document)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Batch-analyze a directory of report documents
    Analyze(AnalyzeArgs),

    /// Enter the interactive session
    Interactive,

    /// Run the built-in smoke test against a mocked model
    Verify,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Directory containing input PDF/DOCX files
    #[arg(long, default_value = "./data/input")]
    pub input: PathBuf,

    /// Directory to save the analysis report
    #[arg(long, default_value = "./data/output")]
    pub output: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["assayer", "analyze"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.input, PathBuf::from("./data/input"));
                assert_eq!(args.output, PathBuf::from("./data/output"));
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_custom_directories() {
        let cli = Cli::parse_from([
            "assayer",
            "analyze",
            "--input",
            "/tmp/reports",
            "--output",
            "/tmp/out",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.input, PathBuf::from("/tmp/reports"));
                assert_eq!(args.output, PathBuf::from("/tmp/out"));
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["assayer", "--format", "json", "verify"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Command::Verify));
    }

    #[test]
    fn test_interactive_command() {
        let cli = Cli::parse_from(["assayer", "interactive"]);
        assert!(matches!(cli.command, Command::Interactive));
    }
}
