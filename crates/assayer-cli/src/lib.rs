//! Assayer CLI - entry points for the report-analysis pipeline.
//!
//! Three front ends over the same shared pipeline runner:
//!
//! - `analyze`: batch mode over an input directory, writing
//!   `analysis_report.txt`
//! - `interactive`: a terminal session for queueing files and inspecting
//!   curated results
//! - `verify`: a self-contained smoke test against a mocked model

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
