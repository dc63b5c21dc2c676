//! Batch analysis over a directory of report documents.

use crate::cli::AnalyzeArgs;
use crate::commands::build_runner;
use crate::config::{require_api_key, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use assayer_pipeline::{scan_input_dir, FileSource, ProgressEvent};
use std::fs;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    // Fatal before any file is touched.
    let api_key = require_api_key()?;

    if !args.input.is_dir() {
        return Err(CliError::MissingInputDir(args.input.display().to_string()));
    }

    println!(
        "Scanning '{}' for technical reports...",
        args.input.display()
    );
    let files = scan_input_dir(&args.input)?;
    if files.is_empty() {
        println!(
            "{}",
            formatter.warning("No PDF or DOCX files found in the input directory.")
        );
        return Ok(());
    }

    let runner = build_runner(config, api_key);
    let sources: Vec<FileSource> = files.into_iter().map(FileSource::from_path).collect();

    let outcome = runner
        .run_with_progress(&sources, |event| match event {
            ProgressEvent::Started { filename, .. } => {
                println!("Processing: {}", filename);
            }
            ProgressEvent::Curated {
                filename,
                chemicals,
            } => {
                println!(
                    "  {}",
                    formatter.success(&format!(
                        "Analyzed {} ({} chemical entries)",
                        filename, chemicals
                    ))
                );
            }
            ProgressEvent::Failed { filename, reason } => {
                if reason.is_informational() {
                    println!(
                        "  {}",
                        formatter.info(&format!("Skipped {}: {}", filename, reason))
                    );
                } else {
                    println!(
                        "  {}",
                        formatter.warning(&format!("Failed {}: {}", filename, reason))
                    );
                }
            }
        })
        .await;

    if outcome.is_empty() {
        println!("No data extracted from any files.");
        return Ok(());
    }

    println!("\nPerforming trend analysis...");
    let report = assayer_analyzer::analyze(&outcome.documents);

    println!();
    println!("{}", report);

    fs::create_dir_all(&args.output)?;
    let output_file = args.output.join("analysis_report.txt");
    fs::write(&output_file, &report)?;
    println!(
        "{}",
        formatter.success(&format!("Report saved to {}", output_file.display()))
    );

    Ok(())
}
