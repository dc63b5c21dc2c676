//! Interactive session.
//!
//! The terminal counterpart of a drag-and-drop front end: queue report
//! files, run the shared pipeline over them with per-file progress, inspect
//! each document's curated JSON, and read the aggregated report.

use crate::commands::build_runner;
use crate::config::{require_api_key, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use assayer_domain::CuratedDocument;
use assayer_pipeline::{is_supported_document, FileSource, ProgressEvent};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive session.
pub async fn run_interactive(config: &Config, formatter: &Formatter) -> Result<()> {
    // Fatal at startup, before any file is queued.
    let api_key = require_api_key()?;

    println!(
        "{}",
        formatter.info("Assayer interactive session - type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = Config::dir()?.join("history");
    let _ = editor.load_history(&history_path);

    let runner = build_runner(config, api_key);
    let mut queued: Vec<PathBuf> = Vec::new();
    let mut documents: Vec<CuratedDocument> = Vec::new();

    loop {
        match editor.readline("assayer> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                let mut parts = line.split_whitespace();
                let command = parts.next().unwrap_or_default();
                let rest: Vec<&str> = parts.collect();

                match command {
                    "exit" | "quit" | "q" => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    "help" | "?" => print_help(formatter),
                    "add" => add_files(&rest, &mut queued, formatter),
                    "list" => list_files(&queued, formatter),
                    "clear" => {
                        queued.clear();
                        documents.clear();
                        println!("{}", formatter.info("Cleared queued files and results"));
                    }
                    "run" => {
                        documents = run_batch(&runner, &queued, formatter).await;
                    }
                    "show" => show_document(&rest, &documents, formatter),
                    other => {
                        eprintln!(
                            "{}",
                            formatter.error(&format!(
                                "Unknown command: {}. Type 'help' for available commands.",
                                other
                            ))
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    let _ = editor.save_history(&history_path);

    Ok(())
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Commands:"));
    println!("  add <path>...   Queue report files (.pdf / .docx)");
    println!("  list            Show queued files");
    println!("  clear           Drop queued files and previous results");
    println!("  run             Analyze the queued files and print the report");
    println!("  show <n>        Display curated document n from the last run");
    println!("  help            This help");
    println!("  exit            Leave the session");
}

fn add_files(args: &[&str], queued: &mut Vec<PathBuf>, formatter: &Formatter) {
    if args.is_empty() {
        eprintln!("{}", formatter.error("Usage: add <path>..."));
        return;
    }

    for arg in args {
        let path = PathBuf::from(arg);
        if !path.is_file() {
            eprintln!("{}", formatter.error(&format!("Not a file: {}", arg)));
        } else if !is_supported_document(&path) {
            eprintln!(
                "{}",
                formatter.error(&format!("Unsupported document type: {}", arg))
            );
        } else {
            queued.push(path);
        }
    }
    println!("{}", formatter.info(&format!("{} file(s) queued", queued.len())));
}

fn list_files(queued: &[PathBuf], formatter: &Formatter) {
    if queued.is_empty() {
        println!("{}", formatter.info("No files queued; use 'add <path>'"));
        return;
    }
    for (idx, path) in queued.iter().enumerate() {
        println!("  [{}] {}", idx + 1, path.display());
    }
}

async fn run_batch(
    runner: &assayer_pipeline::PipelineRunner<assayer_llm::GeminiProvider>,
    queued: &[PathBuf],
    formatter: &Formatter,
) -> Vec<CuratedDocument> {
    if queued.is_empty() {
        eprintln!("{}", formatter.error("Nothing queued; use 'add <path>' first"));
        return Vec::new();
    }

    let sources: Vec<FileSource> = queued.iter().cloned().map(FileSource::from_path).collect();

    let outcome = runner
        .run_with_progress(&sources, |event| match event {
            ProgressEvent::Started {
                index,
                total,
                filename,
            } => {
                println!("[{}/{}] Processing {}...", index + 1, total, filename);
            }
            ProgressEvent::Curated {
                filename,
                chemicals,
            } => {
                println!(
                    "  {}",
                    formatter.success(&format!("{}: {} chemical entries", filename, chemicals))
                );
            }
            ProgressEvent::Failed { filename, reason } => {
                if reason.is_informational() {
                    println!("  {}", formatter.info(&format!("{}: {}", filename, reason)));
                } else {
                    println!(
                        "  {}",
                        formatter.warning(&format!("{}: {}", filename, reason))
                    );
                }
            }
        })
        .await;

    println!("{}", formatter.info("Analysis complete"));

    if outcome.is_empty() {
        println!("{}", formatter.info("No data extracted from the queued files"));
        return Vec::new();
    }

    println!();
    println!("{}", assayer_analyzer::analyze(&outcome.documents));
    println!(
        "{}",
        formatter.info("Use 'show <n>' to inspect a curated document")
    );

    outcome.documents
}

fn show_document(args: &[&str], documents: &[CuratedDocument], formatter: &Formatter) {
    if documents.is_empty() {
        eprintln!("{}", formatter.error("No results yet; use 'run' first"));
        return;
    }

    let index = match args.first().map(|a| a.parse::<usize>()) {
        Some(Ok(n)) if n >= 1 && n <= documents.len() => n - 1,
        _ => {
            eprintln!(
                "{}",
                formatter.error(&format!("Usage: show <1..{}>", documents.len()))
            );
            return;
        }
    };

    match formatter.format_document(&documents[index]) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
}
