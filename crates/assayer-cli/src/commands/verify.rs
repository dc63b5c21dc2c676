//! Built-in smoke test: generate a synthetic report, run the whole pipeline
//! against a mocked model, and check the aggregated report's markers.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use assayer_curator::{Curator, CuratorConfig};
use assayer_llm::MockProvider;
use assayer_pipeline::{FileSource, PipelineRunner};
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::fs;
use std::path::Path;

const MOCK_RESPONSE: &str = r#"{
    "chemicals": [
        {"name": "Methane", "properties": {"Boiling Point": -161.5, "Melting Point": -182}},
        {"name": "Ethane", "properties": {"Boiling Point": -89, "Melting Point": -183}},
        {"name": "Propane", "properties": {"Boiling Point": -42, "Melting Point": -188}},
        {"name": "Butane", "properties": {"Boiling Point": -0.5, "Melting Point": -138}},
        {"name": "Pentane", "properties": {"Boiling Point": 36.1, "Melting Point": -130}}
    ],
    "summary": "Mocked summary of alkanes."
}"#;

/// Execute the verify command.
///
/// Needs no API key: the model is mocked. Everything else - extraction,
/// curation plumbing, aggregation, report rendering - is the real thing.
pub async fn execute_verify(formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Running the built-in smoke test (mocked model, no API key needed)")
    );

    let dir = tempfile::tempdir()?;
    let report_path = dir.path().join("dummy_report.docx");
    write_dummy_report(&report_path)?;
    println!("Created synthetic report: {}", report_path.display());

    let provider = MockProvider::new(MOCK_RESPONSE);
    let probe = provider.clone();
    let curator = Curator::new(provider, CuratorConfig::default()).with_model_name("mock");
    let runner = PipelineRunner::new(curator);

    let outcome = runner.run(&[FileSource::from_path(&report_path)]).await;

    if outcome.documents.len() != 1 {
        return Err(CliError::VerifyFailed(format!(
            "expected 1 curated document, got {} ({} failure(s))",
            outcome.documents.len(),
            outcome.failures.len()
        )));
    }

    let document = &outcome.documents[0];
    if document.filename != "dummy_report.docx" {
        return Err(CliError::VerifyFailed(format!(
            "curated filename mismatch: {}",
            document.filename
        )));
    }
    if document.chemicals.len() != 5 {
        return Err(CliError::VerifyFailed(format!(
            "expected 5 chemical entries, got {}",
            document.chemicals.len()
        )));
    }
    if probe.call_count() != 1 {
        return Err(CliError::VerifyFailed(format!(
            "expected exactly one model call, got {}",
            probe.call_count()
        )));
    }

    let report = assayer_analyzer::analyze(&outcome.documents);
    for marker in [
        "AGGREGATED DATA SUMMARY",
        "Statistics for Boiling Point",
        "Statistics for Melting Point",
        "Methane",
    ] {
        if !report.contains(marker) {
            return Err(CliError::VerifyFailed(format!(
                "report is missing marker '{}'",
                marker
            )));
        }
    }

    println!();
    println!("{}", report);
    println!("{}", formatter.success("Smoke test passed"));

    Ok(())
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn write_dummy_report(path: &Path) -> Result<()> {
    let rows = [
        ("Alkane", "Boiling Point (C)", "Melting Point (C)"),
        ("Methane", "-161.5", "-182"),
        ("Ethane", "-89", "-183"),
        ("Propane", "-42", "-188"),
        ("Butane", "-0.5", "-138"),
        ("Pentane", "36.1", "-130"),
    ];
    let table = Table::new(
        rows.iter()
            .map(|(a, b, c)| TableRow::new(vec![cell(a), cell(b), cell(c)]))
            .collect(),
    );

    let file = fs::File::create(path)?;
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(
            Run::new().add_text("The following table lists the physical properties of alkanes."),
        ))
        .add_table(table)
        .build()
        .pack(file)
        .map_err(|e| CliError::VerifyFailed(format!("could not write fixture: {}", e)))?;

    Ok(())
}
