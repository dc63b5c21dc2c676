//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use assayer_domain::CuratedDocument;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format one curated document for display.
    pub fn format_document(&self, document: &CuratedDocument) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
            OutputFormat::Text => Ok(self.format_document_table(document)),
            OutputFormat::Quiet => Ok(format!(
                "{}: {} chemical entries",
                document.filename,
                document.chemicals.len()
            )),
        }
    }

    /// Format a document as a table of its observations.
    fn format_document_table(&self, document: &CuratedDocument) -> String {
        if document.chemicals.is_empty() {
            return format!("{}\nNo chemical entries.", document.filename);
        }

        let mut builder = Builder::default();
        builder.push_record(["Chemical", "Property", "Value"]);

        for chemical in &document.chemicals {
            for (property, value) in &chemical.properties {
                let value = value.to_string();
                builder.push_record([chemical.name.as_str(), property.as_str(), value.as_str()]);
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{}\nSummary: {}",
            document.filename, table, document.summary
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assayer_domain::ChemicalRecord;

    fn sample_document() -> CuratedDocument {
        CuratedDocument {
            filename: "alkanes.docx".to_string(),
            chemicals: vec![ChemicalRecord::new("Methane").with_property("Boiling Point", -161.5)],
            summary: "One alkane.".to_string(),
        }
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let rendered = formatter.format_document(&sample_document()).unwrap();

        let parsed: CuratedDocument = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, sample_document());
    }

    #[test]
    fn test_text_format_contains_cells_and_summary() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let rendered = formatter.format_document(&sample_document()).unwrap();

        assert!(rendered.contains("alkanes.docx"));
        assert!(rendered.contains("Methane"));
        assert!(rendered.contains("Boiling Point"));
        assert!(rendered.contains("-161.5"));
        assert!(rendered.contains("Summary: One alkane."));
    }

    #[test]
    fn test_quiet_format_is_one_line() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let rendered = formatter.format_document(&sample_document()).unwrap();

        assert_eq!(rendered, "alkanes.docx: 1 chemical entries");
    }

    #[test]
    fn test_messages_without_color() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.success("done"), "✓ done");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
