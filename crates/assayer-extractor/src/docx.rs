//! DOCX table extraction
//!
//! Walks the document's table objects directly: every `<w:tbl>` becomes one
//! [`RawTable`], every row and cell read as plain text. Paragraph and run
//! structure inside a cell is flattened; multiple paragraphs in one cell are
//! joined with newlines.

use crate::error::ExtractorError;
use assayer_domain::RawTable;
use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extract every table in a DOCX file.
pub fn extract_tables(path: &Path) -> Result<Vec<RawTable>, ExtractorError> {
    let bytes = fs::read(path)?;
    tables_from_bytes(&bytes)
}

/// Extract tables from in-memory DOCX bytes.
pub(crate) fn tables_from_bytes(bytes: &[u8]) -> Result<Vec<RawTable>, ExtractorError> {
    let docx = read_docx(bytes).map_err(|e| ExtractorError::Docx(e.to_string()))?;

    let mut tables = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Table(table) = child {
            let rows = rows_from_table(table);
            if !rows.is_empty() {
                tables.push(RawTable::new(rows));
            }
        }
    }

    debug!("DOCX contains {} table(s)", tables.len());
    Ok(tables)
}

fn rows_from_table(table: &Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|row| {
            let TableChild::TableRow(row) = row;
            row.cells
                .iter()
                .map(|cell| {
                    let TableRowChild::TableCell(cell) = cell;
                    cell_text(&cell.children)
                })
                .collect()
        })
        .collect()
}

fn cell_text(contents: &[TableCellContent]) -> String {
    let mut paragraphs = Vec::new();
    for content in contents {
        if let TableCellContent::Paragraph(paragraph) = content {
            paragraphs.push(paragraph_text(paragraph));
        }
        // Nested tables inside cells are not flattened into the parent grid.
    }
    paragraphs.join("\n").trim().to_string()
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    text
}
