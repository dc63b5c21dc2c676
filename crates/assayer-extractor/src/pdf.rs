//! PDF table extraction
//!
//! PDF has no table markup, so detection is heuristic: extract the page text
//! with `pdf-extract`, split each line into cells on tabs or runs of two or
//! more spaces, and treat consecutive multi-cell lines as one table. A
//! candidate needs at least [`MIN_TABLE_ROWS`] rows to count - isolated
//! aligned lines are usually headers or figure captions, not data.

use crate::error::ExtractorError;
use assayer_domain::RawTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Minimum number of consecutive multi-cell lines that form a table.
pub(crate) const MIN_TABLE_ROWS: usize = 2;

/// Cell separator: a tab, or two or more whitespace characters.
static CELL_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t|\s{2,}").expect("cell separator pattern is valid"));

/// Extract every detectable table from a PDF file.
pub fn extract_tables(path: &Path) -> Result<Vec<RawTable>, ExtractorError> {
    let text =
        pdf_extract::extract_text(path).map_err(|e| ExtractorError::Pdf(e.to_string()))?;

    let tables = tables_from_text(&text);
    debug!("PDF text yielded {} table candidate(s)", tables.len());
    Ok(tables)
}

/// Group consecutive multi-cell lines of already-extracted text into tables.
pub(crate) fn tables_from_text(text: &str) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let cells = split_cells(line);
        if cells.len() >= 2 {
            current.push(cells);
        } else {
            flush_candidate(&mut current, &mut tables);
        }
    }
    flush_candidate(&mut current, &mut tables);

    tables
}

fn flush_candidate(current: &mut Vec<Vec<String>>, tables: &mut Vec<RawTable>) {
    if current.len() >= MIN_TABLE_ROWS {
        tables.push(RawTable::new(std::mem::take(current)));
    } else {
        current.clear();
    }
}

fn split_cells(line: &str) -> Vec<String> {
    CELL_SEPARATOR
        .split(line.trim())
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_columns_become_a_table() {
        let text = "Properties of Alkanes\n\n\
                    Alkane      Boiling Point (C)   Melting Point (C)\n\
                    Methane     -161.5              -182\n\
                    Ethane      -89                 -183\n\n\
                    Values taken at standard pressure.";

        let tables = tables_from_text(text);
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.header().unwrap()[0], "Alkane");
        assert_eq!(table.body()[0], vec!["Methane", "-161.5", "-182"]);
    }

    #[test]
    fn test_tab_separated_cells() {
        let text = "Name\tDensity\nPropane\t0.493\nButane\t0.573";
        let tables = tables_from_text(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].body()[1], vec!["Butane", "0.573"]);
    }

    #[test]
    fn test_prose_is_not_a_table() {
        let text = "This report discusses the physical properties of light alkanes\n\
                    and how they vary with chain length across the homologous series.";
        assert!(tables_from_text(text).is_empty());
    }

    #[test]
    fn test_single_aligned_line_is_discarded() {
        let text = "intro\nAlkane      Boiling Point\nmore prose follows here";
        assert!(tables_from_text(text).is_empty());
    }

    #[test]
    fn test_two_tables_separated_by_prose() {
        let text = "A  B\n1  2\n\nintervening paragraph\n\nC  D\n3  4";
        let tables = tables_from_text(text);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].header().unwrap(), &vec!["A", "B"]);
        assert_eq!(tables[1].header().unwrap(), &vec!["C", "D"]);
    }

    #[test]
    fn test_missing_file_is_a_pdf_error() {
        let result = extract_tables(Path::new("/nonexistent/report.pdf"));
        assert!(matches!(result, Err(ExtractorError::Pdf(_))));
    }
}
