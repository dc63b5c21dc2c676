//! Assayer Extractor
//!
//! Pulls raw tables out of technical report documents.
//!
//! # Overview
//!
//! The extractor is the first pipeline stage: given a file path it returns
//! the tables found in the document as [`RawTable`] grids of plain text
//! cells. No numeric or unit normalization happens here - interpretation of
//! the cells is curation's job.
//!
//! Dispatch is by file extension, case-insensitive:
//!
//! - `.docx` - walk the document's table objects directly via `docx-rs`,
//!   reading every row and cell as plain text
//! - `.pdf` - extract page text with `pdf-extract`, then detect runs of
//!   aligned-column lines and treat them as tables
//!
//! A document with zero detected tables yields an empty vector, not an
//! error: the caller skips such files with a notice.
//!
//! # Example
//!
//! ```no_run
//! # fn run() -> Result<(), assayer_extractor::ExtractorError> {
//! let tables = assayer_extractor::extract("reports/alkanes.docx")?;
//! for table in &tables {
//!     println!("{} rows", table.row_count());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod docx;
mod error;
mod pdf;

use assayer_domain::RawTable;
use std::path::Path;
use tracing::debug;

pub use error::ExtractorError;

/// Extract all tables from a document, dispatching on the file extension.
///
/// # Errors
///
/// - [`ExtractorError::UnsupportedFormat`] when the extension is neither
///   `.pdf` nor `.docx`
/// - [`ExtractorError::Io`] when the file cannot be read
/// - [`ExtractorError::Pdf`] / [`ExtractorError::Docx`] when the backend
///   cannot parse the file
pub fn extract(path: impl AsRef<Path>) -> Result<Vec<RawTable>, ExtractorError> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| ExtractorError::UnsupportedFormat(path.display().to_string()))?;

    let tables = match extension.as_str() {
        "pdf" => pdf::extract_tables(path)?,
        "docx" => docx::extract_tables(path)?,
        other => return Err(ExtractorError::UnsupportedFormat(other.to_string())),
    };

    debug!(
        "Extracted {} table(s) from {}",
        tables.len(),
        path.display()
    );

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let result = extract("report.txt");
        assert!(matches!(result, Err(ExtractorError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_extension() {
        let result = extract("report");
        assert!(matches!(result, Err(ExtractorError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        // Dispatch accepts the uppercase extension; the file does not exist,
        // so the error must come from I/O rather than format dispatch.
        let result = extract("/nonexistent/report.DOCX");
        assert!(matches!(result, Err(ExtractorError::Io(_))));
    }

    #[test]
    fn test_missing_pdf_is_not_a_format_error() {
        let result = extract("/nonexistent/report.pdf");
        assert!(!matches!(
            result,
            Err(ExtractorError::UnsupportedFormat(_)) | Ok(_)
        ));
    }
}
