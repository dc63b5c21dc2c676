//! Error types for document extraction

use thiserror::Error;

/// Errors that can occur while extracting tables from a document.
///
/// Extraction failures are per-file: the caller logs them and moves on to the
/// next file. There is no retry and no partial recovery.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// File extension is not one of the supported document formats
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF backend failed to parse the file
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// DOCX backend failed to parse the file
    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}
