//! Assayer Curator
//!
//! Turns raw extracted tables into normalized chemical-property records via
//! an external LLM.
//!
//! # Overview
//!
//! The curator is the second pipeline stage. For each source document it
//! builds exactly one prompt embedding the filename and every extracted
//! table, sends it to the configured LLM provider, and parses the response
//! into a [`CuratedDocument`]. The model is asked to identify distinct
//! chemical entries, normalize each named property to a plain number, and
//! write a short summary of the document's notable trends.
//!
//! # Architecture
//!
//! ```text
//! Vec<RawTable> → PromptBuilder → LLM → strict JSON parse → CuratedDocument
//! ```
//!
//! The model's output is untrusted external input. Parsing is strict: a
//! response that is not valid JSON of the expected shape fails the whole
//! call - there is no best-effort partial parse, no chunking, no retry.
//!
//! # Example
//!
//! ```
//! use assayer_curator::{Curator, CuratorConfig};
//! use assayer_domain::RawTable;
//! use assayer_llm::MockProvider;
//!
//! # async fn example() -> Result<(), assayer_curator::CuratorError> {
//! let response = r#"{"chemicals": [{"name": "Methane",
//!     "properties": {"Boiling Point": -161.5}}], "summary": "One alkane."}"#;
//! let curator = Curator::new(MockProvider::new(response), CuratorConfig::default());
//!
//! let tables = vec![RawTable::new(vec![
//!     vec!["Alkane".into(), "Boiling Point (C)".into()],
//!     vec!["Methane".into(), "-161.5".into()],
//! ])];
//!
//! let document = curator.curate(&tables, "report.docx").await?;
//! assert_eq!(document.filename, "report.docx");
//! assert_eq!(document.chemicals.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod curator;
mod error;
mod parser;
mod prompt;

#[cfg(test)]
mod tests;

pub use config::CuratorConfig;
pub use curator::Curator;
pub use error::CuratorError;
pub use prompt::PromptBuilder;
