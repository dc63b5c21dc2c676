//! Assayer Analyzer
//!
//! Aggregates curated documents into descriptive statistics and a
//! human-readable trend report.
//!
//! # Overview
//!
//! The analyzer is the last pipeline stage. It flattens every
//! `(document, chemical, property, value)` tuple across the batch into
//! long-form observations, groups them by property name for descriptive
//! statistics, checks chemicals reported by more than one document for
//! diverging values, and renders a deterministic text report.
//!
//! Property names group by byte equality: "Boiling Point" and
//! "boiling_point" are distinct groups. That fidelity limitation is
//! deliberate - the analyzer never second-guesses the curation output.
//!
//! The analyzer cannot fail: zero input documents produce a neutral
//! "no data" report.
//!
//! # Example
//!
//! ```
//! use assayer_analyzer::analyze;
//! use assayer_domain::{ChemicalRecord, CuratedDocument};
//!
//! let doc = CuratedDocument {
//!     filename: "alkanes.docx".to_string(),
//!     chemicals: vec![ChemicalRecord::new("Methane").with_property("Boiling Point", -161.5)],
//!     summary: "One alkane.".to_string(),
//! };
//!
//! let report = analyze(&[doc]);
//! assert!(report.contains("AGGREGATED DATA SUMMARY"));
//! assert!(report.contains("Statistics for Boiling Point"));
//! ```

#![warn(missing_docs)]

mod report;
mod stats;

pub use report::render_report;
pub use stats::{
    aggregate, AggregatedData, ConsistencyFinding, DocumentSummary, Observation, PropertyStats,
};

use assayer_domain::CuratedDocument;

/// Aggregate a batch of curated documents and render the text report.
pub fn analyze(documents: &[CuratedDocument]) -> String {
    render_report(&aggregate(documents))
}
