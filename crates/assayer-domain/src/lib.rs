//! Assayer Domain Layer
//!
//! Core data model for the report-analysis pipeline. This crate defines the
//! value types that flow between the pipeline stages and the trait interface
//! for the LLM boundary. Infrastructure implementations live in other crates.
//!
//! ## Key Concepts
//!
//! - **RawTable**: an extracted, unstructured grid of text cells before any
//!   semantic interpretation
//! - **ChemicalRecord**: one chemical/material entry with its numeric
//!   properties, produced only by curation
//! - **CuratedDocument**: the per-file curation result (filename, chemical
//!   entries, trend summary); immutable once produced
//!
//! ## Architecture
//!
//! Data flows strictly one way:
//!
//! ```text
//! file bytes → Vec<RawTable> → CuratedDocument → aggregated report
//! ```
//!
//! No stage reads back from a later one. The only external dependency here is
//! serde: the JSON representation of [`CuratedDocument`] is a contract with
//! the curation layer and must round-trip losslessly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use document::{ChemicalRecord, CuratedDocument};
pub use table::RawTable;
