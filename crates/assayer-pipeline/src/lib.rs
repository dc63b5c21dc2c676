//! Assayer Pipeline
//!
//! The shared pipeline runner used by every entry point.
//!
//! # Overview
//!
//! Both the batch CLI and the interactive session do the same thing: for
//! each input file, extract tables, curate them through the LLM, and collect
//! the curated documents; then aggregate once over the whole batch. This
//! crate owns that loop so the front ends only differ in how they gather
//! file sources and present results.
//!
//! Files are processed strictly in order, one at a time. A per-file failure
//! is recorded with its reason and processing continues with the remaining
//! files; only the caller decides how to present failures. A file with zero
//! detected tables is skipped before the curator is ever consulted.
//!
//! Byte sources (uploads) are spilled to a suffix-preserving temp file for
//! the duration of that one file's processing and removed on success and
//! failure alike.

#![warn(missing_docs)]

mod runner;
mod scan;
mod source;

pub use runner::{FailureReason, FileFailure, PipelineOutcome, PipelineRunner, ProgressEvent};
pub use scan::{is_supported_document, scan_input_dir};
pub use source::FileSource;
