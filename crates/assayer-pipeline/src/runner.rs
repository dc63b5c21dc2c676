//! The sequential pipeline runner

use crate::source::FileSource;
use assayer_curator::Curator;
use assayer_domain::traits::LlmProvider;
use assayer_domain::CuratedDocument;
use std::io::Write;
use thiserror::Error;
use tracing::{info, warn};

/// Why a file produced no curated document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// The file could not be read or parsed
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// The document contained no detectable tables; informational, not an
    /// error
    #[error("no tables found")]
    NoTables,

    /// The LLM call failed or its response did not match the schema
    #[error("curation failed: {0}")]
    Curation(String),
}

impl FailureReason {
    /// True for the skip-with-notice case rather than a real failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, FailureReason::NoTables)
    }
}

/// A file that yielded no curated document, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Display name of the file
    pub filename: String,
    /// Why it was skipped
    pub reason: FailureReason,
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutcome {
    /// Successfully curated documents, in input order
    pub documents: Vec<CuratedDocument>,
    /// Files that yielded nothing, with reasons, in input order
    pub failures: Vec<FileFailure>,
}

impl PipelineOutcome {
    /// True when no file yielded data.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Progress notifications emitted while a batch runs.
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// Processing of one file began
    Started {
        /// Zero-based position in the batch
        index: usize,
        /// Batch size
        total: usize,
        /// Display name of the file
        filename: &'a str,
    },
    /// A file was curated successfully
    Curated {
        /// Display name of the file
        filename: &'a str,
        /// Number of chemical entries curated from it
        chemicals: usize,
    },
    /// A file yielded nothing
    Failed {
        /// Display name of the file
        filename: &'a str,
        /// Why (includes the informational no-tables case)
        reason: &'a FailureReason,
    },
}

/// Runs the extract → curate loop over a list of file sources.
///
/// Strictly sequential: one file at a time, in input order, no shared state
/// across files.
pub struct PipelineRunner<L>
where
    L: LlmProvider,
{
    curator: Curator<L>,
}

impl<L> PipelineRunner<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a runner around a configured curator.
    pub fn new(curator: Curator<L>) -> Self {
        Self { curator }
    }

    /// Process every source and collect documents plus per-file failures.
    pub async fn run(&self, sources: &[FileSource]) -> PipelineOutcome {
        self.run_with_progress(sources, |_| {}).await
    }

    /// Like [`run`](Self::run), with a callback for per-file progress.
    pub async fn run_with_progress(
        &self,
        sources: &[FileSource],
        mut on_event: impl FnMut(ProgressEvent<'_>),
    ) -> PipelineOutcome {
        let mut outcome = PipelineOutcome::default();

        for (index, source) in sources.iter().enumerate() {
            let filename = source.name();
            on_event(ProgressEvent::Started {
                index,
                total: sources.len(),
                filename: &filename,
            });

            match self.process_source(source, &filename).await {
                Ok(document) => {
                    info!(
                        "Curated '{}' ({} chemical entries)",
                        filename,
                        document.chemicals.len()
                    );
                    on_event(ProgressEvent::Curated {
                        filename: &filename,
                        chemicals: document.chemicals.len(),
                    });
                    outcome.documents.push(document);
                }
                Err(reason) => {
                    if reason.is_informational() {
                        info!("Skipping '{}': {}", filename, reason);
                    } else {
                        warn!("Failed to process '{}': {}", filename, reason);
                    }
                    on_event(ProgressEvent::Failed {
                        filename: &filename,
                        reason: &reason,
                    });
                    outcome.failures.push(FileFailure {
                        filename: filename.clone(),
                        reason,
                    });
                }
            }
        }

        outcome
    }

    /// Extract and curate one source.
    async fn process_source(
        &self,
        source: &FileSource,
        filename: &str,
    ) -> Result<CuratedDocument, FailureReason> {
        let tables = match source {
            FileSource::Path(path) => assayer_extractor::extract(path)
                .map_err(|e| FailureReason::Extraction(e.to_string()))?,
            FileSource::Bytes { data, .. } => {
                // Spill to a temp file so extraction sees a real path with
                // the right extension. The handle's drop removes the file on
                // every exit path, error returns included.
                let suffix = source
                    .extension()
                    .map(|e| format!(".{}", e))
                    .unwrap_or_default();
                let mut temp = tempfile::Builder::new()
                    .prefix("assayer-")
                    .suffix(&suffix)
                    .tempfile()
                    .map_err(|e| FailureReason::Extraction(e.to_string()))?;
                temp.write_all(data)
                    .map_err(|e| FailureReason::Extraction(e.to_string()))?;

                assayer_extractor::extract(temp.path())
                    .map_err(|e| FailureReason::Extraction(e.to_string()))?
            }
        };

        if tables.is_empty() {
            return Err(FailureReason::NoTables);
        }

        self.curator
            .curate(&tables, filename)
            .await
            .map_err(|e| FailureReason::Curation(e.to_string()))
    }
}
