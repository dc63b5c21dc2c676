//! Flattening and descriptive statistics over curated documents

use assayer_domain::CuratedDocument;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// One flattened `(document, chemical, property, value)` tuple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Source document filename
    pub source: String,
    /// Chemical name as curated
    pub chemical: String,
    /// Property name as curated
    pub property: String,
    /// Numeric value
    pub value: f64,
}

/// Descriptive statistics for one property group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyStats {
    /// Property name (group key, byte equality)
    pub property: String,
    /// Number of observations in the group
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
    /// Sample standard deviation (n-1 denominator); `None` when the group
    /// has fewer than two observations
    pub std_dev: Option<f64>,
    /// Contributing chemical names, first-observation order, deduplicated
    /// for display
    pub chemicals: Vec<String>,
    /// Contributing source filenames, first-observation order, deduplicated
    pub sources: Vec<String>,
}

/// A chemical whose property was reported with differing values by
/// different documents. Informational, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyFinding {
    /// Chemical name
    pub chemical: String,
    /// Property name
    pub property: String,
    /// `(source filename, value)` pairs in observation order
    pub values: Vec<(String, f64)>,
}

/// A document's curated trend summary, carried into the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    /// Source document filename
    pub filename: String,
    /// The curated natural-language summary
    pub summary: String,
}

/// The structured aggregation result, rendered by
/// [`render_report`](crate::render_report).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedData {
    /// Number of curated documents in the batch
    pub document_count: usize,
    /// Total chemical entries across all documents (duplicates preserved)
    pub chemical_entry_count: usize,
    /// All flattened observations
    pub observations: Vec<Observation>,
    /// Per-property statistics, sorted by property name
    pub property_stats: Vec<PropertyStats>,
    /// Cross-document divergences, sorted by chemical then property
    pub consistency: Vec<ConsistencyFinding>,
    /// Per-document summaries in input order
    pub summaries: Vec<DocumentSummary>,
}

impl AggregatedData {
    /// True when the batch contained no documents at all.
    pub fn is_empty(&self) -> bool {
        self.document_count == 0
    }
}

/// Flatten and aggregate a batch of curated documents.
pub fn aggregate(documents: &[CuratedDocument]) -> AggregatedData {
    let observations = flatten(documents);
    let property_stats = compute_property_stats(&observations);
    let consistency = find_divergences(&observations);

    debug!(
        "Aggregated {} document(s): {} observation(s), {} property group(s), {} divergence(s)",
        documents.len(),
        observations.len(),
        property_stats.len(),
        consistency.len()
    );

    AggregatedData {
        document_count: documents.len(),
        chemical_entry_count: documents.iter().map(|d| d.chemicals.len()).sum(),
        observations,
        property_stats,
        consistency,
        summaries: documents
            .iter()
            .map(|d| DocumentSummary {
                filename: d.filename.clone(),
                summary: d.summary.clone(),
            })
            .collect(),
    }
}

/// Step 1: flatten every (document, chemical, property, value) tuple.
fn flatten(documents: &[CuratedDocument]) -> Vec<Observation> {
    let mut observations = Vec::new();
    for document in documents {
        for chemical in &document.chemicals {
            for (property, value) in &chemical.properties {
                observations.push(Observation {
                    source: document.filename.clone(),
                    chemical: chemical.name.clone(),
                    property: property.clone(),
                    value: *value,
                });
            }
        }
    }
    observations
}

/// Step 2: group by property name and compute descriptive statistics.
fn compute_property_stats(observations: &[Observation]) -> Vec<PropertyStats> {
    let mut groups: BTreeMap<&str, Vec<&Observation>> = BTreeMap::new();
    for observation in observations {
        groups
            .entry(observation.property.as_str())
            .or_default()
            .push(observation);
    }

    groups
        .into_iter()
        .map(|(property, group)| {
            let values: Vec<f64> = group.iter().map(|o| o.value).collect();
            let count = values.len();
            let mean = values.iter().sum::<f64>() / count as f64;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            PropertyStats {
                property: property.to_string(),
                count,
                mean,
                min,
                max,
                std_dev: sample_std_dev(&values, mean),
                chemicals: dedupe_in_order(group.iter().map(|o| o.chemical.as_str())),
                sources: dedupe_in_order(group.iter().map(|o| o.source.as_str())),
            }
        })
        .collect()
}

/// Sample standard deviation (n-1 denominator).
///
/// Returns `None` below two samples; a one-observation group has no spread
/// to report.
fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Step 3: find chemicals whose property values diverge across documents.
fn find_divergences(observations: &[Observation]) -> Vec<ConsistencyFinding> {
    let mut groups: BTreeMap<(&str, &str), Vec<&Observation>> = BTreeMap::new();
    for observation in observations {
        groups
            .entry((observation.chemical.as_str(), observation.property.as_str()))
            .or_default()
            .push(observation);
    }

    groups
        .into_iter()
        .filter_map(|((chemical, property), group)| {
            let distinct_sources = dedupe_in_order(group.iter().map(|o| o.source.as_str()));
            if distinct_sources.len() < 2 {
                return None;
            }
            let all_equal = group.windows(2).all(|w| w[0].value == w[1].value);
            if all_equal {
                return None;
            }
            Some(ConsistencyFinding {
                chemical: chemical.to_string(),
                property: property.to_string(),
                values: group
                    .iter()
                    .map(|o| (o.source.clone(), o.value))
                    .collect(),
            })
        })
        .collect()
}

fn dedupe_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.iter().any(|s| s == item) {
            seen.push(item.to_string());
        }
    }
    seen
}
