//! Curated document module - the unit of curation output

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One chemical or material entry with its numeric properties.
///
/// Produced only by the curation stage; the numeric values were normalized
/// from possibly unit-annotated source text by the language model, not by
/// deterministic code. Property names are free-form strings as chosen by the
/// model - two differently spelled names ("Boiling Point" vs "boiling_point")
/// are distinct properties, by design.
///
/// Properties are kept in a `BTreeMap` so serialization and report output are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalRecord {
    /// Chemical or material name as reported by the source document.
    pub name: String,

    /// Property name → numeric value.
    pub properties: BTreeMap<String, f64>,
}

impl ChemicalRecord {
    /// Create a record with no properties yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property insertion.
    pub fn with_property(mut self, property: impl Into<String>, value: f64) -> Self {
        self.properties.insert(property.into(), value);
        self
    }
}

/// The curation result for one source document.
///
/// Immutable once produced. Chemical names need not be unique within one
/// document - duplicate mentions across tables are preserved, not
/// deduplicated.
///
/// The JSON representation of this type is an external contract: serializing
/// and parsing back must yield a field-for-field identical value.
///
/// # Examples
///
/// ```
/// use assayer_domain::{ChemicalRecord, CuratedDocument};
///
/// let doc = CuratedDocument {
///     filename: "report.docx".to_string(),
///     chemicals: vec![ChemicalRecord::new("Methane").with_property("Boiling Point", -161.5)],
///     summary: "Boiling points rise with chain length.".to_string(),
/// };
///
/// let json = serde_json::to_string(&doc).unwrap();
/// let back: CuratedDocument = serde_json::from_str(&json).unwrap();
/// assert_eq!(doc, back);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedDocument {
    /// Source file name, byte-for-byte as supplied to curation.
    pub filename: String,

    /// Chemical entries in the order the model reported them.
    pub chemicals: Vec<ChemicalRecord>,

    /// Short natural-language summary of the document's notable trends.
    pub summary: String,
}

impl CuratedDocument {
    /// Total number of (chemical, property, value) observations in this
    /// document.
    pub fn observation_count(&self) -> usize {
        self.chemicals.iter().map(|c| c.properties.len()).sum()
    }
}
