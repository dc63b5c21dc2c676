//! Text report rendering
//!
//! The report layout is deterministic and grep-friendly: downstream
//! consumers rely on the literal "AGGREGATED DATA SUMMARY" banner and the
//! "Statistics for <property>" section markers.

use crate::stats::AggregatedData;

const BANNER_RULE: &str = "========================================";

/// Render the aggregated data as a human-readable text report.
pub fn render_report(data: &AggregatedData) -> String {
    let mut report = String::new();

    report.push_str(BANNER_RULE);
    report.push('\n');
    report.push_str("AGGREGATED DATA SUMMARY\n");
    report.push_str(BANNER_RULE);
    report.push_str("\n\n");

    if data.is_empty() {
        report.push_str("No data available: no documents were curated.\n");
        return report;
    }

    report.push_str(&format!("Documents analyzed:  {}\n", data.document_count));
    report.push_str(&format!(
        "Chemical entries:    {}\n",
        data.chemical_entry_count
    ));
    report.push_str(&format!(
        "Observations:        {}\n",
        data.observations.len()
    ));
    report.push_str(&format!(
        "Distinct properties: {}\n\n",
        data.property_stats.len()
    ));

    for stats in &data.property_stats {
        report.push_str(&format!("Statistics for {}\n", stats.property));
        report.push_str(&format!("  Count:   {}\n", stats.count));
        report.push_str(&format!("  Mean:    {:.2}\n", stats.mean));
        report.push_str(&format!("  Min:     {:.2}\n", stats.min));
        report.push_str(&format!("  Max:     {:.2}\n", stats.max));
        match stats.std_dev {
            Some(std_dev) => report.push_str(&format!("  Std dev: {:.2}\n", std_dev)),
            None => report.push_str("  Std dev: n/a (single sample)\n"),
        }
        report.push_str(&format!("  Chemicals: {}\n", stats.chemicals.join(", ")));
        report.push_str(&format!("  Sources:   {}\n\n", stats.sources.join(", ")));
    }

    report.push_str("Cross-document consistency:\n");
    if data.consistency.is_empty() {
        report.push_str("  No discrepancies detected across documents.\n");
    } else {
        for finding in &data.consistency {
            let values = finding
                .values
                .iter()
                .map(|(source, value)| format!("{:.2} ({})", value, source))
                .collect::<Vec<_>>()
                .join(", ");
            report.push_str(&format!(
                "  {} / {}: {}\n",
                finding.chemical, finding.property, values
            ));
        }
    }
    report.push('\n');

    report.push_str("Document summaries:\n");
    for summary in &data.summaries {
        report.push_str(&format!("  {}: {}\n", summary.filename, summary.summary));
    }

    report
}

#[cfg(test)]
mod tests {
    use crate::{aggregate, analyze};
    use assayer_domain::{ChemicalRecord, CuratedDocument};

    fn alkane_document() -> CuratedDocument {
        CuratedDocument {
            filename: "dummy_report.docx".to_string(),
            chemicals: vec![
                ChemicalRecord::new("Methane")
                    .with_property("Boiling Point", -161.5)
                    .with_property("Melting Point", -182.0),
                ChemicalRecord::new("Ethane")
                    .with_property("Boiling Point", -89.0)
                    .with_property("Melting Point", -183.0),
                ChemicalRecord::new("Pentane")
                    .with_property("Boiling Point", 36.1)
                    .with_property("Melting Point", -130.0),
            ],
            summary: "Mocked summary of alkanes.".to_string(),
        }
    }

    #[test]
    fn test_report_contains_required_markers() {
        let report = analyze(&[alkane_document()]);

        assert!(report.contains("AGGREGATED DATA SUMMARY"));
        assert!(report.contains("Statistics for Boiling Point"));
        assert!(report.contains("Statistics for Melting Point"));
    }

    #[test]
    fn test_report_lists_chemicals_and_sources() {
        let report = analyze(&[alkane_document()]);

        assert!(report.contains("Methane"));
        assert!(report.contains("dummy_report.docx"));
        assert!(report.contains("Mocked summary of alkanes."));
    }

    #[test]
    fn test_empty_batch_reports_no_data_without_panicking() {
        let report = analyze(&[]);

        assert!(report.contains("AGGREGATED DATA SUMMARY"));
        assert!(report.contains("No data available"));
        assert!(!report.contains("Statistics for"));
    }

    #[test]
    fn test_single_sample_renders_std_dev_placeholder() {
        let doc = CuratedDocument {
            filename: "one.pdf".to_string(),
            chemicals: vec![ChemicalRecord::new("Methane").with_property("Density", 0.656)],
            summary: String::new(),
        };

        let report = analyze(&[doc]);
        assert!(report.contains("Std dev: n/a"));
    }

    #[test]
    fn test_divergence_is_rendered_as_informational_text() {
        let doc_a = CuratedDocument {
            filename: "a.docx".to_string(),
            chemicals: vec![ChemicalRecord::new("Methane").with_property("Boiling Point", -161.5)],
            summary: String::new(),
        };
        let doc_b = CuratedDocument {
            filename: "b.pdf".to_string(),
            chemicals: vec![ChemicalRecord::new("Methane").with_property("Boiling Point", -161.0)],
            summary: String::new(),
        };

        let report = analyze(&[doc_a, doc_b]);
        assert!(report.contains("Methane / Boiling Point:"));
        assert!(report.contains("-161.50 (a.docx)"));
        assert!(report.contains("-161.00 (b.pdf)"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let docs = [alkane_document()];
        assert_eq!(analyze(&docs), analyze(&docs));
    }

    #[test]
    fn test_mean_renders_exactly_for_the_alkane_fixture() {
        let doc = CuratedDocument {
            filename: "alkanes.docx".to_string(),
            chemicals: vec![
                ChemicalRecord::new("Methane").with_property("Boiling Point", -161.5),
                ChemicalRecord::new("Ethane").with_property("Boiling Point", -89.0),
                ChemicalRecord::new("Propane").with_property("Boiling Point", -42.0),
                ChemicalRecord::new("Butane").with_property("Boiling Point", -0.5),
                ChemicalRecord::new("Pentane").with_property("Boiling Point", 36.1),
            ],
            summary: String::new(),
        };

        let data = aggregate(&[doc]);
        let report = crate::render_report(&data);
        assert!(report.contains("Mean:    -51.38"));
        assert!(report.contains("Min:     -161.50"));
        assert!(report.contains("Max:     36.10"));
        assert!(report.contains("Count:   5"));
    }
}
