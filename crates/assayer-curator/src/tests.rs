//! End-to-end curator tests against the mock provider

use crate::{Curator, CuratorConfig, CuratorError};
use assayer_domain::RawTable;
use assayer_llm::MockProvider;

fn alkane_tables() -> Vec<RawTable> {
    vec![RawTable::new(vec![
        vec![
            "Alkane".to_string(),
            "Boiling Point (C)".to_string(),
            "Melting Point (C)".to_string(),
        ],
        vec!["Methane".to_string(), "-161.5".to_string(), "-182".to_string()],
        vec!["Ethane".to_string(), "-89".to_string(), "-183".to_string()],
        vec!["Propane".to_string(), "-42".to_string(), "-188".to_string()],
    ])]
}

const ALKANE_RESPONSE: &str = r#"{
    "chemicals": [
        {"name": "Methane", "properties": {"Boiling Point": -161.5, "Melting Point": -182}},
        {"name": "Ethane", "properties": {"Boiling Point": -89, "Melting Point": -183}},
        {"name": "Propane", "properties": {"Boiling Point": -42, "Melting Point": -188}}
    ],
    "summary": "Boiling and melting points rise with chain length."
}"#;

#[tokio::test]
async fn test_curate_returns_one_entry_per_chemical() {
    let curator = Curator::new(MockProvider::new(ALKANE_RESPONSE), CuratorConfig::default());

    let document = curator
        .curate(&alkane_tables(), "dummy_report.docx")
        .await
        .unwrap();

    assert_eq!(document.chemicals.len(), 3);
    assert_eq!(document.chemicals[0].name, "Methane");
    assert_eq!(document.chemicals[2].properties["Melting Point"], -188.0);
    assert_eq!(
        document.summary,
        "Boiling and melting points rise with chain length."
    );
}

#[tokio::test]
async fn test_curate_keeps_filename_byte_for_byte() {
    // The response echoes a different filename; the argument must win.
    let response = r#"{"filename": "wrong.pdf", "chemicals": [], "summary": "s"}"#;
    let curator = Curator::new(MockProvider::new(response), CuratorConfig::default());

    let filename = "Ünïcode répôrt (final) .DOCX";
    let document = curator.curate(&alkane_tables(), filename).await.unwrap();
    assert_eq!(document.filename, filename);
}

#[tokio::test]
async fn test_llm_failure_is_a_service_error() {
    let curator = Curator::new(MockProvider::failing(), CuratorConfig::default());

    let result = curator.curate(&alkane_tables(), "r.docx").await;
    assert!(matches!(result, Err(CuratorError::Service(_))));
}

#[tokio::test]
async fn test_malformed_response_is_a_schema_error() {
    let curator = Curator::new(
        MockProvider::new("Sorry, I cannot parse these tables."),
        CuratorConfig::default(),
    );

    let result = curator.curate(&alkane_tables(), "r.docx").await;
    assert!(matches!(result, Err(CuratorError::Schema(_))));
}

#[tokio::test]
async fn test_oversized_input_is_rejected_before_the_llm_call() {
    let provider = MockProvider::new(ALKANE_RESPONSE);
    let probe = provider.clone();
    let curator = Curator::new(
        provider,
        CuratorConfig {
            max_prompt_chars: 64,
        },
    );

    let result = curator.curate(&alkane_tables(), "r.docx").await;
    assert!(matches!(result, Err(CuratorError::InputTooLarge(_, _))));
    // Rejected up front: the provider was never consulted.
    assert_eq!(probe.call_count(), 0);
}

#[tokio::test]
async fn test_fenced_response_is_accepted() {
    let response = format!("```json\n{}\n```", ALKANE_RESPONSE);
    let curator = Curator::new(MockProvider::new(response), CuratorConfig::default());

    let document = curator.curate(&alkane_tables(), "r.docx").await.unwrap();
    assert_eq!(document.chemicals.len(), 3);
}
