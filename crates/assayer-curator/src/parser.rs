//! Parse the LLM response into curated chemical records
//!
//! Parsing is strict on purpose: the response is untrusted external input,
//! and a response that does not match the expected shape fails the whole
//! call. The only leniency is stripping a markdown code fence, which models
//! emit even when told not to.

use crate::error::CuratorError;
use assayer_domain::ChemicalRecord;
use serde_json::Value;
use std::collections::BTreeMap;

/// The validated payload of a curation response.
#[derive(Debug, Clone)]
pub(crate) struct CurationPayload {
    pub chemicals: Vec<ChemicalRecord>,
    pub summary: String,
}

/// Parse an LLM response into a validated payload.
pub(crate) fn parse_curation_response(response: &str) -> Result<CurationPayload, CuratorError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| CuratorError::Schema(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| CuratorError::Schema("Expected a JSON object".to_string()))?;

    let chemicals_json = obj
        .get("chemicals")
        .and_then(|v| v.as_array())
        .ok_or_else(|| CuratorError::Schema("Missing or invalid 'chemicals' array".to_string()))?;

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .ok_or_else(|| CuratorError::Schema("Missing or invalid 'summary' string".to_string()))?
        .to_string();

    let mut chemicals = Vec::with_capacity(chemicals_json.len());
    for (idx, chemical_json) in chemicals_json.iter().enumerate() {
        let chemical = parse_chemical(chemical_json)
            .map_err(|e| CuratorError::Schema(format!("chemicals[{}]: {}", idx, e)))?;
        chemicals.push(chemical);
    }

    Ok(CurationPayload { chemicals, summary })
}

/// Extract JSON from a response, handling markdown code fences.
fn extract_json(response: &str) -> Result<String, CuratorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(CuratorError::Schema("Empty code block".to_string()));
        }

        // Skip the opening fence (``` or ```json) and the closing fence
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a single chemical entry.
fn parse_chemical(json: &Value) -> Result<ChemicalRecord, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "entry is not a JSON object".to_string())?;

    let name = obj
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing or invalid 'name'".to_string())?
        .to_string();

    if name.trim().is_empty() {
        return Err("'name' is empty".to_string());
    }

    let properties_json = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .ok_or_else(|| "missing or invalid 'properties' object".to_string())?;

    let mut properties = BTreeMap::new();
    for (property, value) in properties_json {
        if property.trim().is_empty() {
            return Err("property name is empty".to_string());
        }
        let number = value
            .as_f64()
            .ok_or_else(|| format!("property '{}' has a non-numeric value", property))?;
        properties.insert(property.clone(), number);
    }

    Ok(ChemicalRecord { name, properties })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_response() {
        let response = r#"{
            "chemicals": [
                {"name": "Methane", "properties": {"Boiling Point": -161.5, "Melting Point": -182}},
                {"name": "Ethane", "properties": {"Boiling Point": -89}}
            ],
            "summary": "Boiling points rise with chain length."
        }"#;

        let payload = parse_curation_response(response).unwrap();
        assert_eq!(payload.chemicals.len(), 2);
        assert_eq!(payload.chemicals[0].name, "Methane");
        assert_eq!(payload.chemicals[0].properties["Boiling Point"], -161.5);
        assert_eq!(payload.summary, "Boiling points rise with chain length.");
    }

    #[test]
    fn test_parse_response_with_markdown_fence() {
        let response = "```json\n{\"chemicals\": [], \"summary\": \"Nothing notable.\"}\n```";
        let payload = parse_curation_response(response).unwrap();
        assert!(payload.chemicals.is_empty());
        assert_eq!(payload.summary, "Nothing notable.");
    }

    #[test]
    fn test_parse_response_with_unlabeled_fence() {
        let response = "```\n{\"chemicals\": [], \"summary\": \"s\"}\n```";
        assert!(parse_curation_response(response).is_ok());
    }

    #[test]
    fn test_extra_top_level_fields_are_tolerated() {
        // Models often echo the filename back; it is ignored, not an error.
        let response = r#"{"filename": "r.pdf", "chemicals": [], "summary": "s"}"#;
        assert!(parse_curation_response(response).is_ok());
    }

    #[test]
    fn test_not_json_fails() {
        let result = parse_curation_response("I could not find any tables.");
        assert!(matches!(result, Err(CuratorError::Schema(_))));
    }

    #[test]
    fn test_array_instead_of_object_fails() {
        let result = parse_curation_response(r#"[{"name": "Methane"}]"#);
        assert!(matches!(result, Err(CuratorError::Schema(_))));
    }

    #[test]
    fn test_missing_summary_fails() {
        let result = parse_curation_response(r#"{"chemicals": []}"#);
        assert!(matches!(result, Err(CuratorError::Schema(_))));
    }

    #[test]
    fn test_missing_chemicals_fails() {
        let result = parse_curation_response(r#"{"summary": "s"}"#);
        assert!(matches!(result, Err(CuratorError::Schema(_))));
    }

    #[test]
    fn test_one_bad_entry_fails_the_whole_response() {
        // No partial parse: a single malformed entry rejects everything.
        let response = r#"{
            "chemicals": [
                {"name": "Methane", "properties": {"Boiling Point": -161.5}},
                {"name": "Ethane"}
            ],
            "summary": "s"
        }"#;
        let result = parse_curation_response(response);
        assert!(matches!(result, Err(CuratorError::Schema(_))));
    }

    #[test]
    fn test_non_numeric_property_fails() {
        let response = r#"{
            "chemicals": [{"name": "Methane", "properties": {"Boiling Point": "-161.5 C"}}],
            "summary": "s"
        }"#;
        let result = parse_curation_response(response);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("non-numeric"));
    }

    #[test]
    fn test_empty_name_fails() {
        let response = r#"{
            "chemicals": [{"name": "  ", "properties": {}}],
            "summary": "s"
        }"#;
        assert!(matches!(
            parse_curation_response(response),
            Err(CuratorError::Schema(_))
        ));
    }

    #[test]
    fn test_duplicate_names_are_preserved() {
        let response = r#"{
            "chemicals": [
                {"name": "Methane", "properties": {"Boiling Point": -161.5}},
                {"name": "Methane", "properties": {"Density": 0.656}}
            ],
            "summary": "s"
        }"#;
        let payload = parse_curation_response(response).unwrap();
        assert_eq!(payload.chemicals.len(), 2);
    }
}
