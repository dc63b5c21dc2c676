//! LLM prompt engineering for table curation

use assayer_domain::RawTable;

/// Builds the single curation prompt for one source document
pub struct PromptBuilder<'a> {
    filename: &'a str,
    tables: &'a [RawTable],
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder for a source document
    pub fn new(filename: &'a str) -> Self {
        Self {
            filename,
            tables: &[],
        }
    }

    /// Attach the extracted tables
    pub fn with_tables(mut self, tables: &'a [RawTable]) -> Self {
        self.tables = tables;
        self
    }

    /// Build the complete curation prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and schema specification
        prompt.push_str(CURATION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Source context
        prompt.push_str(&format!("Source document: {}\n\n", self.filename));

        // 3. The extracted tables
        prompt.push_str("Extracted tables:\n");
        for (idx, table) in self.tables.iter().enumerate() {
            prompt.push_str(&format!("--- Table {} ---\n", idx + 1));
            prompt.push_str(&table.to_grid());
            prompt.push('\n');
        }
        prompt.push('\n');

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const CURATION_INSTRUCTIONS: &str = r#"You are curating tabular data from a technical report.
Analyze the extracted tables below and produce a JSON object of this shape:

{
  "chemicals": [
    {
      "name": "chemical or material name",
      "properties": {"property name": numeric_value}
    }
  ],
  "summary": "short natural-language summary of notable trends"
}

Rules:
- Identify each distinct chemical or material entry in the tables
- Keep duplicate mentions as separate entries; do not merge or deduplicate
- Normalize every property value to a plain number: strip units and
  annotations ("-161.5 C" becomes -161.5), resolve signs and decimal marks
- Use the table's column header (without units) as the property name
- Skip cells that hold no numeric value at all
- The summary is one to three sentences about the document's notable trends"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format: a single JSON object with "chemicals" and "summary" keys.
Return ONLY valid JSON, no markdown code blocks, no explanations."#;
