//! Raw table module - the unit of extraction output

use std::fmt;

/// An extracted table: an ordered sequence of rows, each row an ordered
/// sequence of cell strings.
///
/// No typed schema is attached; extraction does not know what a column means.
/// By convention the first row is the header row, but nothing here enforces
/// that - curation decides what the cells mean.
///
/// # Examples
///
/// ```
/// use assayer_domain::RawTable;
///
/// let table = RawTable::new(vec![
///     vec!["Alkane".to_string(), "Boiling Point (C)".to_string()],
///     vec!["Methane".to_string(), "-161.5".to_string()],
/// ]);
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.header(), Some(&vec!["Alkane".to_string(), "Boiling Point (C)".to_string()]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from its rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The first row, conventionally the header.
    pub fn header(&self) -> Option<&Vec<String>> {
        self.rows.first()
    }

    /// The rows after the header.
    pub fn body(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// True when the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a plain-text grid, one row per line with cells
    /// joined by " | ". This is the serialization embedded in curation
    /// prompts; it is for machine consumption, not display.
    pub fn to_grid(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join(" | "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for RawTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_grid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alkane_table() -> RawTable {
        RawTable::new(vec![
            vec!["Alkane".to_string(), "Boiling Point (C)".to_string()],
            vec!["Methane".to_string(), "-161.5".to_string()],
            vec!["Ethane".to_string(), "-89".to_string()],
        ])
    }

    #[test]
    fn test_header_and_body() {
        let table = alkane_table();
        assert_eq!(table.header().unwrap()[0], "Alkane");
        assert_eq!(table.body().len(), 2);
        assert_eq!(table.body()[1][0], "Ethane");
    }

    #[test]
    fn test_counts() {
        let table = alkane_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.cell_count(), 6);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = RawTable::new(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.header(), None);
        assert_eq!(table.body().len(), 0);
        assert_eq!(table.to_grid(), "");
    }

    #[test]
    fn test_grid_rendering() {
        let table = alkane_table();
        let grid = table.to_grid();
        assert_eq!(
            grid,
            "Alkane | Boiling Point (C)\nMethane | -161.5\nEthane | -89"
        );
        assert_eq!(format!("{}", table), grid);
    }
}
