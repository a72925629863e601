//! In-memory source tables

use serde::{Deserialize, Serialize};

/// A header row plus data rows, as read from a spreadsheet.
///
/// Blank cells are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Builder for fixtures: string cells, empty strings become `None`
    pub fn with_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(
            cells
                .iter()
                .map(|c| (!c.is_empty()).then(|| c.to_string()))
                .collect(),
        );
        self
    }

    /// Index of the column with exactly this header
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `(row, column)`, `None` if blank or out of range
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup() {
        let table = SourceTable::new(vec!["Program".into(), "Country".into()])
            .with_row(&["Health", "Kenya"])
            .with_row(&["", "Peru"]);

        let country = table.column("Country").unwrap();
        assert_eq!(table.cell(0, country), Some("Kenya"));
        assert_eq!(table.cell(1, 0), None);
        assert_eq!(table.cell(5, 0), None);
        assert_eq!(table.column("Funder"), None);
        assert_eq!(table.len(), 2);
    }
}
