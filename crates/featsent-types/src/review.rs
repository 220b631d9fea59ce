use serde::{Deserialize, Serialize};

/// Reviews loaded from a CSV file.
///
/// Only the header row is interpreted. Every other column is carried through
/// untouched so analyzers can read whatever metadata they need. Rows may be
/// shorter than the header; missing cells read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReviewTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterate over one column's cells, or `None` if the column does not exist.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).map(String::as_str).unwrap_or("")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ReviewTable {
        ReviewTable::new(
            vec!["id".to_string(), "cleaned_content".to_string()],
            vec![
                vec!["1".to_string(), "great price".to_string()],
                vec!["2".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_lookup() {
        let table = table();
        assert_eq!(table.column_index("cleaned_content"), Some(1));
        assert!(table.has_column("id"));
        assert!(!table.has_column("rating"));
    }

    #[test]
    fn test_column_pads_short_rows() {
        let table = table();
        let values: Vec<&str> = table.column("cleaned_content").unwrap().collect();
        assert_eq!(values, vec!["great price", ""]);
    }

    #[test]
    fn test_missing_column_is_none() {
        assert!(table().column("rating").is_none());
    }
}
