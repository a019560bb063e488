use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Result, TableError};

/// A delimited table exactly as uploaded: header names plus untyped cells.
///
/// Rows may be shorter than the header; missing cells read as "". A row with
/// more cells than the header is a parse error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn read_path(path: &Path) -> Result<Self> {
        let reader = builder().from_path(path)?;
        Self::collect(reader)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Self::collect(builder().from_reader(rdr))
    }

    fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(TableError::RowTooLong {
                    line: record.position().map_or(0, |p| p.line()),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(to_cells(&record));
        }
        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Every cell of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.rows.len()).map(move |row| self.cell(row, col))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.has_headers(true).flexible(true).trim(Trim::None);
    b
}

fn to_cells(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_rows_read_as_blank() {
        let t = RawTable::from_reader("A,B,C\n1,2\n".as_bytes()).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.cell(0, 1), "2");
        assert_eq!(t.cell(0, 2), "");
        assert_eq!(t.cell(5, 0), "");
    }

    #[test]
    fn test_long_row_rejected() {
        let err = RawTable::from_reader("A,B\n1,2\n3,4,5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::RowTooLong { line: 3, expected: 2, found: 3 }));
        assert_eq!(err.to_string(), "Expected 2 fields in line 3, saw 3");
    }

    #[test]
    fn test_header_bom_and_padding_stripped() {
        let t = RawTable::from_reader("\u{feff}District , Province\nDadu,Sindh\n".as_bytes()).unwrap();
        assert_eq!(t.headers, vec!["District", "Province"]);
        assert_eq!(t.column_index("Province"), Some(1));
    }

    #[test]
    fn test_header_only_is_empty() {
        let t = RawTable::from_reader("District,Affected_Population\n".as_bytes()).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.headers.len(), 2);
    }

    #[test]
    fn test_cells_keep_whitespace() {
        let t = RawTable::from_reader("Severity_Level\n High\n".as_bytes()).unwrap();
        assert_eq!(t.column(0).collect::<Vec<_>>(), vec![" High"]);
    }
}
