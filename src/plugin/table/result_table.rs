/// Uniform table built from heterogeneous identity records.
use crate::IdentityRecord;
use serde_json::Value;

/// Ordered rows over a dynamically discovered column schema.
///
/// The remote backend does not promise uniformly shaped records, so the
/// schema is discovered while rows are appended: a column is added the first
/// time its key appears, in encounter order, and every row carries a value
/// (possibly empty) for every declared column. Rows keep source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a record sequence into one table. An empty sequence yields
    /// a table with zero columns and zero rows, not an error.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = IdentityRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.push_record(&record);
        }
        table
    }

    /// Append one record, extending the schema with any key not yet seen.
    ///
    /// A newly discovered column is backfilled with the empty string on all
    /// earlier rows, and a key the record lacks contributes the empty string
    /// to the new row. Both keep the table rectangular.
    pub fn push_record(&mut self, record: &IdentityRecord) {
        for key in record.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.clone());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }

        let row = self
            .columns
            .iter()
            .map(|column| record.get(column).map(display_value).unwrap_or_default())
            .collect();
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }
}

/// Grid-facing string form of a JSON value. Strings pass through without
/// quotes, null becomes the empty string, everything else renders as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
