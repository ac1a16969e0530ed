/// Delimited-text export of a result table.
use crate::plugin::table::ResultTable;
use std::io::{self, Write};

const DELIMITER: char = ',';

/// Write the table as comma-delimited text: a header row of column names,
/// then one line per data row.
pub fn write_delimited<W: Write>(table: &ResultTable, writer: &mut W) -> io::Result<()> {
    write_line(writer, table.columns().iter().map(String::as_str))?;
    for row in table.rows() {
        write_line(writer, row.iter().map(String::as_str))?;
    }
    Ok(())
}

/// In-memory form of `write_delimited`, convenient for clipboard export.
pub fn to_csv_string(table: &ResultTable) -> String {
    let mut out = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_delimited(table, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

fn write_line<'a, W, I>(writer: &mut W, values: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    let line = values.map(quote_value).collect::<Vec<_>>().join(",");
    writeln!(writer, "{line}")
}

/// A value containing the delimiter or a quote character is wrapped in
/// quotes with internal quotes doubled; anything else passes through.
fn quote_value(value: &str) -> String {
    if value.contains(DELIMITER) || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdentityRecord;
    use serde_json::json;

    fn sample_table() -> ResultTable {
        let mut record = IdentityRecord::new();
        record.insert("UserName".to_string(), json!("OBS0001POS"));
        record.insert("Location".to_string(), json!("Tulsa, OK"));
        record.insert("Note".to_string(), json!("said \"replace\""));
        ResultTable::from_records(vec![record])
    }

    #[test]
    fn plain_values_pass_through_unquoted() {
        assert_eq!(quote_value("OBS0001POS"), "OBS0001POS");
        assert_eq!(quote_value(""), "");
    }

    #[test]
    fn delimiter_and_quotes_force_quoting() {
        assert_eq!(quote_value("Tulsa, OK"), "\"Tulsa, OK\"");
        assert_eq!(quote_value("said \"replace\""), "\"said \"\"replace\"\"\"");
    }

    #[test]
    fn exported_text_has_header_then_rows() {
        let text = to_csv_string(&sample_table());
        assert_eq!(
            text,
            "UserName,Location,Note\nOBS0001POS,\"Tulsa, OK\",\"said \"\"replace\"\"\"\n"
        );
    }

    #[test]
    fn empty_table_exports_a_bare_header() {
        let text = to_csv_string(&ResultTable::new());
        assert_eq!(text, "\n");
    }

    #[test]
    fn export_writes_to_a_file() {
        let dir = tempfile::tempdir().ok();
        let Some(dir) = dir else {
            return;
        };
        let path = dir.path().join("export.csv");
        let mut file = std::fs::File::create(&path).ok();
        if let Some(file) = file.as_mut() {
            assert!(write_delimited(&sample_table(), file).is_ok());
        }
        let written = std::fs::read_to_string(&path).unwrap_or_default();
        assert!(written.starts_with("UserName,Location,Note\n"));
    }
}
