//! CSV codec
//!
//! Reading accepts UTF-8 with or without a byte-order mark; the first line is
//! the header and empty fields become the missing-value marker. Writing always
//! emits a UTF-8 BOM (spreadsheet tools otherwise mis-detect the encoding), no
//! index column, and empty fields for missing cells.

use std::path::Path;

use crate::domain::{Cell, Table};
use crate::error::Result;
use crate::error::fs::{csv_parse_failed, read_failed, write_failed};

use super::fs::write_atomic;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a CSV byte stream. `origin` names the stream in error messages.
pub fn decode_table(bytes: &[u8], origin: &str) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_parse_failed(origin, e))?
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_parse_failed(origin, e))?;
        let cells: Vec<Cell> = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        records.push(cells);
    }

    Table::from_rows(headers, records)
}

/// Encode a table as CSV bytes with a leading BOM
pub fn encode_table(table: &Table) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut buffer);
        writer.write_record(table.column_names())?;
        for row in table.rows() {
            writer.write_record(row.into_iter().map(|cell| cell.unwrap_or("")))?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Read a CSV file into a table
pub fn read_table(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path).map_err(|e| read_failed(path, e))?;
    decode_table(&bytes, &path.display().to_string())
}

/// Write a table to `path` atomically
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let bytes = encode_table(table).map_err(|e| write_failed(path, e))?;
    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejoinError;
    use crate::test_fixtures::{column_values, table};
    use tempfile::TempDir;

    #[test]
    fn test_decode_strips_bom_from_first_header() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"id,name\n1,a\n");
        let t = decode_table(&bytes, "in.csv").unwrap();
        assert_eq!(t.column_names().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn test_decode_empty_field_is_missing() {
        let t = decode_table(b"a,b\n1,\n,2\n", "in.csv").unwrap();
        assert_eq!(t.column("b").unwrap().cells()[0], None);
        assert_eq!(t.column("a").unwrap().cells()[1], None);
    }

    #[test]
    fn test_decode_quoted_fields() {
        let t = decode_table(b"a,b\n\"x, y\",\"say \"\"hi\"\"\"\n", "in.csv").unwrap();
        assert_eq!(column_values(&t, "a"), vec!["x, y"]);
        assert_eq!(column_values(&t, "b"), vec!["say \"hi\""]);
    }

    #[test]
    fn test_decode_ragged_row_names_origin() {
        let err = decode_table(b"a,b\n1,2,3\n", "broken.csv").unwrap_err();
        assert!(matches!(err, RejoinError::CsvParseFailed { ref path, .. } if path == "broken.csv"));
    }

    #[test]
    fn test_decode_duplicate_header() {
        let err = decode_table(b"a,a\n1,2\n", "dup.csv").unwrap_err();
        assert!(matches!(err, RejoinError::DuplicateColumn { ref column } if column == "a"));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode_table(b"a\n\xff\xfe\n", "latin1.csv").unwrap_err();
        assert!(matches!(err, RejoinError::CsvParseFailed { .. }));
    }

    #[test]
    fn test_encode_writes_bom_and_no_index() {
        let t = table(&["a", "b"], &[&["1", ""], &["", "x"]]);
        let bytes = encode_table(&t).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "a,b\n1,\n,x\n");
    }

    #[test]
    fn test_encode_decode_preserves_missing_and_quoting() {
        let t = table(&["a", "b"], &[&["1,5", ""], &["", "line\nbreak"]]);
        let back = decode_table(&encode_table(&t).unwrap(), "mem").unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_write_and_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("out.csv");
        let t = table(&["a"], &[&["1"], &["2"]]);
        write_table(&path, &t).unwrap();
        assert_eq!(read_table(&path).unwrap(), t);
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_table(&temp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, RejoinError::FileReadFailed { .. }));
    }

    #[test]
    fn test_write_failure_names_target_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("taken");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("out.csv");
        let err = write_table(&path, &table(&["a"], &[&["1"]])).unwrap_err();
        assert!(
            matches!(err, RejoinError::FileWriteFailed { path: ref p, .. } if *p == path.display().to_string())
        );
    }
}
