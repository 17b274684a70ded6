//! CSV decoding and encoding via the Polars CSV reader/writer.

use std::io::Cursor;

use polars::prelude::{CsvReadOptions, CsvWriter, SerReader, SerWriter};
use tracing::debug;

use sweep_model::{Format, Table};

use crate::error::CodecError;

/// Rows sampled when inferring the Numeric/Text split of each column.
const INFER_SCHEMA_ROWS: usize = 100;

/// Decode comma-delimited text with a header row of column names.
pub fn decode(bytes: &[u8]) -> Result<Table, CodecError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| CodecError::decode(Format::Csv, e))?;
    let table = Table::new(df).map_err(|e| CodecError::decode(Format::Csv, e))?;
    debug!(rows = table.height(), columns = table.width(), "decoded csv");
    Ok(table)
}

/// Encode a table as CSV; missing cells become empty fields.
pub fn encode(table: &Table) -> Result<Vec<u8>, CodecError> {
    let mut df = table.data().clone();
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| CodecError::encode(Format::Csv, e))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_model::ColumnKind;

    #[test]
    fn test_decode_with_header() {
        let table = decode(b"name,age\nAlice,30\nBob,25\n").unwrap();
        assert_eq!(table.height(), 2);
        let columns = table.columns();
        assert_eq!(columns[0].name, "name");
        assert_eq!(columns[0].kind, ColumnKind::Text);
        assert_eq!(columns[1].name, "age");
        assert_eq!(columns[1].kind, ColumnKind::Numeric);
        assert_eq!(table.cell_number("age", 1), Some(25.0));
    }

    #[test]
    fn test_decode_empty_field_is_missing() {
        let table = decode(b"name,age\nAlice,30\nBob,\n").unwrap();
        assert_eq!(table.cell_number("age", 0), Some(30.0));
        assert_eq!(table.cell_number("age", 1), None);
    }

    #[test]
    fn test_decode_empty_input_fails() {
        let err = decode(b"").unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
    }

    #[test]
    fn test_encode_missing_as_empty_field() {
        let table = decode(b"name,age\nAlice,30\nBob,\n").unwrap();
        let bytes = encode(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,age"));
        assert_eq!(lines.next(), Some("Alice,30.0"));
        assert_eq!(lines.next(), Some("Bob,"));
    }
}
