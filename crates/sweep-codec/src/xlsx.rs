//! XLSX decoding (calamine) and encoding (rust_xlsxwriter).
//!
//! Only the first worksheet is read; the header row supplies column names.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use polars::prelude::{AnyValue, DataFrame, IntoColumn, NamedFrom, Series};
use rust_xlsxwriter::Workbook;
use tracing::debug;

use sweep_model::{Format, Table, any_to_string, format_numeric};

use crate::error::CodecError;

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(value) => Some(*value),
        Data::Int(value) => Some(*value as f64),
        _ => None,
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => format_numeric(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => {
            if *value {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        Data::DateTime(value) => format_numeric(value.as_f64()),
        Data::DateTimeIso(value) => value.clone(),
        Data::DurationIso(value) => value.clone(),
        Data::Error(value) => value.to_string(),
    }
}

/// Decode the first worksheet of an XLSX workbook.
///
/// A column is Numeric when every non-empty cell holds a number; blank
/// header cells get positional fallback names.
pub fn decode(bytes: &[u8]) -> Result<Table, CodecError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|e| CodecError::decode(Format::Xlsx, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CodecError::decode(Format::Xlsx, "workbook has no worksheets"))?
        .map_err(|e| CodecError::decode(Format::Xlsx, e))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(CodecError::decode(Format::Xlsx, "worksheet is empty"));
    };
    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = cell_text(cell);
            if name.is_empty() {
                format!("column_{}", idx + 1)
            } else {
                name
            }
        })
        .collect();
    if names.is_empty() {
        return Err(CodecError::decode(Format::Xlsx, "header row has no columns"));
    }

    let data_rows: Vec<&[Data]> = rows.collect();
    let empty = Data::Empty;
    let mut columns = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let cells: Vec<&Data> = data_rows
            .iter()
            .map(|row| row.get(idx).unwrap_or(&empty))
            .collect();
        let has_number = cells.iter().any(|cell| cell_number(cell).is_some());
        let numeric = has_number
            && cells
                .iter()
                .all(|cell| matches!(cell, Data::Empty) || cell_number(cell).is_some());
        let column = if numeric {
            let values: Vec<Option<f64>> = cells.iter().map(|cell| cell_number(cell)).collect();
            Series::new(name.as_str().into(), values).into_column()
        } else {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|cell| {
                    if matches!(cell, Data::Empty) {
                        None
                    } else {
                        Some(cell_text(cell))
                    }
                })
                .collect();
            Series::new(name.as_str().into(), values).into_column()
        };
        columns.push(column);
    }

    let df = DataFrame::new(columns).map_err(|e| CodecError::decode(Format::Xlsx, e))?;
    let table = Table::new(df).map_err(|e| CodecError::decode(Format::Xlsx, e))?;
    debug!(rows = table.height(), columns = table.width(), "decoded xlsx");
    Ok(table)
}

/// Encode a table as a single-worksheet XLSX workbook; missing cells are
/// left blank.
pub fn encode(table: &Table) -> Result<Vec<u8>, CodecError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (idx, name) in table.column_names().iter().enumerate() {
        let col = u16::try_from(idx)
            .map_err(|_| CodecError::encode(Format::Xlsx, "too many columns for a worksheet"))?;
        worksheet
            .write_string(0, col, name.as_str())
            .map_err(|e| CodecError::encode(Format::Xlsx, e))?;
    }

    let data = table.data();
    for row_idx in 0..data.height() {
        let row = u32::try_from(row_idx + 1)
            .map_err(|_| CodecError::encode(Format::Xlsx, "too many rows for a worksheet"))?;
        for (col_idx, column) in data.get_columns().iter().enumerate() {
            let col = u16::try_from(col_idx)
                .map_err(|_| CodecError::encode(Format::Xlsx, "too many columns for a worksheet"))?;
            let value = column.get(row_idx).unwrap_or(AnyValue::Null);
            match value {
                AnyValue::Null => {}
                AnyValue::Float64(number) => {
                    worksheet
                        .write_number(row, col, number)
                        .map_err(|e| CodecError::encode(Format::Xlsx, e))?;
                }
                other => {
                    worksheet
                        .write_string(row, col, any_to_string(other))
                        .map_err(|e| CodecError::encode(Format::Xlsx, e))?;
                }
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| CodecError::encode(Format::Xlsx, e))
}
