//! The in-memory table the cleaning and conversion pipeline operates on.

use polars::frame::DataFrame;
use polars::prelude::{AnyValue, Column, DataType};
use thiserror::Error;

use crate::value::{any_to_f64, any_to_string};

/// A table could not be constructed from the given frame.
#[derive(Debug, Error)]
#[error("invalid table: {0}")]
pub struct TableError(#[from] polars::error::PolarsError);

/// Declared kind of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 64-bit floating point values.
    Numeric,
    /// UTF-8 text values.
    Text,
}

/// Name and kind of one column, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

/// An ordered sequence of named columns plus rows, with explicit missing
/// cells.
///
/// Internally a Polars `DataFrame` normalized so that every column is either
/// `Float64` (kind `Numeric`) or `String` (kind `Text`); `null` is the
/// missing cell. Tables are values: operations return new tables, and a
/// table never outlives the pipeline invocation that created it.
#[derive(Debug, Clone)]
pub struct Table {
    data: DataFrame,
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

impl Table {
    /// Build a table from a decoded frame, normalizing column dtypes.
    ///
    /// Numeric columns are cast to `Float64`, everything else to `String`.
    /// A zero-width frame is passed through so its row count survives.
    pub fn new(data: DataFrame) -> Result<Self, TableError> {
        if data.width() == 0 {
            return Ok(Self { data });
        }
        let mut columns: Vec<Column> = Vec::with_capacity(data.width());
        for column in data.get_columns() {
            let dtype = column.dtype();
            let normalized = if matches!(dtype, DataType::Float64 | DataType::String) {
                column.clone()
            } else if is_numeric_dtype(dtype) {
                column.cast(&DataType::Float64)?
            } else {
                column.cast(&DataType::String)?
            };
            columns.push(normalized);
        }
        Ok(Self {
            data: DataFrame::new(columns)?,
        })
    }

    /// A table with no columns but a known row count.
    ///
    /// Projection to an empty column set produces this; callers rendering it
    /// must handle the zero-width case explicitly.
    pub fn empty_with_height(height: usize) -> Self {
        Self {
            data: DataFrame::empty_with_height(height),
        }
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_data(self) -> DataFrame {
        self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn width(&self) -> usize {
        self.data.width()
    }

    /// Ordered column specs derived from the normalized dtypes.
    pub fn columns(&self) -> Vec<ColumnSpec> {
        self.data
            .get_columns()
            .iter()
            .map(|column| ColumnSpec {
                name: column.name().to_string(),
                kind: if column.dtype() == &DataType::Float64 {
                    ColumnKind::Numeric
                } else {
                    ColumnKind::Text
                },
            })
            .collect()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect()
    }

    /// First `limit` rows as a new table.
    pub fn head(&self, limit: usize) -> Self {
        Self {
            data: self.data.head(Some(limit)),
        }
    }

    /// Display string for one cell; missing cells and unknown columns render
    /// as the empty string.
    pub fn cell_text(&self, column_name: &str, row: usize) -> String {
        match self.data.column(column_name) {
            Ok(column) => any_to_string(column.get(row).unwrap_or(AnyValue::Null)),
            Err(_) => String::new(),
        }
    }

    /// Numeric value of one cell, `None` for missing cells, text cells, and
    /// unknown columns.
    pub fn cell_number(&self, column_name: &str, row: usize) -> Option<f64> {
        let column = self.data.column(column_name).ok()?;
        any_to_f64(column.get(row).unwrap_or(AnyValue::Null))
    }

    /// Value equality, treating two missing cells as equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.data.equals_missing(&other.data)
    }
}
