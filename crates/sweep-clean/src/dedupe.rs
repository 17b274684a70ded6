//! Stable first-occurrence duplicate removal.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, BooleanChunked, NewChunkedArray};
use tracing::debug;

use sweep_model::Table;

use crate::error::CleanError;

/// One cell under the total equality used for duplicate detection.
///
/// Two missing cells compare equal; numeric cells compare by the exact bit
/// pattern of their `f64` value.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum CellKey {
    Missing,
    Number(u64),
    Text(String),
}

fn cell_key(value: AnyValue<'_>) -> CellKey {
    match value {
        AnyValue::Null => CellKey::Missing,
        AnyValue::Float64(value) => CellKey::Number(value.to_bits()),
        AnyValue::String(value) => CellKey::Text(value.to_string()),
        AnyValue::StringOwned(value) => CellKey::Text(value.to_string()),
        other => CellKey::Text(other.to_string()),
    }
}

/// Remove every row that repeats an earlier row cell-for-cell.
///
/// The first occurrence of each distinct row is kept and the relative order
/// of kept rows is preserved.
pub fn remove_duplicates(table: &Table) -> Result<Table, CleanError> {
    let data = table.data();
    let row_count = data.height();
    if row_count == 0 || data.width() == 0 {
        return Ok(table.clone());
    }

    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(row_count);
    for idx in 0..row_count {
        let mut key = Vec::with_capacity(data.width());
        for column in data.get_columns() {
            key.push(cell_key(column.get(idx)?));
        }
        keep.push(seen.insert(key));
    }

    let kept = keep.iter().filter(|flag| **flag).count();
    if kept == row_count {
        return Ok(table.clone());
    }
    debug!(rows = row_count, kept, "removed duplicate rows");

    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok(Table::new(data.filter(&mask)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

    fn table(names: Vec<Option<&str>>, ages: Vec<Option<f64>>) -> Table {
        Table::new(
            DataFrame::new(vec![
                Series::new("name".into(), names).into_column(),
                Series::new("age".into(), ages).into_column(),
            ])
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_keeps_first_occurrence_in_order() {
        let input = table(
            vec![Some("a"), Some("b"), Some("a"), Some("c")],
            vec![Some(1.0), Some(2.0), Some(1.0), Some(3.0)],
        );
        let result = remove_duplicates(&input).unwrap();
        assert_eq!(result.height(), 3);
        assert_eq!(result.cell_text("name", 0), "a");
        assert_eq!(result.cell_text("name", 1), "b");
        assert_eq!(result.cell_text("name", 2), "c");
    }

    #[test]
    fn test_missing_cells_compare_equal() {
        let input = table(
            vec![Some("a"), Some("a"), Some("a")],
            vec![None, None, Some(1.0)],
        );
        let result = remove_duplicates(&input).unwrap();
        assert_eq!(result.height(), 2);
        assert_eq!(result.cell_number("age", 0), None);
        assert_eq!(result.cell_number("age", 1), Some(1.0));
    }

    #[test]
    fn test_numeric_equality_is_exact() {
        let input = table(
            vec![Some("a"), Some("a")],
            vec![Some(1.0), Some(1.0 + f64::EPSILON)],
        );
        let result = remove_duplicates(&input).unwrap();
        assert_eq!(result.height(), 2);
    }

    #[test]
    fn test_rows_differing_in_one_cell_are_kept() {
        let input = table(
            vec![Some("a"), Some("a")],
            vec![Some(1.0), Some(2.0)],
        );
        let result = remove_duplicates(&input).unwrap();
        assert_eq!(result.height(), 2);
    }

    #[test]
    fn test_empty_table_is_unchanged() {
        let input = table(vec![], vec![]);
        let result = remove_duplicates(&input).unwrap();
        assert_eq!(result.height(), 0);
        assert_eq!(result.width(), 2);
    }
}
