//! Mean imputation for numeric columns.

use polars::prelude::{IntoColumn, NamedFrom, Series};
use tracing::debug;

use sweep_model::{ColumnKind, Table};

use crate::error::CleanError;

/// Replace missing cells in each numeric column with that column's mean.
///
/// A numeric column with no populated cells has an undefined mean and is
/// left untouched; text columns are never modified.
pub fn fill_missing_with_mean(table: &Table) -> Result<Table, CleanError> {
    let mut data = table.data().clone();
    for spec in table.columns() {
        if spec.kind != ColumnKind::Numeric {
            continue;
        }
        let values: Vec<Option<f64>> = (0..table.height())
            .map(|idx| table.cell_number(&spec.name, idx))
            .collect();
        let populated: Vec<f64> = values.iter().flatten().copied().collect();
        if populated.is_empty() || populated.len() == values.len() {
            continue;
        }
        let mean = populated.iter().sum::<f64>() / populated.len() as f64;
        debug!(
            column = %spec.name,
            filled = values.len() - populated.len(),
            mean,
            "imputed missing values"
        );
        let filled: Vec<f64> = values
            .into_iter()
            .map(|value| value.unwrap_or(mean))
            .collect();
        data.with_column(Series::new(spec.name.as_str().into(), filled).into_column())?;
    }
    Ok(Table::new(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataFrame;

    fn table(ages: Vec<Option<f64>>, notes: Vec<Option<&str>>) -> Table {
        Table::new(
            DataFrame::new(vec![
                Series::new("age".into(), ages).into_column(),
                Series::new("note".into(), notes).into_column(),
            ])
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_fills_missing_with_mean() {
        let input = table(
            vec![Some(10.0), None, Some(30.0)],
            vec![Some("x"), None, Some("y")],
        );
        let result = fill_missing_with_mean(&input).unwrap();
        assert_eq!(result.cell_number("age", 0), Some(10.0));
        assert_eq!(result.cell_number("age", 1), Some(20.0));
        assert_eq!(result.cell_number("age", 2), Some(30.0));
        // Text columns keep their missing cells.
        assert_eq!(result.cell_text("note", 1), "");
    }

    #[test]
    fn test_all_missing_column_is_unchanged() {
        let input = table(vec![None, None], vec![Some("x"), Some("y")]);
        let result = fill_missing_with_mean(&input).unwrap();
        assert_eq!(result.cell_number("age", 0), None);
        assert_eq!(result.cell_number("age", 1), None);
    }

    #[test]
    fn test_fully_populated_column_is_identical() {
        let input = table(vec![Some(1.0), Some(2.0)], vec![Some("x"), Some("y")]);
        let result = fill_missing_with_mean(&input).unwrap();
        assert!(result.equals(&input));
    }

    #[test]
    fn test_column_order_is_preserved() {
        let input = table(vec![Some(1.0), None], vec![Some("x"), Some("y")]);
        let result = fill_missing_with_mean(&input).unwrap();
        assert_eq!(result.column_names(), vec!["age", "note"]);
    }
}
