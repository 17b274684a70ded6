//! Column projection.

use std::collections::BTreeSet;

use tracing::debug;

use sweep_model::Table;

use crate::error::CleanError;

/// Keep exactly the columns named in `keep_columns`, in the table's original
/// column order.
///
/// Names not present in the table are ignored. An empty `keep_columns`
/// yields a zero-width table that still reports the original row count.
pub fn project_columns(table: &Table, keep_columns: &BTreeSet<String>) -> Result<Table, CleanError> {
    let names: Vec<String> = table
        .column_names()
        .into_iter()
        .filter(|name| keep_columns.contains(name))
        .collect();
    if names.is_empty() {
        debug!(rows = table.height(), "projected to zero columns");
        return Ok(Table::empty_with_height(table.height()));
    }
    let data = table.data().select(names.iter().map(String::as_str))?;
    Ok(Table::new(data)?)
}
