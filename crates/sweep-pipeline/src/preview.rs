//! Preview and chart-input services for presentation shells.

use sweep_model::{ColumnKind, Table};

/// First rows of a table rendered to display strings.
#[derive(Debug, Clone)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Total row count of the underlying table, not just the previewed rows.
    pub total_rows: usize,
}

/// One numeric column as a row-indexed series.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Input for a bar chart: the first (up to) two numeric columns.
#[derive(Debug, Clone)]
pub struct ChartInput {
    pub series: Vec<ChartSeries>,
}

/// Render the first `limit` rows; missing cells display as empty strings.
///
/// A zero-width table produces a preview with no columns and no cells, which
/// callers must handle explicitly.
pub fn preview(table: &Table, limit: usize) -> Preview {
    let head = table.head(limit);
    let columns = head.column_names();
    let rows = (0..head.height())
        .map(|row| {
            columns
                .iter()
                .map(|name| head.cell_text(name, row))
                .collect()
        })
        .collect();
    Preview {
        columns,
        rows,
        total_rows: table.height(),
    }
}

/// Chart input from the first two numeric columns, or `None` when the table
/// has no numeric column.
pub fn chart_input(table: &Table) -> Option<ChartInput> {
    let series: Vec<ChartSeries> = table
        .columns()
        .into_iter()
        .filter(|spec| spec.kind == ColumnKind::Numeric)
        .take(2)
        .map(|spec| ChartSeries {
            values: (0..table.height())
                .map(|row| table.cell_number(&spec.name, row))
                .collect(),
            name: spec.name,
        })
        .collect();
    if series.is_empty() {
        None
    } else {
        Some(ChartInput { series })
    }
}
