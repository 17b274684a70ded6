//! Terminal rendering of previews, charts, and batch summaries.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sweep_model::{Format, format_numeric};
use sweep_pipeline::{ChartInput, Preview};

use crate::types::BatchResult;

const CHART_WIDTH: f64 = 40.0;

pub fn print_preview(path: &Path, size_bytes: usize, preview: &Preview) {
    println!("File: {}", path.display());
    println!("Size: {:.2} KB", size_bytes as f64 / 1024.0);
    if preview.columns.is_empty() {
        println!("(no columns selected; {} rows)", preview.total_rows);
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(preview.columns.iter().map(|name| header_cell(name)));
    for row in &preview.rows {
        table.add_row(row.iter().map(Cell::new));
    }
    println!("{table}");
    println!("Showing {} of {} rows", preview.rows.len(), preview.total_rows);
}

pub fn print_chart(chart: &ChartInput) {
    for series in &chart.series {
        println!();
        println!("{}:", series.name);
        let max = series
            .values
            .iter()
            .flatten()
            .fold(0.0f64, |acc, value| acc.max(value.abs()));
        for (idx, value) in series.values.iter().enumerate() {
            match value {
                Some(value) => {
                    let len = if max > 0.0 {
                        ((value.abs() / max) * CHART_WIDTH).round() as usize
                    } else {
                        0
                    };
                    println!("{idx:>5} | {} {}", "█".repeat(len), format_numeric(*value));
                }
                None => println!("{idx:>5} | -"),
            }
        }
    }
}

pub fn print_formats() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Suffix"),
        header_cell("Content type"),
    ]);
    for format in Format::ALL {
        table.add_row(vec![
            Cell::new(format.to_string()),
            Cell::new(format.suffix()),
            Cell::new(format.content_type()),
        ]);
    }
    println!("{table}");
}

pub fn print_batch_summary(result: &BatchResult) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("File"),
        header_cell("Output"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Status"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for file in &result.files {
        let output = file
            .output
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(file.input.display()),
            Cell::new(output),
            Cell::new(file.rows),
            Cell::new(file.columns),
            status_cell(file.error.is_some(), file.written),
        ]);
    }
    println!("{table}");
    let failed: Vec<_> = result
        .files
        .iter()
        .filter_map(|file| file.error.as_ref().map(|error| (&file.input, error)))
        .collect();
    if !failed.is_empty() {
        eprintln!("Errors:");
        for (path, error) in failed {
            eprintln!("- {}: {error}", path.display());
        }
    }
}

fn status_cell(failed: bool, written: bool) -> Cell {
    if failed {
        Cell::new("error").fg(Color::Red).add_attribute(Attribute::Bold)
    } else if written {
        Cell::new("written").fg(Color::Green)
    } else {
        Cell::new("dry-run").fg(Color::DarkGrey)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
