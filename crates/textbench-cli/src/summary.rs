//! Rendering of benchmark reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::bench::BenchReport;

const BAR_WIDTH: usize = 79;

/// Plain report: one `elapsed time=... size n=...` line per trial between
/// two horizontal bars.
pub fn render_text(report: &BenchReport) -> String {
    let bar = "-".repeat(BAR_WIDTH);
    let mut out = String::new();
    out.push_str(&bar);
    out.push('\n');
    out.push_str(&format!("algo = {}\n", report.algorithm));
    for trial in &report.trials {
        out.push_str(&format!(
            "elapsed time={} seconds size n={}\n",
            trial.elapsed_secs, trial.size
        ));
    }
    out.push_str(&bar);
    out.push('\n');
    out
}

pub fn render_table(report: &BenchReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Trial"),
        header_cell("Size"),
        header_cell("Elapsed (s)"),
        header_cell("ns/byte"),
    ]);
    apply_table_style(&mut table);
    for index in 0..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (index, trial) in report.trials.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(trial.size),
            Cell::new(format!("{:.9}", trial.elapsed_secs)),
            Cell::new(format!("{:.3}", nanos_per_byte(trial.elapsed_secs, trial.size))),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.trials.len()).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.9}", report.total_secs())).add_attribute(Attribute::Bold),
        Cell::new("-").fg(Color::DarkGrey),
    ]);
    table
}

/// Pretty-printed JSON.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json(report: &BenchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn nanos_per_byte(elapsed_secs: f64, size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }
    elapsed_secs * 1e9 / size as f64
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
