// File: crates/chart-data/src/palette.rs
// Summary: Default color palette and assignment helpers for columns and rows.

use crate::types::{ChartData, ChartKind, Column};

/// Default series colors, applied in order and cycled past the end.
pub const CHART_COLORS: [&str; 16] = [
    "#8884d8", // soft purple
    "#82ca9d", // mint green
    "#ffc658", // golden yellow
    "#ff7300", // bright orange
    "#00ff00", // lime green
    "#0088fe", // bright blue
    "#00c49f", // teal
    "#ffbb28", // warm yellow
    "#ff8042", // coral
    "#8dd1e1", // light cyan
    "#d81b60", // deep pink
    "#a1887f", // warm gray-brown
    "#4b5e40", // deep olive green
    "#b39ddb", // light lavender
    "#ff4081", // hot pink
    "#0288d1", // medium blue
];

/// Palette color for a 0-based column or row index.
pub fn color_for(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Fill in any blank column colors from the palette by index.
pub fn assign_column_colors(columns: &mut [Column]) {
    for (index, column) in columns.iter_mut().enumerate() {
        if column.color.trim().is_empty() {
            column.color = color_for(index).to_string();
        }
    }
}

/// For pie/donut charts, fill in missing per-row slice colors by row index.
/// Other kinds color by column, so this is a no-op for them.
pub fn assign_row_colors(chart: &mut ChartData, kind: ChartKind) {
    if !kind.uses_row_colors() {
        return;
    }
    for (index, row) in chart.rows.iter_mut().enumerate() {
        let missing = row.color.as_deref().map_or(true, |c| c.trim().is_empty());
        if missing {
            row.color = Some(color_for(index).to_string());
        }
    }
}
