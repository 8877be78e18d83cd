// File: crates/chart-data/src/shape.rs
// Summary: Turn chart data into render-ready points, axis keys, and series config.

use std::collections::BTreeMap;

use crate::types::{CellValue, ChartData, ChartKind, Column, Row};

/// Legend/series styling for one column, keyed by column name in
/// [`ShapedChart::config`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    pub label: String,
    pub color: String,
}

/// One plotted point: coerced cell values keyed by column name, plus the
/// per-slice color for pie/donut charts.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedPoint {
    pub values: BTreeMap<String, CellValue>,
    pub color: Option<String>,
}

/// Render-ready view of a chart's data: empty rows dropped, numeric-looking
/// strings coerced to numbers, and axis keys derived from the column order.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedChart {
    pub points: Vec<ShapedPoint>,
    /// First column's name: the X axis (or the slice name for pie/donut).
    pub x_key: String,
    /// Remaining column names, in order. Pie/donut have exactly one.
    pub value_keys: Vec<String>,
    /// Per-column series config, in column order.
    pub config: Vec<(String, SeriesConfig)>,
}

/// Shape chart data for rendering. Pure and idempotent; shares the
/// value-column rule with the validators via [`ChartKind`].
pub fn shape_chart_data(chart: &ChartData, kind: ChartKind) -> ShapedChart {
    let columns = &chart.columns;

    let points = chart
        .rows
        .iter()
        .filter(|row| row.has_data(columns))
        .map(|row| shape_row(row, columns, kind))
        .collect();

    let x_key = columns.first().map(|c| c.name.clone()).unwrap_or_default();
    let value_keys = columns.iter().skip(1).map(|c| c.name.clone()).collect();
    let config = columns
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                SeriesConfig {
                    label: c.name.clone(),
                    color: c.color.clone(),
                },
            )
        })
        .collect();

    ShapedChart {
        points,
        x_key,
        value_keys,
        config,
    }
}

fn shape_row(row: &Row, columns: &[Column], kind: ChartKind) -> ShapedPoint {
    let mut values = BTreeMap::new();
    for column in columns {
        let cell = row
            .get(&column.name)
            .cloned()
            .unwrap_or_else(|| CellValue::Str(String::new()));
        values.insert(column.name.clone(), coerce(cell));
    }
    let color = if kind.uses_row_colors() {
        row.color.clone()
    } else {
        None
    };
    ShapedPoint { values, color }
}

/// Numeric-looking strings become numbers; everything else passes through.
fn coerce(value: CellValue) -> CellValue {
    match value.as_number() {
        Some(n) => CellValue::Num(n),
        None => value,
    }
}
