// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV, validates it for a chart kind, and prints the shaped result.

use anyhow::{Context, Result};
use chart_data::{read_csv_path, shape_chart_data, validate_chart_data, CellValue, ChartKind};

fn main() -> Result<()> {
    // Accept a CSV path and chart kind from the CLI, with sample defaults.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/sample.csv".to_string());
    let kind: ChartKind = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "bar".to_string())
        .parse()?;

    let chart =
        read_csv_path(&path).with_context(|| format!("failed to load CSV '{path}'"))?;
    println!(
        "Loaded {} columns x {} rows from {}",
        chart.columns.len(),
        chart.rows.len(),
        path
    );

    if let Err(err) = validate_chart_data(&chart, kind) {
        anyhow::bail!("invalid data for a {kind} chart at '{}': {err}", err.path());
    }
    println!("Data is valid for a {kind} chart");

    let shaped = shape_chart_data(&chart, kind);
    println!("X axis: {}", shaped.x_key);
    println!("Series: {}", shaped.value_keys.join(", "));
    for (i, point) in shaped.points.iter().enumerate() {
        let cells: Vec<String> = chart
            .columns
            .iter()
            .map(|c| match point.values.get(&c.name) {
                Some(CellValue::Num(n)) => n.to_string(),
                Some(CellValue::Str(s)) => s.clone(),
                None => String::new(),
            })
            .collect();
        println!("  row {}: {}", i + 1, cells.join(" | "));
    }

    Ok(())
}
