// File: crates/chart-data/tests/palette.rs
// Purpose: Palette cycling and default color assignment.

use chart_data::palette::{assign_column_colors, assign_row_colors, color_for, CHART_COLORS};
use chart_data::{ChartData, ChartKind, Column, Row};

#[test]
fn palette_cycles_past_the_end() {
    assert_eq!(color_for(0), CHART_COLORS[0]);
    assert_eq!(color_for(16), CHART_COLORS[0]);
    assert_eq!(color_for(17), CHART_COLORS[1]);
}

#[test]
fn blank_column_colors_are_filled_by_index() {
    let mut cols = vec![
        Column::new("Month", ""),
        Column::new("Sales", "#123456"),
        Column::new("Profit", "  "),
    ];
    assign_column_colors(&mut cols);
    assert_eq!(cols[0].color, CHART_COLORS[0]);
    assert_eq!(cols[1].color, "#123456");
    assert_eq!(cols[2].color, CHART_COLORS[2]);
}

#[test]
fn row_colors_assigned_only_for_pie_and_donut() {
    let rows = vec![
        Row::new().with("Cat", "A").with("Val", 1),
        Row::new().with("Cat", "B").with("Val", 2).with_color("#000000"),
    ];
    let cols = vec![Column::new("Cat", color_for(0)), Column::new("Val", color_for(1))];

    let mut pie = ChartData::new(cols.clone(), rows.clone());
    assign_row_colors(&mut pie, ChartKind::Donut);
    assert_eq!(pie.rows[0].color.as_deref(), Some(CHART_COLORS[0]));
    assert_eq!(pie.rows[1].color.as_deref(), Some("#000000"));

    let mut bar = ChartData::new(cols, rows);
    assign_row_colors(&mut bar, ChartKind::Bar);
    assert_eq!(bar.rows[0].color, None);
}
