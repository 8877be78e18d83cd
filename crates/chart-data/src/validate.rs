// File: crates/chart-data/src/validate.rs
// Summary: Object-level and field-level validation for chart data.
// Notes:
// - Failures are values, never panics: the form layer maps `path()` onto the
//   field to highlight and `Display` onto the message to show.
// - Exactly one error per call, first match wins, in the order below.

use thiserror::Error;

use crate::types::{CellValue, ChartData, ChartKind, Column};

/// First validation failure for a chart's tabular data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least one column is required")]
    MissingColumns,
    #[error("At least one data row is required")]
    MissingRows,
    #[error("Pie/Donut charts require exactly 2 columns")]
    ExactColumnCount,
    #[error("At least 2 columns are required")]
    MinColumnCount,
    #[error("Column {} name is required", .index + 1)]
    BlankColumnName { index: usize },
    #[error("{column} is required in row {}", .row + 1)]
    IncompleteRow { row: usize, column: String },
    #[error("{column} must be a valid number in row {}", .row + 1)]
    NotANumber { row: usize, column: String },
    #[error("{column} must be a positive number in row {}", .row + 1)]
    NegativeNumber { row: usize, column: String },
    #[error("At least one complete data row is required")]
    NoCompleteRows,
}

impl ValidationError {
    /// Dotted path of the offending field, e.g. `rows.0.Sales`.
    pub fn path(&self) -> String {
        match self {
            Self::MissingColumns | Self::ExactColumnCount | Self::MinColumnCount => {
                "columns".to_string()
            }
            Self::MissingRows | Self::NoCompleteRows => "rows".to_string(),
            Self::BlankColumnName { index } => format!("columns.{index}.name"),
            Self::IncompleteRow { row, column }
            | Self::NotANumber { row, column }
            | Self::NegativeNumber { row, column } => format!("rows.{row}.{column}"),
        }
    }
}

/// Full-object validation, run before step transitions and final submit.
///
/// Checks in order: columns present, rows present, column count for the
/// kind, column names, row completeness, numeric value columns, and finally
/// that at least one complete row survives. Rows where every cell is blank
/// are skipped; they are filtered out before persistence, not errors.
pub fn validate_chart_data(chart: &ChartData, kind: ChartKind) -> Result<(), ValidationError> {
    let ChartData { columns, rows } = chart;

    if columns.is_empty() {
        return Err(ValidationError::MissingColumns);
    }
    if rows.is_empty() {
        return Err(ValidationError::MissingRows);
    }

    if kind.uses_row_colors() {
        if columns.len() != 2 {
            return Err(ValidationError::ExactColumnCount);
        }
    } else if columns.len() < 2 {
        return Err(ValidationError::MinColumnCount);
    }

    for (index, column) in columns.iter().enumerate() {
        if column.name.trim().is_empty() {
            return Err(ValidationError::BlankColumnName { index });
        }
    }

    // Row completeness: a row with any data must have data in every column.
    for (row_index, row) in rows.iter().enumerate() {
        if !row.has_data(columns) {
            continue;
        }
        for column in columns {
            if row.is_blank(&column.name) {
                return Err(ValidationError::IncompleteRow {
                    row: row_index,
                    column: column.name.clone(),
                });
            }
        }
    }

    // Value columns hold non-negative numbers; the label column is free-form.
    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, column) in columns.iter().enumerate() {
            if !kind.is_value_column(col_index) {
                continue;
            }
            let Some(value) = row.get(&column.name) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match value.as_number() {
                None => {
                    return Err(ValidationError::NotANumber {
                        row: row_index,
                        column: column.name.clone(),
                    })
                }
                Some(n) if n < 0.0 => {
                    return Err(ValidationError::NegativeNumber {
                        row: row_index,
                        column: column.name.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    if !rows.iter().any(|row| row.is_complete(columns)) {
        return Err(ValidationError::NoCompleteRows);
    }

    Ok(())
}

/// Single-field validation for live per-keystroke feedback. Returns the
/// user-facing message, or `None` when the field is acceptable as typed.
///
/// Accepts the two path shapes the form produces: `columns.<i>.name` and
/// `rows.<i>.<column name>`. Empty row cells always pass here; completeness
/// is enforced only by [`validate_chart_data`] at commit points, so the form
/// does not flag a row the user is still filling in.
pub fn validate_field(
    value: Option<&CellValue>,
    field_path: &str,
    columns: &[Column],
    kind: ChartKind,
) -> Option<String> {
    let (root, rest) = field_path.split_once('.')?;

    match root {
        "columns" => {
            let (_, field) = rest.split_once('.')?;
            if field != "name" {
                return None;
            }
            let blank = value.map_or(true, |v| match v {
                CellValue::Str(s) => s.trim().is_empty(),
                CellValue::Num(_) => false,
            });
            blank.then(|| "Column name is required".to_string())
        }
        "rows" => {
            // Split on the second dot only, so column names containing '.'
            // survive intact.
            let (_, column_name) = rest.split_once('.')?;
            let value = value?;
            if value.is_empty() {
                return None;
            }
            let index = columns.iter().position(|c| c.name == column_name)?;
            if !kind.is_value_column(index) {
                return None;
            }
            match value.as_number() {
                None => Some(format!("{column_name} must be a valid number")),
                Some(n) if n < 0.0 => Some(format!("{column_name} must be a positive number")),
                Some(_) => None,
            }
        }
        _ => None,
    }
}
