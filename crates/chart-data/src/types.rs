// File: crates/chart-data/src/types.rs
// Summary: Chart kinds, cell scalars, columns, rows, and the ChartData document.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six supported visualization types. Serialized as the lowercase
/// strings the form and persisted documents use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Area,
    Line,
    Pie,
    Donut,
    Histogram,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Bar,
        ChartKind::Area,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Donut,
        ChartKind::Histogram,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Area => "area",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
            ChartKind::Histogram => "histogram",
        }
    }

    /// Pie and donut slices carry their own colors; every other kind
    /// colors by column.
    pub fn uses_row_colors(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Donut)
    }

    /// Shared value-column policy: the first column is the label/category
    /// axis, every later column holds numeric values (for pie/donut that is
    /// exactly the second column). Both validators and the shaping code key
    /// off this one rule.
    pub fn is_value_column(self, index: usize) -> bool {
        index > 0
    }

    /// Form-level shape hints for this kind.
    pub fn requirements(self) -> KindRequirements {
        match self {
            ChartKind::Pie | ChartKind::Donut => KindRequirements {
                min_columns: 2,
                max_columns: 2,
                suggested: &["Category", "Value"],
                row_colors: true,
                description: "Add categories and their corresponding values. \
                              Each row represents a slice of the pie/donut.",
            },
            ChartKind::Histogram => KindRequirements {
                min_columns: 2,
                max_columns: 10,
                suggested: &["Range", "Frequency"],
                row_colors: false,
                description: "Add ranges/bins and their frequencies. \
                              Each row represents a bin in the histogram.",
            },
            ChartKind::Bar | ChartKind::Area | ChartKind::Line => KindRequirements {
                min_columns: 2,
                max_columns: 10,
                suggested: &["Month", "Sales", "Profit"],
                row_colors: false,
                description: "Add an X-axis category and one or more data series. \
                              Each row represents a data point.",
            },
        }
    }

    /// Starter columns for a freshly selected kind, colored from the palette.
    pub fn suggested_columns(self) -> Vec<Column> {
        self.requirements()
            .suggested
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(*name, crate::palette::color_for(i)))
            .collect()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown chart kind '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for ChartKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartKind::Bar),
            "area" => Ok(ChartKind::Area),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            "donut" => Ok(ChartKind::Donut),
            "histogram" => Ok(ChartKind::Histogram),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// Column-count bounds and starter shape for a chart kind.
#[derive(Clone, Copy, Debug)]
pub struct KindRequirements {
    pub min_columns: usize,
    pub max_columns: usize,
    pub suggested: &'static [&'static str],
    pub row_colors: bool,
    pub description: &'static str,
}

/// One cell: a string label or a number. Untagged so persisted rows like
/// `{"Month": "Jan", "Sales": 5}` deserialize without a wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Num(f64),
    Str(String),
}

impl CellValue {
    /// True only for the empty string; absent cells are handled by `Row`.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Str(s) if s.is_empty())
    }

    /// Permissive numeric coercion: numbers pass through, strings are
    /// trimmed and parsed, so `"3"` and `3` are equivalent. NaN never
    /// counts as a number.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Num(n) => *n,
            CellValue::Str(s) => s.trim().parse().ok()?,
        };
        (!n.is_nan()).then_some(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Str(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Num(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Num(n as f64)
    }
}

/// Declared cell type of a column. Persisted documents default to `string`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    String,
    Number,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub color: String,
    #[serde(rename = "type", default)]
    pub kind: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            kind: ColumnType::default(),
        }
    }
}

/// One data row: a flat map keyed by column name, plus an optional slice
/// color used only by pie/donut charts. Flattened so the persisted shape
/// stays `{"Month": "Jan", "Sales": 5, "color": "#8884d8"}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub values: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style cell insert for constructing rows in code.
    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn insert(&mut self, column: &str, value: impl Into<CellValue>) {
        self.values.insert(column.to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }

    /// A cell is blank when it is missing or holds the empty string.
    pub fn is_blank(&self, column: &str) -> bool {
        self.get(column).map_or(true, CellValue::is_empty)
    }

    /// True when at least one column has a non-blank value.
    pub fn has_data(&self, columns: &[Column]) -> bool {
        columns.iter().any(|c| !self.is_blank(&c.name))
    }

    /// True when every column has a non-blank value.
    pub fn is_complete(&self, columns: &[Column]) -> bool {
        !columns.is_empty() && columns.iter().all(|c| !self.is_blank(&c.name))
    }
}

/// The tabular payload of a chart: an ordered column list plus dynamic rows.
/// Rows serialize under the persisted document key `data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub columns: Vec<Column>,
    #[serde(rename = "data")]
    pub rows: Vec<Row>,
}

impl ChartData {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Drop rows with no data; what remains is what gets persisted.
    pub fn without_empty_rows(&self) -> ChartData {
        ChartData {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| r.has_data(&self.columns))
                .cloned()
                .collect(),
        }
    }
}
