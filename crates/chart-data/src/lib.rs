// File: crates/chart-data/src/lib.rs
// Summary: Core library entry point; exports the chart data model, validation, and shaping API.

pub mod import;
pub mod palette;
pub mod record;
pub mod shape;
pub mod types;
pub mod validate;

pub use import::{read_csv, read_csv_path, ImportError};
pub use record::{ChartMetadata, ChartRecord, RecordError};
pub use shape::{shape_chart_data, SeriesConfig, ShapedChart, ShapedPoint};
pub use types::{
    CellValue, ChartData, ChartKind, Column, ColumnType, KindRequirements, ParseKindError, Row,
};
pub use validate::{validate_chart_data, validate_field, ValidationError};
