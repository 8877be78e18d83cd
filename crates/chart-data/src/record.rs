// File: crates/chart-data/src/record.rs
// Summary: Persisted chart record: shell fields, schema validation, and metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ChartData, ChartKind};
use crate::validate::{validate_chart_data, ValidationError};

/// A chart as persisted in the document store, minus server-assigned fields
/// (id, owner, timestamps).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub category: String,
    pub group: String,
    pub chart_data: ChartData,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ChartMetadata>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    pub total_rows: usize,
    pub total_columns: usize,
    /// Serialized size of the chart data, in bytes.
    pub data_size: usize,
    pub last_modified: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum RecordError {
    #[error("Chart title must be at least 3 characters")]
    TitleTooShort,
    #[error("Chart description must be at least 5 characters")]
    DescriptionTooShort,
    #[error("Category is required")]
    MissingCategory,
    #[error("Group is required")]
    MissingGroup,
    #[error(transparent)]
    Data(#[from] ValidationError),
}

impl RecordError {
    /// Dotted path of the offending field; data errors are nested under
    /// `chartData`.
    pub fn path(&self) -> String {
        match self {
            Self::TitleTooShort => "title".to_string(),
            Self::DescriptionTooShort => "description".to_string(),
            Self::MissingCategory => "category".to_string(),
            Self::MissingGroup => "group".to_string(),
            Self::Data(err) => format!("chartData.{}", err.path()),
        }
    }
}

impl ChartRecord {
    /// Schema validation run server-side before persisting. First failure
    /// wins, shell fields before the tabular data.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.title.chars().count() < 3 {
            return Err(RecordError::TitleTooShort);
        }
        if self.description.chars().count() < 5 {
            return Err(RecordError::DescriptionTooShort);
        }
        if self.category.trim().is_empty() {
            return Err(RecordError::MissingCategory);
        }
        if self.group.trim().is_empty() {
            return Err(RecordError::MissingGroup);
        }
        validate_chart_data(&self.chart_data, self.kind)?;
        Ok(())
    }
}

impl ChartMetadata {
    /// Snapshot metadata for a chart about to be persisted. Row counts
    /// reflect what persists, i.e. after empty rows are dropped.
    pub fn compute(chart: &ChartData) -> Result<Self, serde_json::Error> {
        let data_size = serde_json::to_vec(chart)?.len();
        let total_rows = chart
            .rows
            .iter()
            .filter(|r| r.has_data(&chart.columns))
            .count();
        Ok(Self {
            total_rows,
            total_columns: chart.columns.len(),
            data_size,
            last_modified: Utc::now(),
        })
    }
}
