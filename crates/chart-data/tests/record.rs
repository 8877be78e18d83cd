// File: crates/chart-data/tests/record.rs
// Purpose: Chart record schema validation, metadata, and document shape.

use chart_data::palette::color_for;
use chart_data::{ChartData, ChartKind, ChartMetadata, ChartRecord, Column, RecordError, Row};

fn sample_data() -> ChartData {
    ChartData::new(
        vec![
            Column::new("Month", color_for(0)),
            Column::new("Sales", color_for(1)),
        ],
        vec![Row::new().with("Month", "Jan").with("Sales", 5)],
    )
}

fn sample_record() -> ChartRecord {
    ChartRecord {
        title: "Monthly sales".to_string(),
        description: "Sales per month for 2025".to_string(),
        kind: ChartKind::Bar,
        category: "Finance".to_string(),
        group: "Reports".to_string(),
        chart_data: sample_data(),
        tags: vec![],
        is_public: false,
        metadata: None,
    }
}

#[test]
fn complete_record_validates() {
    assert_eq!(sample_record().validate(), Ok(()));
}

#[test]
fn short_title_is_rejected() {
    let mut record = sample_record();
    record.title = "ab".to_string();
    let err = record.validate().unwrap_err();
    assert_eq!(err, RecordError::TitleTooShort);
    assert_eq!(err.path(), "title");
    assert_eq!(err.to_string(), "Chart title must be at least 3 characters");
}

#[test]
fn short_description_is_rejected() {
    let mut record = sample_record();
    record.description = "abcd".to_string();
    let err = record.validate().unwrap_err();
    assert_eq!(err, RecordError::DescriptionTooShort);
    assert_eq!(err.path(), "description");
}

#[test]
fn blank_category_and_group_are_rejected() {
    let mut record = sample_record();
    record.category = "  ".to_string();
    assert_eq!(record.validate().unwrap_err().path(), "category");

    let mut record = sample_record();
    record.group = String::new();
    assert_eq!(record.validate().unwrap_err().path(), "group");
}

#[test]
fn data_errors_are_nested_under_chart_data() {
    let mut record = sample_record();
    record.chart_data.rows[0].insert("Sales", "abc");
    let err = record.validate().unwrap_err();
    assert_eq!(err.path(), "chartData.rows.0.Sales");
    assert_eq!(err.to_string(), "Sales must be a valid number in row 1");
}

#[test]
fn shell_fields_are_checked_before_data() {
    let mut record = sample_record();
    record.title = "x".to_string();
    record.chart_data.rows.clear();
    assert_eq!(record.validate().unwrap_err(), RecordError::TitleTooShort);
}

#[test]
fn metadata_counts_only_rows_that_persist() {
    let mut data = sample_data();
    data.rows.push(Row::new());
    data.rows.push(Row::new().with("Month", "").with("Sales", ""));
    let meta = ChartMetadata::compute(&data).unwrap();
    assert_eq!(meta.total_rows, 1);
    assert_eq!(meta.total_columns, 2);
    assert!(meta.data_size > 0);
}

#[test]
fn record_serializes_with_the_persisted_document_keys() {
    let json = serde_json::to_value(sample_record()).unwrap();
    assert_eq!(json["type"], "bar");
    assert_eq!(json["isPublic"], false);
    assert_eq!(json["chartData"]["columns"][0]["name"], "Month");
    assert_eq!(json["chartData"]["columns"][0]["type"], "string");
    assert_eq!(json["chartData"]["data"][0]["Month"], "Jan");
    assert_eq!(json["chartData"]["data"][0]["Sales"], 5.0);
}
