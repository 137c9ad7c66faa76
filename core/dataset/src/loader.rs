//! FILENAME: core/dataset/src/loader.rs
//! PURPOSE: Loads the record sequence from JSON and rejects malformed records.
//! CONTEXT: Each array element is decoded on its own so an error names the
//! offending position instead of a byte offset into the whole document.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::DataError;
use crate::record::Record;

/// Parses a JSON array of records.
pub fn load_records_json(json: &str) -> Result<Vec<Record>, DataError> {
    let value: Value = serde_json::from_str(json)?;
    load_records_value(value)
}

/// Reads and parses a JSON array of records from disk.
pub fn load_records_file(path: impl AsRef<Path>) -> Result<Vec<Record>, DataError> {
    let content = fs::read_to_string(path)?;
    load_records_json(&content)
}

/// Converts an already-parsed JSON value into records.
pub fn load_records_value(value: Value) -> Result<Vec<Record>, DataError> {
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(DataError::NotAnArray),
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record = decode_record(index, item)?;
        records.push(record);
    }
    Ok(records)
}

fn decode_record(index: usize, item: Value) -> Result<Record, DataError> {
    // Missing or null grouping field gets a clearer message than serde's.
    match item.get("region") {
        Some(Value::String(_)) => {}
        Some(Value::Null) | None => {
            return Err(DataError::InvalidRecord {
                index,
                reason: "missing grouping field `region`".to_string(),
            });
        }
        Some(other) => {
            return Err(DataError::InvalidRecord {
                index,
                reason: format!("`region` must be a string, got {}", other),
            });
        }
    }

    let record: Record = serde_json::from_value(item).map_err(|e| DataError::InvalidRecord {
        index,
        reason: e.to_string(),
    })?;

    if !record.spend.is_finite() {
        return Err(DataError::InvalidRecord {
            index,
            reason: format!("`spend` must be finite, got {}", record.spend),
        });
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"region": "North", "channel": "Search", "spend": 120.5, "impressions": 1000, "conversions": 12, "clicks": 80},
        {"region": "South", "channel": "Social", "spend": 80, "impressions": 700, "conversions": 5, "clicks": 40}
    ]"#;

    #[test]
    fn test_load_sample() {
        let records = load_records_json(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region, "North");
        assert_eq!(records[0].spend, 120.5);
        assert_eq!(records[1].channel, "Social");
        assert_eq!(records[1].spend, 80.0);
    }

    #[test]
    fn test_empty_array_is_valid() {
        let records = load_records_json("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_rejects_non_array() {
        let err = load_records_json(r#"{"region": "North"}"#).unwrap_err();
        assert!(matches!(err, DataError::NotAnArray));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = load_records_json("[{").unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn test_missing_region_reports_position() {
        let json = r#"[
            {"region": "North", "channel": "Search", "spend": 1, "impressions": 1, "conversions": 1, "clicks": 1},
            {"channel": "Search", "spend": 1, "impressions": 1, "conversions": 1, "clicks": 1}
        ]"#;
        match load_records_json(json).unwrap_err() {
            DataError::InvalidRecord { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("region"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_null_region_rejected() {
        let json = r#"[{"region": null, "channel": "Search", "spend": 1, "impressions": 1, "conversions": 1, "clicks": 1}]"#;
        let err = load_records_json(json).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_numeric_region_rejected() {
        let json = r#"[{"region": 7, "channel": "Search", "spend": 1, "impressions": 1, "conversions": 1, "clicks": 1}]"#;
        let err = load_records_json(json).unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_missing_metric_rejected() {
        let json = r#"[{"region": "North", "channel": "Search", "spend": 1, "impressions": 1, "clicks": 1}]"#;
        let err = load_records_json(json).unwrap_err();
        assert!(err.to_string().contains("conversions"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let records = load_records_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_records_file("/nonexistent/records.json").unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
