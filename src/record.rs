// src/record.rs
//! Wire shapes for extraction results.

use serde::{Deserialize, Serialize};

/// One extracted recipe request. Calories and time are numeric strings (or
/// empty) exactly as the model reports them; keyword lists keep insertion
/// order and may contain duplicates. A non-empty `category` is always a
/// verbatim taxonomy label after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub keywords_name: Vec<String>,
}

/// Outcome of one extraction run. A reply that cannot be parsed as a record
/// is a value, not an error, so downstream consumers can branch on it
/// without exception handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Record(ExtractionRecord),
    ParseFailure { error: String, output: String },
}

impl ExtractionOutcome {
    pub fn parse_failure(raw_output: impl Into<String>) -> Self {
        Self::ParseFailure {
            error: "Failed to parse JSON".to_string(),
            output: raw_output.into(),
        }
    }

    pub fn as_record(&self) -> Option<&ExtractionRecord> {
        match self {
            Self::Record(r) => Some(r),
            Self::ParseFailure { .. } => None,
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reply_fields_default_to_empty() {
        let r: ExtractionRecord = serde_json::from_str(r#"{ "category": "chicken" }"#).unwrap();
        assert_eq!(r.category, "chicken");
        assert_eq!(r.calories, "");
        assert_eq!(r.time, "");
        assert!(r.keywords.is_empty());
        assert!(r.keywords_name.is_empty());
    }

    #[test]
    fn parse_failure_serializes_with_error_and_raw_output() {
        let out = ExtractionOutcome::parse_failure("not json at all");
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["error"], "Failed to parse JSON");
        assert_eq!(v["output"], "not json at all");
    }

    #[test]
    fn record_serializes_flat_without_a_tag() {
        let out = ExtractionOutcome::Record(ExtractionRecord {
            category: "stew".into(),
            ..Default::default()
        });
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["category"], "stew");
        assert!(v.get("error").is_none());
    }
}
