//! Argument extraction for tool calls.
//!
//! Tool arguments arrive as a loosely typed JSON object. Everything a
//! handler reads goes through these accessors: they narrow to the exact
//! expected type and fail with [`ToolError::MissingArgument`] otherwise.
//! There is no coercion; a number is never accepted for a string field
//! and `"3"` is never accepted for an integer field.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::ToolError;

/// Extract a required string argument.
pub fn require_str<'a>(args: &'a JsonObject, key: &str) -> Result<&'a str, ToolError> {
    match args.get(key) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ToolError::missing_argument(key)),
    }
}

/// Extract several required string arguments at once.
///
/// Every missing or mistyped key is reported together in a single error
/// (e.g. `missing or invalid argument: title, end`), so a caller fixing
/// a request sees all offending fields in one round trip.
pub fn require_str_many<'a, const N: usize>(
    args: &'a JsonObject,
    keys: [&'static str; N],
) -> Result<[&'a str; N], ToolError> {
    let mut missing: Vec<&str> = Vec::new();
    let mut values = [""; N];

    for (slot, key) in values.iter_mut().zip(keys) {
        match args.get(key) {
            Some(Value::String(s)) => *slot = s,
            _ => missing.push(key),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(ToolError::missing_argument(missing.join(", ")))
    }
}

/// Extract a required integer argument.
///
/// Only JSON integers qualify; floats and numeric strings are rejected.
pub fn require_i64(args: &JsonObject, key: &str) -> Result<i64, ToolError> {
    match args.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| ToolError::missing_argument(format!("{} must be an integer", key))),
        _ => Err(ToolError::missing_argument(key)),
    }
}

/// Extract an optional string argument.
///
/// Absent and explicit `null` both yield `None`; any other non-string
/// value is an error rather than being silently dropped.
pub fn optional_str<'a>(args: &'a JsonObject, key: &str) -> Result<Option<&'a str>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ToolError::missing_argument(format!(
            "{} must be a string",
            key
        ))),
    }
}

/// Extract an optional integer argument.
///
/// Only JSON integers qualify; floats and numeric strings are rejected.
pub fn optional_i64(args: &JsonObject, key: &str) -> Result<Option<i64>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| {
            ToolError::missing_argument(format!("{} must be an integer", key))
        }),
        Some(_) => Err(ToolError::missing_argument(format!(
            "{} must be an integer",
            key
        ))),
    }
}

/// Extract an optional boolean argument.
pub fn optional_bool(args: &JsonObject, key: &str) -> Result<Option<bool>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ToolError::missing_argument(format!(
            "{} must be a boolean",
            key
        ))),
    }
}

/// Parse a date argument.
///
/// A full RFC 3339 timestamp is tried first, then a bare `YYYY-MM-DD`
/// date read as midnight UTC. The order is contractual: a timestamp
/// must never be truncated to its date part.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, ToolError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(ToolError::missing_argument(format!(
        "could not parse date '{}'; use ISO 8601 (e.g. 2025-06-01 or 2025-06-01T09:00:00Z)",
        value
    )))
}

/// Parse a timestamp argument.
///
/// Requires a time component; a bare date is rejected so an event is
/// never silently created at midnight. Fractional seconds and offsets
/// are accepted.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, ToolError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            ToolError::missing_argument(format!(
                "could not parse datetime '{}'; use ISO 8601 with a time component (e.g. 2025-06-01T09:00:00Z)",
                value
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_require_str_present() {
        let a = args(json!({ "title": "Standup" }));
        assert_eq!(require_str(&a, "title").unwrap(), "Standup");
    }

    #[test]
    fn test_require_str_absent() {
        let a = args(json!({}));
        let err = require_str(&a, "title").unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_require_str_rejects_number() {
        let a = args(json!({ "title": 42 }));
        assert!(require_str(&a, "title").is_err());
    }

    #[test]
    fn test_require_str_rejects_null() {
        let a = args(json!({ "title": null }));
        assert!(require_str(&a, "title").is_err());
    }

    #[test]
    fn test_require_str_many_ok() {
        let a = args(json!({ "title": "T", "start": "S", "end": "E" }));
        let [title, start, end] = require_str_many(&a, ["title", "start", "end"]).unwrap();
        assert_eq!((title, start, end), ("T", "S", "E"));
    }

    #[test]
    fn test_require_str_many_reports_only_missing() {
        let a = args(json!({ "start": "2025-06-01T09:00:00Z" }));
        let err = require_str_many(&a, ["title", "start", "end"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("title"));
        assert!(msg.contains("end"));
        assert!(!msg.contains("start"));
    }

    #[test]
    fn test_require_str_many_counts_mistyped_as_missing() {
        let a = args(json!({ "title": 1, "start": "S", "end": "E" }));
        let err = require_str_many(&a, ["title", "start", "end"]).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_require_i64_accepts_integer() {
        let a = args(json!({ "count": 25 }));
        assert_eq!(require_i64(&a, "count").unwrap(), 25);
    }

    #[test]
    fn test_require_i64_rejects_absent_float_and_string() {
        let a = args(json!({}));
        assert!(require_i64(&a, "count").is_err());
        let a = args(json!({ "count": 3.5 }));
        assert!(require_i64(&a, "count").is_err());
        let a = args(json!({ "count": "3" }));
        assert!(require_i64(&a, "count").is_err());
    }

    #[test]
    fn test_optional_str_absent_and_null() {
        let a = args(json!({ "notes": null }));
        assert_eq!(optional_str(&a, "notes").unwrap(), None);
        assert_eq!(optional_str(&a, "location").unwrap(), None);
    }

    #[test]
    fn test_optional_str_wrong_type_is_error() {
        let a = args(json!({ "notes": 5 }));
        assert!(optional_str(&a, "notes").is_err());
    }

    #[test]
    fn test_optional_i64_rejects_float_and_string() {
        let a = args(json!({ "limit": 3.5 }));
        assert!(optional_i64(&a, "limit").is_err());
        let a = args(json!({ "limit": "3" }));
        assert!(optional_i64(&a, "limit").is_err());
    }

    #[test]
    fn test_optional_i64_accepts_integer() {
        let a = args(json!({ "limit": 25 }));
        assert_eq!(optional_i64(&a, "limit").unwrap(), Some(25));
    }

    #[test]
    fn test_optional_bool() {
        let a = args(json!({ "all_day": true }));
        assert_eq!(optional_bool(&a, "all_day").unwrap(), Some(true));
        let a = args(json!({ "all_day": "yes" }));
        assert!(optional_bool(&a, "all_day").is_err());
    }

    #[test]
    fn test_parse_date_accepts_timestamp() {
        let dt = parse_date("2026-02-21T09:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 21, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_date_bare_date_is_midnight_utc() {
        let dt = parse_date("2026-02-21").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 21, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_date_honors_offset() {
        let dt = parse_date("2026-02-21T09:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 21, 7, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("not-a-date").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("not-a-date"));
        assert!(msg.contains("ISO 8601"));
    }

    #[test]
    fn test_parse_datetime_rejects_bare_date() {
        let err = parse_datetime("2026-02-21").unwrap_err();
        assert!(err.to_string().contains("time component"));
    }

    #[test]
    fn test_parse_datetime_accepts_fractional_seconds() {
        assert!(parse_datetime("2026-02-21T09:00:00.250Z").is_ok());
        assert!(parse_datetime("2026-02-21T09:00:00Z").is_ok());
    }
}
