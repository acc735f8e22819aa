//! Normalization of time-like property values to ISO-8601 strings.

use chrono::{TimeZone, Utc};

use crate::types::Value;

/// Column names (lower-cased) whose values get time normalization.
///
/// `datatime` is a recurring header typo in the wild; kept deliberately.
pub const TIME_COLUMNS: [&str; 4] = ["datatime", "timestamp", "time", "datetime"];

/// Whether a column's values should be run through [`normalize_time`].
pub fn is_time_column(name: &str) -> bool {
    TIME_COLUMNS.contains(&name.to_lowercase().as_str())
}

/// Try to convert a time-like value to an ISO-8601 string.
///
/// - Missing input (null or NaN) stays null.
/// - A structured timestamp is formatted with its offset.
/// - An integer-coercible value is interpreted as an epoch: above
///   10,000,000,000 as milliseconds, above 1,000,000,000 as seconds, both
///   rendered in UTC. These exact thresholds are a compatibility contract;
///   values near them (large IDs, timestamps close to the epoch) are
///   knowingly ambiguous.
/// - Anything else, including epochs out of chrono's representable range,
///   passes through unchanged.
pub fn normalize_time(value: &Value) -> Value {
    if value.is_missing() {
        return Value::Null;
    }

    if let Value::Timestamp(dt) = value {
        return Value::Utf8(dt.to_rfc3339());
    }

    if let Some(epoch) = integer_value(value) {
        if epoch > 10_000_000_000 {
            if let Some(dt) = Utc.timestamp_millis_opt(epoch).single() {
                return Value::Utf8(dt.to_rfc3339());
            }
        } else if epoch > 1_000_000_000 {
            if let Some(dt) = Utc.timestamp_opt(epoch, 0).single() {
                return Value::Utf8(dt.to_rfc3339());
            }
        }
    }

    value.clone()
}

/// Integer coercion for the epoch heuristic: floats truncate, strings parse.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Int64(i) => Some(*i),
        Value::Float64(f) if f.is_finite() => Some(*f as i64),
        Value::Utf8(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::{is_time_column, normalize_time};
    use crate::types::Value;

    #[test]
    fn recognizes_time_columns_case_insensitively() {
        assert!(is_time_column("timestamp"));
        assert!(is_time_column("DateTime"));
        assert!(is_time_column("TIME"));
        assert!(is_time_column("dataTime"));
        assert!(!is_time_column("created_at"));
    }

    #[test]
    fn seconds_epoch_converts_to_utc_iso8601() {
        let out = normalize_time(&Value::Int64(1_700_000_000));
        assert_eq!(out, Value::Utf8("2023-11-14T22:13:20+00:00".to_string()));
    }

    #[test]
    fn millisecond_and_second_epochs_agree_on_the_instant() {
        let from_secs = normalize_time(&Value::Int64(1_700_000_000));
        let from_millis = normalize_time(&Value::Int64(1_700_000_000_000));
        assert_eq!(from_secs, from_millis);
    }

    #[test]
    fn epoch_accepts_floats_and_numeric_strings() {
        assert_eq!(
            normalize_time(&Value::Float64(1_700_000_000.7)),
            Value::Utf8("2023-11-14T22:13:20+00:00".to_string())
        );
        assert_eq!(
            normalize_time(&Value::Utf8("1700000000".to_string())),
            Value::Utf8("2023-11-14T22:13:20+00:00".to_string())
        );
    }

    #[test]
    fn values_at_or_below_the_seconds_threshold_pass_through() {
        assert_eq!(normalize_time(&Value::Int64(42)), Value::Int64(42));
        assert_eq!(
            normalize_time(&Value::Int64(1_000_000_000)),
            Value::Int64(1_000_000_000)
        );
        assert_eq!(
            normalize_time(&Value::Utf8("yesterday".to_string())),
            Value::Utf8("yesterday".to_string())
        );
    }

    #[test]
    fn missing_values_stay_null() {
        assert_eq!(normalize_time(&Value::Null), Value::Null);
        assert_eq!(normalize_time(&Value::Float64(f64::NAN)), Value::Null);
    }

    #[test]
    fn structured_timestamps_keep_their_offset() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let dt = offset.with_ymd_and_hms(2023, 11, 14, 23, 13, 20).unwrap();
        assert_eq!(
            normalize_time(&Value::Timestamp(dt)),
            Value::Utf8("2023-11-14T23:13:20+01:00".to_string())
        );
    }
}
