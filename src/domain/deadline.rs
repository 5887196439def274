use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Interpret a request `deadline` as a point in time.
///
/// Strings may be RFC 3339, a naive date-time (read as UTC) or a bare
/// `YYYY-MM-DD` date (UTC midnight). Numbers are milliseconds since the Unix
/// epoch; `null` is the epoch itself and booleans are 0 or 1 ms. Arrays,
/// objects and unparseable strings yield `None`.
pub fn parse_deadline(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::String(text) => parse_text(text.trim()),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .and_then(DateTime::from_timestamp_millis),
        Value::Null => Some(DateTime::UNIX_EPOCH),
        Value::Bool(flag) => DateTime::from_timestamp_millis(i64::from(*flag)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(text, format) {
            return Some(at.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}
