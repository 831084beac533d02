//! Datetime serialization/deserialization helpers.
//!
//! Timestamp fields on this API drift between RFC3339 strings, SQL-style
//! `YYYY-MM-DD HH:MM:SS` strings, Unix timestamps, and `null`. Every wire type
//! therefore models them as `Option<DateTime<Utc>>`:
//! - Serialization: `Some` -> RFC3339 string, `None` -> `null`
//! - Deserialization: any recognized shape -> `Some`, `null` or an
//!   unrecognizable value -> `None` (a bad date never fails a whole listing)

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `Option<DateTime<Utc>>` as RFC3339 or `null`.
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// Deserializes `Option<DateTime<Utc>>` from RFC3339, SQL datetime, Unix
/// timestamp, or `null`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampShape {
        String(String),
        I64(i64),
        U64(u64),
    }

    match Option::<TimestampShape>::deserialize(deserializer)? {
        Some(TimestampShape::String(s)) => Ok(parse_datetime_str(&s)),
        Some(TimestampShape::I64(ts)) => Ok(parse_unix_timestamp(ts)),
        Some(TimestampShape::U64(ts)) => {
            // The `cast_signed` method explicitly performs a wrapping cast from u64 to i64.
            // This is safe for timestamps, which are not expected to exceed i64::MAX.
            Ok(parse_unix_timestamp(ts.cast_signed()))
        }
        None => Ok(None),
    }
}

/// Parses a datetime string in any of the shapes this backend has been seen
/// emitting.
fn parse_datetime_str(s: &str) -> Option<DateTime<Utc>> {
    // RFC3339 first, then the SQL shape with optional fractional seconds.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    None
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
