//! Timestamp parsing and rendering for reading lines.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rendering format for reading timestamps. `%.f` prints nothing when the
/// fractional second is zero, so whole-second readings stay `HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Patterns tried, in order, for timestamps without an offset.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse an ISO-8601 local timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.fraction]`, `YYYY-MM-DDTHH:MM`, a bare
/// `YYYY-MM-DD` (midnight) and RFC 3339 strings carrying an offset. For the
/// latter the wall-clock time is kept as written; no conversion happens.
///
/// # Examples
///
/// ```
/// use traffic_core::time_utils::parse_timestamp;
///
/// let ts = parse_timestamp("2021-12-01T05:30:00").unwrap();
/// assert_eq!(ts.to_string(), "2021-12-01 05:30:00");
/// assert!(parse_timestamp("2021-13-01T05:30:00").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Render a timestamp in the same ISO-8601 form the parser accepts.
///
/// # Examples
///
/// ```
/// use traffic_core::time_utils::{format_timestamp, parse_timestamp};
///
/// let ts = parse_timestamp("2021-12-08T18:00:00").unwrap();
/// assert_eq!(format_timestamp(&ts), "2021-12-08T18:00:00");
/// ```
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
