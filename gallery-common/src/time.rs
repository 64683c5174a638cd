//! Timestamp utilities

use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Milliseconds since epoch, used as the `cacheBuster` query parameter
pub fn cache_buster() -> i64 {
    now().timestamp_millis()
}

/// Format a timestamp as a long month name and year, e.g. "June 2024"
///
/// Computed in UTC.
pub fn month_year_label(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %Y").to_string()
}

/// Parse a user-supplied date
///
/// Accepts RFC 3339 timestamps (`2024-06-01T10:00:00Z`) or plain calendar
/// dates (`2024-06-01`, interpreted as midnight UTC).
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidInput(format!("Unrecognised date: '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp.timestamp() > 946_684_800);
    }

    #[test]
    fn test_month_year_label_uses_long_month_name() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(month_year_label(&ts), "June 2024");
    }

    #[test]
    fn test_month_year_label_first_instant_of_month() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(month_year_label(&ts), "January 2024");
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let ts = parse_timestamp("2024-01-20T08:30:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 20, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_with_offset_normalises_to_utc() {
        let ts = parse_timestamp("2024-01-20T08:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 20, 6, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_plain_date() {
        let ts = parse_timestamp(" 2024-01-05 ").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(parse_timestamp("last tuesday"), Err(Error::InvalidInput(_))));
    }
}
