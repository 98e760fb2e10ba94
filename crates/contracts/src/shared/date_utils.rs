//! Utilities for date and time formatting
//!
//! Report dates come from a `datetime-local` input and are stored verbatim,
//! so anything from an empty string to a full RFC 3339 stamp may show up.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Shown instead of a date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Length of `YYYY-MM-DDTHH:MM`, the input's value without seconds.
const MINUTE_PRECISION_LEN: usize = 16;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

fn parse_occurred_at(raw: &str) -> Option<NaiveDate> {
    // Stamps with an offset are shown on the viewer's calendar day.
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a report's free-text date as `15 Mar 2024`.
/// Example: "2024-03-15T14:02" -> "15 Mar 2024", "" -> "Invalid Date"
pub fn format_occurred_at(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return INVALID_DATE.to_string();
    };

    let mut value = raw.to_string();
    if value.chars().count() == MINUTE_PRECISION_LEN {
        value.push_str(":00");
    }

    match parse_occurred_at(&value) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Human-readable submission time, e.g. "15/03/2024, 2:02:26 PM".
pub fn format_submitted_at(at: DateTime<Local>) -> String {
    at.format("%d/%m/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_minute_precision_input() {
        assert_eq!(format_occurred_at(Some("2024-03-15T14:02")), "15 Mar 2024");
        assert_eq!(format_occurred_at(Some("2023-12-01 09:30")), "1 Dec 2023");
    }

    #[test]
    fn test_other_accepted_shapes() {
        assert_eq!(format_occurred_at(Some("2024-03-15T14:02:26")), "15 Mar 2024");
        assert_eq!(format_occurred_at(Some("2024-03-15")), "15 Mar 2024");
    }

    #[test]
    fn test_offset_stamps_use_local_day() {
        for raw in ["2024-03-15T20:00:00Z", "2024-03-15T23:30:00+05:30", "2024-03-15T01:00:00-08:00"] {
            let expected = DateTime::parse_from_rfc3339(raw)
                .unwrap()
                .with_timezone(&Local)
                .format("%-d %b %Y")
                .to_string();
            assert_eq!(format_occurred_at(Some(raw)), expected);
        }

        let instant = chrono::Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap();
        let local_day = instant.with_timezone(&Local).date_naive();
        let shown = format_occurred_at(Some("2024-03-15T20:00:00Z"));
        assert_eq!(shown, local_day.format("%-d %b %Y").to_string());
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(format_occurred_at(None), INVALID_DATE);
        assert_eq!(format_occurred_at(Some("")), INVALID_DATE);
        assert_eq!(format_occurred_at(Some("yesterday night")), INVALID_DATE);
        assert_eq!(format_occurred_at(Some("2024-13-45T10:00")), INVALID_DATE);
    }

    #[test]
    fn test_format_submitted_at() {
        let at = Local.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_submitted_at(at), "15/03/2024, 2:02:26 PM");
    }
}
