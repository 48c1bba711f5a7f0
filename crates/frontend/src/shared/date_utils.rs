/// Utilities for date and time formatting
///
/// Provides consistent date handling between the backend's ISO strings,
/// `<input type="date">` values and on-screen text
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format ISO date string for display
/// Example: "2024-03-15T14:02:26Z" -> "Mar 15, 2024"
pub fn format_date(date_str: &str) -> String {
    if date_str.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse_date_part(date_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Format ISO datetime string to "Mar 15, 2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(datetime_str) {
        return parsed.format("%b %-d, %Y %H:%M").to_string();
    }
    if let Ok(parsed) =
        chrono::NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f")
    {
        return parsed.format("%b %-d, %Y %H:%M").to_string();
    }
    format_date(datetime_str)
}

/// Value for a date input from a backend timestamp
/// Example: "1990-04-01T00:00:00" -> "1990-04-01"
pub fn to_date_input(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or_default().to_string()
}

/// Normalized ISO timestamp (UTC midnight, millisecond precision) for a date input value
/// Example: "1990-04-01" -> "1990-04-01T00:00:00.000Z"
pub fn date_input_to_iso(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// File-name-safe timestamp, e.g. "2024-03-15T14-02-26-123Z"
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

fn parse_date_part(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-05T14:02:26.123Z"), "Mar 5, 2024");
    }

    #[test]
    fn test_format_date_edge_cases() {
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("invalid"), "Invalid Date");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26Z"), "Mar 15, 2024 14:02");
        assert_eq!(format_datetime("2024-03-15T14:02:26.5"), "Mar 15, 2024 14:02");
        assert_eq!(format_datetime("2024-03-15"), "Mar 15, 2024");
    }

    #[test]
    fn test_date_input_round_trip_through_backend_format() {
        assert_eq!(to_date_input("1990-04-01T00:00:00"), "1990-04-01");
        assert_eq!(to_date_input(""), "");
        assert_eq!(
            date_input_to_iso("1990-04-01").as_deref(),
            Some("1990-04-01T00:00:00.000Z")
        );
        assert_eq!(date_input_to_iso("01/04/1990"), None);
    }

    #[test]
    fn test_file_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(file_timestamp(now), "2024-03-15T14-02-26-000Z");
    }
}
