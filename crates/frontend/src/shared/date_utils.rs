//! Date/time formatting for result cells and the "Updated" footer.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(DATETIME_FORMAT).to_string()
}

/// "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26".
///
/// Accepts RFC 3339 and naive `YYYY-MM-DD[T ]HH:MM:SS`; anything else is returned as is.
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(DATETIME_FORMAT).to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024".
pub fn format_date(value: &str) -> String {
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02:26");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59:59");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31.12.2024 23:59:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(&at), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
