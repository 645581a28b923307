//! Calendar helpers in the hotel's time zone
//!
//! Instants are turned into calendar dates here, once; the resolver itself
//! only sees `NaiveDate`.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::invalid_format(format!("Invalid date format: {}", date)))
}

/// Calendar date of an instant in the hotel time zone (time of day stripped)
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today in the hotel time zone
pub fn today_in(tz: Tz) -> NaiveDate {
    local_date(Utc::now(), tz)
}

/// Day after `date`, saturating at the end of the calendar
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(
            parse_date("10/03/2024").unwrap_err().code,
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        // 23:30 UTC on March 9th is already March 10th in Tokyo
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();
        assert_eq!(
            local_date(instant, chrono_tz::Asia::Tokyo),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(
            local_date(instant, Tz::UTC),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_next_day_saturates() {
        assert_eq!(next_day(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(
            next_day(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
