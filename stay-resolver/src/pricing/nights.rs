//! Night Calculator
//!
//! Whole calendar nights between check-in and check-out.

use chrono::{DateTime, NaiveDate, TimeZone};

/// Nights between two calendar dates
///
/// Inverted or equal ranges give 0, never a negative count. Callers that need
/// a real stay must reject 0 themselves.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(0)
}

/// Nights between two instants, each reduced to its local calendar date
///
/// Time of day is ignored, so 23:59 on the 10th to 00:01 on the 11th is one
/// night. Convert to the hotel zone first (see [`crate::utils::time::local_date`]).
pub fn nights_between_instants<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> i64 {
    nights_between(start.date_naive(), end.date_naive())
}
