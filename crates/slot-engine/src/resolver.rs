//! Resolve a staff member's recurring weekly hours into the working windows
//! for one calendar date.
//!
//! Missing or incomplete schedules mean "not working that day". Resolution
//! never fails, so a half-configured staff member still leaves the booking
//! screen usable.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::{TimeWindow, WeeklyHours};

/// Lowercase English weekday name used as the [`WeeklyHours`] key.
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Working windows for `day`, in configured order.
///
/// Returns an empty slice when `weekly_hours` is `None`, when the weekday has no
/// entry, or when the entry is empty (day off).
pub fn resolve(weekly_hours: Option<&WeeklyHours>, day: NaiveDate) -> &[TimeWindow] {
    match weekly_hours {
        Some(hours) => hours.windows(weekday_key(day.weekday())),
        None => &[],
    }
}
