//! Anchoring wall-clock working hours to absolute instants in a branch timezone.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Longest DST gap searched when shifting a nonexistent local time forward.
const MAX_GAP_MINUTES: i64 = 180;

/// Policy for window boundaries that fall in a DST gap (e.g. 02:30 during spring forward).
///
/// Ambiguous local times (fall back) always resolve to the earlier instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DstPolicy {
    /// Drop the window entirely
    Skip,
    /// Move to the first valid local time after the gap
    #[default]
    ShiftForward,
}

/// Parse an IANA timezone name such as `"Europe/Istanbul"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
}

/// Absolute instant of `time` on `day` in `tz`.
///
/// Returns `None` only when the local time does not exist and `policy` is
/// [`DstPolicy::Skip`].
pub fn anchor(day: NaiveDate, time: NaiveTime, tz: Tz, policy: DstPolicy) -> Option<DateTime<Utc>> {
    let local = day.and_time(time);
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => match policy {
            DstPolicy::Skip => None,
            DstPolicy::ShiftForward => shift_forward(local, tz),
        },
    }
}

fn shift_forward(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    (1..=MAX_GAP_MINUTES).find_map(|m| {
        tz.from_local_datetime(&(local + Duration::minutes(m)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}
