//! Booking domain records: working windows, weekly hours, services,
//! reservations, and the derived time slots handed back to the UI.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::resolver::weekday_key;

/// A contiguous time-of-day interval during which a staff member takes bookings.
///
/// Serialized as `{"start": "HH:mm", "end": "HH:mm"}`. Deserialization checks the
/// time format only; a window whose end is not after its start is kept as-is and
/// simply yields no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Parse a window from two `HH:mm` strings, requiring `start < end`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let window = Self {
            start: hhmm::parse(start)?,
            end: hhmm::parse(end)?,
        };
        if window.start >= window.end {
            return Err(SlotError::InvalidWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(window)
    }

    /// Length of the window in minutes (zero for inverted windows).
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }
}

/// Recurring weekly working hours for one staff member, keyed by lowercase
/// English weekday name (`"monday"` .. `"sunday"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyHours {
    days: BTreeMap<String, Vec<TimeWindow>>,
}

impl WeeklyHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the windows for `day`, replacing any previous entry.
    pub fn with_day(mut self, day: Weekday, windows: Vec<TimeWindow>) -> Self {
        self.days.insert(weekday_key(day).to_string(), windows);
        self
    }

    /// Windows configured under `key`, or an empty slice.
    pub fn windows(&self, key: &str) -> &[TimeWindow] {
        self.days.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

/// A bookable service from the branch catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Price in minor currency units.
    pub price: u64,
    pub duration_minutes: u32,
}

impl Service {
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An existing booking. `end` is fixed at creation time as
/// `start + service duration` and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub staff_id: String,
    pub service_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub customer: Customer,
}

impl Reservation {
    /// `true` when `end > start`. Malformed reservations never conflict with anything.
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }
}

/// One candidate appointment start, annotated for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: DateTime<Utc>,
    pub available: bool,
    pub is_occupied: bool,
    pub warning: bool,
}

/// `HH:mm` (de)serialization for `NaiveTime`. Seconds are accepted on input
/// (`HH:mm:ss`) since database time columns often carry them.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::error::{Result, SlotError};

    pub fn parse(s: &str) -> Result<NaiveTime> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map_err(|_| SlotError::InvalidTime(s.to_string()))
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
