//! Presentation policy for the booking screen: which generated slots a
//! customer may actually pick right now.
//!
//! Kept apart from [`crate::slots`] so slot generation stays a function of its
//! inputs alone; this is the only place that looks at the current time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{SlotConfig, DEFAULT_HORIZON_DAYS};
use crate::model::TimeSlot;

/// Why a slot can or cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selectability {
    Selectable,
    Occupied,
    /// Starts at or before `now`.
    Past,
    /// Starts more than the horizon after `now`.
    BeyondHorizon,
}

impl Selectability {
    pub fn is_selectable(self) -> bool {
        self == Selectability::Selectable
    }
}

/// The bookable range `(now, now + max_days_ahead]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingHorizon {
    pub now: DateTime<Utc>,
    pub max_days_ahead: u32,
}

impl BookingHorizon {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            max_days_ahead: DEFAULT_HORIZON_DAYS,
        }
    }

    pub fn from_config(now: DateTime<Utc>, config: &SlotConfig) -> Self {
        Self {
            now,
            max_days_ahead: config.horizon_days,
        }
    }

    /// Last bookable instant. A horizon reaching past the representable range
    /// has no upper bound.
    pub fn latest(&self) -> DateTime<Utc> {
        Duration::try_days(i64::from(self.max_days_ahead))
            .and_then(|ahead| self.now.checked_add_signed(ahead))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Occupied wins over the time checks, so a booked slot in the past still
    /// reads as occupied.
    pub fn classify(&self, slot: &TimeSlot) -> Selectability {
        if slot.is_occupied {
            Selectability::Occupied
        } else if slot.time <= self.now {
            Selectability::Past
        } else if slot.time > self.latest() {
            Selectability::BeyondHorizon
        } else {
            Selectability::Selectable
        }
    }
}
