//! The "slots for one day" request shared by the CLI and the WASM bindings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::reservations_for_day;
use crate::model::{Reservation, TimeSlot, WeeklyHours};
use crate::slots::SlotGenerator;

/// One staff member's day: hours, service duration, and reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRequest {
    #[serde(default)]
    pub weekly_hours: Option<WeeklyHours>,
    pub day: NaiveDate,
    pub duration_minutes: u32,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// When present, `reservations` is narrowed to this staff member and the
    /// branch-local `day` before checking overlaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
}

impl DayRequest {
    /// Reservations the day's slots are checked against.
    pub fn reservations_in_scope(&self, generator: &SlotGenerator) -> Vec<Reservation> {
        match &self.staff_id {
            Some(staff_id) => reservations_for_day(
                &self.reservations,
                staff_id,
                self.day,
                generator.timezone(),
            ),
            None => self.reservations.clone(),
        }
    }

    /// All slots of the day, in window order.
    pub fn slots(&self, generator: &SlotGenerator) -> Vec<TimeSlot> {
        let reservations = self.reservations_in_scope(generator);
        generator
            .day_slots(
                self.weekly_hours.as_ref(),
                self.day,
                self.duration_minutes,
                &reservations,
            )
            .collect()
    }
}
