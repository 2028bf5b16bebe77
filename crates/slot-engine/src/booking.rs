//! Booking-side helpers: drafting reservations from a service, narrowing a
//! reservation list to one staff member's day, and the overlap guard the
//! write path runs before inserting.
//!
//! Slot availability is a snapshot and can go stale between rendering and
//! submission; [`ensure_bookable`] re-checks against fresh data at write time.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};
use crate::model::{Customer, Reservation, Service};
use crate::overlap::find_conflicts;
use crate::tz::local_date;

impl Reservation {
    /// Draft a reservation for `service` starting at `start`; `end` is
    /// `start + service.duration_minutes`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDuration` for a zero-length service.
    pub fn for_service(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        service: &Service,
        start: DateTime<Utc>,
        customer: Customer,
    ) -> Result<Self> {
        if service.duration_minutes == 0 {
            return Err(SlotError::InvalidDuration(format!(
                "service {} has zero duration",
                service.id
            )));
        }
        Ok(Self {
            id: id.into(),
            staff_id: staff_id.into(),
            service_id: service.id.clone(),
            start,
            end: start + service.duration(),
            customer,
        })
    }
}

/// Reservations of `staff_id` starting on local calendar `day` in `tz`,
/// in their original order.
pub fn reservations_for_day(
    reservations: &[Reservation],
    staff_id: &str,
    day: NaiveDate,
    tz: Tz,
) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| r.staff_id == staff_id && local_date(r.start, tz) == day)
        .cloned()
        .collect()
}

/// Reject `draft` if it is malformed or overlaps any of `existing`.
///
/// Only reservations of the same staff member are considered. A reservation
/// with the same id as the draft is skipped, so rescheduling does not collide
/// with itself.
///
/// # Errors
/// `SlotError::InvalidReservation` for `end <= start`, `SlotError::Conflict`
/// naming the first overlapped reservation otherwise.
pub fn ensure_bookable(draft: &Reservation, existing: &[Reservation]) -> Result<()> {
    if !draft.is_well_formed() {
        return Err(SlotError::InvalidReservation {
            id: draft.id.clone(),
        });
    }

    let same_staff = existing
        .iter()
        .filter(|r| r.staff_id == draft.staff_id && r.id != draft.id);

    match find_conflicts(draft.start, draft.end, same_staff).into_iter().next() {
        Some(conflict) => Err(SlotError::Conflict {
            reservation_id: conflict.reservation.id,
            overlap_minutes: conflict.overlap_minutes,
        }),
        None => Ok(()),
    }
}
