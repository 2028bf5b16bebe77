//! Decide whether a candidate appointment collides with existing reservations.
//!
//! Intervals are half-open: `[start, end)`. A candidate that ends exactly when a
//! reservation starts (or starts exactly when one ends) is NOT occupied.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Reservation;

/// Availability status of one candidate interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlapStatus {
    pub is_occupied: bool,
    /// Free, but ends within the configured buffer before another booking.
    /// Always `false` when `is_occupied` is `true`.
    pub warning: bool,
}

/// A reservation that overlaps a requested booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub reservation: Reservation,
    pub overlap_minutes: i64,
}

/// Half-open interval overlap. Empty or inverted intervals overlap nothing.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < a_end && b_start < b_end && a_start < b_end && b_start < a_end
}

/// Check a candidate `[candidate_start, candidate_end)` against `reservations`.
///
/// `is_occupied` is set when the candidate overlaps any well-formed reservation.
/// Otherwise `warning` is set when some reservation starts at or after
/// `candidate_end` but less than `buffer` later. With a zero buffer `warning`
/// is never set.
///
/// Reservations with `end <= start` are ignored.
pub fn check(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    reservations: &[Reservation],
    buffer: Duration,
) -> OverlapStatus {
    let mut warning = false;

    for r in reservations {
        if !r.is_well_formed() {
            debug!(reservation = %r.id, "ignoring malformed reservation");
            continue;
        }
        if overlaps(candidate_start, candidate_end, r.start, r.end) {
            return OverlapStatus {
                is_occupied: true,
                warning: false,
            };
        }
        if buffer > Duration::zero() && r.start >= candidate_end && r.start - candidate_end < buffer {
            warning = true;
        }
    }

    OverlapStatus {
        is_occupied: false,
        warning,
    }
}

/// Every well-formed reservation overlapping `[start, end)`, in input order.
///
/// The overlap duration is `min(ends) - max(starts)`.
pub fn find_conflicts<'a>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    reservations: impl IntoIterator<Item = &'a Reservation>,
) -> Vec<Conflict> {
    reservations
        .into_iter()
        .filter(|r| r.is_well_formed() && overlaps(start, end, r.start, r.end))
        .map(|r| Conflict {
            reservation: r.clone(),
            overlap_minutes: (end.min(r.end) - start.max(r.start)).num_minutes(),
        })
        .collect()
}
