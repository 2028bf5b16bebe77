//! Generate duration-aligned appointment candidates for one staff member's day.
//!
//! Each working window is walked from its start in steps of the service
//! duration while `step + duration <= window end`. Every candidate is checked
//! against the day's reservations. Windows shorter than the duration yield
//! nothing; there are no partial slots.
//!
//! Past-time and booking-horizon filtering are presentation concerns and live in
//! [`crate::horizon`], so the output here depends only on the inputs.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::config::SlotConfig;
use crate::error::Result;
use crate::model::{Reservation, TimeSlot, TimeWindow, WeeklyHours};
use crate::overlap::check;
use crate::resolver::resolve;
use crate::tz::{anchor, DstPolicy};

/// Slot generator bound to a branch's timezone and warning policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGenerator {
    tz: Tz,
    dst_policy: DstPolicy,
    buffer: Duration,
}

impl Default for SlotGenerator {
    fn default() -> Self {
        Self {
            tz: Tz::UTC,
            dst_policy: DstPolicy::default(),
            buffer: Duration::zero(),
        }
    }
}

impl SlotGenerator {
    /// Build a generator from configuration.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimezone` if the configured timezone is unknown.
    pub fn new(config: &SlotConfig) -> Result<Self> {
        Ok(Self {
            tz: config.tz()?,
            dst_policy: config.dst_policy,
            buffer: config.buffer(),
        })
    }

    pub fn with_buffer(mut self, buffer: Duration) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_timezone(mut self, tz: Tz, dst_policy: DstPolicy) -> Self {
        self.tz = tz;
        self.dst_policy = dst_policy;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Lazily generate the slots of `day` from `windows`.
    ///
    /// `reservations` should already be narrowed to this staff member and day.
    /// A zero `duration_minutes` yields no slots.
    pub fn generate<'a>(
        &self,
        day: NaiveDate,
        windows: &'a [TimeWindow],
        duration_minutes: u32,
        reservations: &'a [Reservation],
    ) -> Slots<'a> {
        trace!(%day, windows = windows.len(), duration_minutes, "generating slots");

        let malformed = reservations.iter().filter(|r| !r.is_well_formed()).count();
        if malformed > 0 {
            debug!(%day, malformed, "excluding malformed reservations from overlap checks");
        }

        Slots {
            day,
            windows: windows.iter(),
            cursor: None,
            step: Duration::minutes(i64::from(duration_minutes)),
            reservations,
            generator: *self,
        }
    }

    /// Resolve `weekly_hours` for `day` and generate its slots in one go.
    pub fn day_slots<'a>(
        &self,
        weekly_hours: Option<&'a WeeklyHours>,
        day: NaiveDate,
        duration_minutes: u32,
        reservations: &'a [Reservation],
    ) -> Slots<'a> {
        self.generate(day, resolve(weekly_hours, day), duration_minutes, reservations)
    }

    fn open(&self, day: NaiveDate, window: &TimeWindow) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = anchor(day, window.start, self.tz, self.dst_policy);
        let end = anchor(day, window.end, self.tz, self.dst_policy);
        match (start, end) {
            (Some(start), Some(end)) if start < end => Some((start, end)),
            _ => {
                debug!(%day, start = %window.start, end = %window.end, "skipping unusable working window");
                None
            }
        }
    }
}

/// Slots in UTC with no warning buffer. See [`SlotGenerator::generate`].
pub fn generate<'a>(
    day: NaiveDate,
    windows: &'a [TimeWindow],
    duration_minutes: u32,
    reservations: &'a [Reservation],
) -> Slots<'a> {
    SlotGenerator::default().generate(day, windows, duration_minutes, reservations)
}

/// Lazy, restartable sequence of [`TimeSlot`]s in window order.
///
/// Cloning the iterator replays the remaining slots identically.
#[derive(Debug, Clone)]
pub struct Slots<'a> {
    day: NaiveDate,
    windows: std::slice::Iter<'a, TimeWindow>,
    /// Next candidate start and the end of the window being walked.
    cursor: Option<(DateTime<Utc>, DateTime<Utc>)>,
    step: Duration,
    reservations: &'a [Reservation],
    generator: SlotGenerator,
}

impl Iterator for Slots<'_> {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        if self.step <= Duration::zero() {
            return None;
        }

        loop {
            if let Some((start, window_end)) = self.cursor {
                let end = start + self.step;
                if end <= window_end {
                    self.cursor = Some((end, window_end));
                    let status = check(start, end, self.reservations, self.generator.buffer);
                    return Some(TimeSlot {
                        time: start,
                        available: !status.is_occupied,
                        is_occupied: status.is_occupied,
                        warning: status.warning,
                    });
                }
                self.cursor = None;
            }

            let window = self.windows.next()?;
            self.cursor = self.generator.open(self.day, window);
        }
    }
}

impl std::iter::FusedIterator for Slots<'_> {}
