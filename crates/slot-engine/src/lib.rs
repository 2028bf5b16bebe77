//! # slot-engine
//!
//! Appointment slot availability for salon and barber-shop booking.
//!
//! Given a staff member's weekly working hours, a service duration, and the
//! reservations already on the books, the engine produces the day's bookable
//! start times, each marked free, occupied, or free-with-warning. Everything
//! here is pure and synchronous; fetching hours, services, and reservations is
//! the caller's job.
//!
//! ## Modules
//!
//! - [`model`]: Working windows, weekly hours, services, reservations, slots
//! - [`resolver`]: Weekly hours + date → that day's working windows
//! - [`slots`]: Working windows + duration + reservations → annotated slots
//! - [`overlap`]: Candidate vs. reservations: occupied / warning, conflict listing
//! - [`tz`]: Anchoring wall-clock hours in a branch timezone, DST policy
//! - [`booking`]: Drafting reservations and the write-time overlap guard
//! - [`horizon`]: Past / booking-horizon policy for the booking screen
//! - [`request`]: The one-day slot request shared by the front ends
//! - [`config`]: Buffer, timezone, and horizon settings
//! - [`error`]: Error types

pub mod booking;
pub mod config;
pub mod error;
pub mod horizon;
pub mod model;
pub mod overlap;
pub mod request;
pub mod resolver;
pub mod slots;
pub mod tz;

pub use booking::{ensure_bookable, reservations_for_day};
pub use config::SlotConfig;
pub use error::SlotError;
pub use horizon::{BookingHorizon, Selectability};
pub use model::{Customer, Reservation, Service, TimeSlot, TimeWindow, WeeklyHours};
pub use overlap::{check, find_conflicts, OverlapStatus};
pub use request::DayRequest;
pub use resolver::resolve;
pub use slots::{generate, SlotGenerator, Slots};
pub use tz::DstPolicy;
