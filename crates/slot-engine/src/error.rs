//! Error types for slot-engine operations.
//!
//! Slot generation and overlap checks are total and never return these. Only
//! parsing, configuration, and the booking guard do.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotError {
    #[error("Invalid time '{0}': expected HH:mm")]
    InvalidTime(String),

    #[error("Invalid working window {start}-{end}: start must be before end")]
    InvalidWindow { start: String, end: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid reservation {id}: end must be after start")]
    InvalidReservation { id: String },

    /// The requested booking overlaps an existing reservation.
    #[error("Booking overlaps reservation {reservation_id} by {overlap_minutes} minutes")]
    Conflict {
        reservation_id: String,
        overlap_minutes: i64,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
