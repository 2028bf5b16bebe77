//! WASM bindings for slot-engine.
//!
//! Exposes slot generation and the booking overlap guard to the booking web
//! app via `wasm-bindgen`. All complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slot_engine::{
    BookingHorizon, DayRequest, Reservation, Selectability, SlotConfig, SlotError, SlotGenerator,
    TimeSlot,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input of [`generate_slots`]: the shared day request plus an optional clock.
#[derive(Deserialize)]
struct SlotRequest {
    #[serde(flatten)]
    day: DayRequest,
    /// Current time; when present each slot carries `selectability`.
    #[serde(default)]
    now: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct TimeSlotDto {
    time: String,
    available: bool,
    is_occupied: bool,
    warning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    selectability: Option<Selectability>,
}

impl TimeSlotDto {
    fn new(slot: &TimeSlot, horizon: Option<&BookingHorizon>) -> Self {
        Self {
            time: slot.time.to_rfc3339(),
            available: slot.available,
            is_occupied: slot.is_occupied,
            warning: slot.warning,
            selectability: horizon.map(|h| h.classify(slot)),
        }
    }
}

/// Verdict of [`check_booking`].
#[derive(Serialize)]
struct BookingCheckDto {
    bookable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicting_reservation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlap_minutes: Option<i64>,
}

fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

/// Parse the optional configuration document; an empty string means defaults.
fn parse_config(json: &str) -> Result<SlotConfig, JsValue> {
    if json.trim().is_empty() {
        return Ok(SlotConfig::default());
    }
    SlotConfig::from_json(json).map_err(|e| js_err("Invalid config", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the slots of one day.
///
/// `request_json` is `{weekly_hours, day, duration_minutes, reservations, staff_id?, now?}`;
/// `config_json` is a (possibly empty or partial) slot configuration. Returns a
/// JSON array of `{time, available, is_occupied, warning, selectability?}`.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(request_json: &str, config_json: &str) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let request: SlotRequest =
        serde_json::from_str(request_json).map_err(|e| js_err("Invalid request JSON", e))?;
    let generator = SlotGenerator::new(&config).map_err(|e| js_err("Invalid config", e))?;
    let horizon = request
        .now
        .map(|now| BookingHorizon::from_config(now, &config));

    let dtos: Vec<TimeSlotDto> = request
        .day
        .slots(&generator)
        .iter()
        .map(|slot| TimeSlotDto::new(slot, horizon.as_ref()))
        .collect();

    serde_json::to_string(&dtos).map_err(|e| js_err("Serialization error", e))
}

/// Check a reservation against existing ones before submitting it.
///
/// Returns a JSON object `{bookable, conflicting_reservation_id?, overlap_minutes?}`.
/// Malformed input (bad JSON, `end <= start`) is an error rather than a verdict.
#[wasm_bindgen(js_name = "checkBooking")]
pub fn check_booking(reservation_json: &str, existing_json: &str) -> Result<String, JsValue> {
    let reservation: Reservation = serde_json::from_str(reservation_json)
        .map_err(|e| js_err("Invalid reservation JSON", e))?;
    let existing: Vec<Reservation> = serde_json::from_str(existing_json)
        .map_err(|e| js_err("Invalid reservations JSON", e))?;

    let verdict = match slot_engine::ensure_bookable(&reservation, &existing) {
        Ok(()) => BookingCheckDto {
            bookable: true,
            conflicting_reservation_id: None,
            overlap_minutes: None,
        },
        Err(SlotError::Conflict {
            reservation_id,
            overlap_minutes,
        }) => BookingCheckDto {
            bookable: false,
            conflicting_reservation_id: Some(reservation_id),
            overlap_minutes: Some(overlap_minutes),
        },
        Err(e) => return Err(JsValue::from_str(&e.to_string())),
    };

    serde_json::to_string(&verdict).map_err(|e| js_err("Serialization error", e))
}
