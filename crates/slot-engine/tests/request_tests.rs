//! Tests for the shared one-day slot request.

use chrono::{DateTime, TimeZone, Utc};
use slot_engine::{DayRequest, SlotGenerator, TimeSlot};

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, min, 0).unwrap()
}

fn request(staff_id: Option<&str>) -> DayRequest {
    let mut request: DayRequest = serde_json::from_str(
        r#"{
            "weekly_hours": {"monday": [{"start": "09:00", "end": "11:00"}]},
            "day": "2026-03-16",
            "duration_minutes": 30,
            "reservations": [
                {"id": "r1", "staff_id": "staff-1", "service_id": "haircut",
                 "start": "2026-03-16T09:30:00Z", "end": "2026-03-16T10:00:00Z"},
                {"id": "r2", "staff_id": "staff-2", "service_id": "haircut",
                 "start": "2026-03-16T10:00:00Z", "end": "2026-03-16T10:30:00Z"},
                {"id": "r3", "staff_id": "staff-1", "service_id": "haircut",
                 "start": "2026-03-17T10:30:00Z", "end": "2026-03-17T11:00:00Z"}
            ]
        }"#,
    )
    .unwrap();
    request.staff_id = staff_id.map(str::to_string);
    request
}

fn occupied(slots: &[TimeSlot]) -> Vec<DateTime<Utc>> {
    slots.iter().filter(|s| s.is_occupied).map(|s| s.time).collect()
}

#[test]
fn staff_id_narrows_reservations_to_staff_and_day() {
    let generator = SlotGenerator::default();
    let request = request(Some("staff-1"));

    let ids: Vec<String> = request
        .reservations_in_scope(&generator)
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec!["r1"]);
    assert_eq!(occupied(&request.slots(&generator)), vec![at(9, 30)]);
}

#[test]
fn without_staff_id_every_reservation_counts() {
    let generator = SlotGenerator::default();
    let request = request(None);

    assert_eq!(request.reservations_in_scope(&generator).len(), 3);
    assert_eq!(occupied(&request.slots(&generator)), vec![at(9, 30), at(10, 0)]);
}

#[test]
fn minimal_request_has_no_slots() {
    let request: DayRequest =
        serde_json::from_str(r#"{"day": "2026-03-16", "duration_minutes": 30}"#).unwrap();

    assert!(request.slots(&SlotGenerator::default()).is_empty());
    assert_eq!(request.staff_id, None);
}
