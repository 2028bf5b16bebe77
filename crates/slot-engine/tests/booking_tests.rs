//! Tests for reservation drafting, per-day filtering, and the booking guard.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use slot_engine::{ensure_bookable, reservations_for_day, Customer, Reservation, Service, SlotError};

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, min, 0).unwrap()
}

fn haircut() -> Service {
    Service {
        id: "haircut".to_string(),
        name: "Haircut".to_string(),
        price: 25_000,
        duration_minutes: 45,
    }
}

fn reservation(id: &str, staff: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Reservation {
    Reservation {
        id: id.to_string(),
        staff_id: staff.to_string(),
        service_id: "haircut".to_string(),
        start,
        end,
        customer: Customer {
            name: "Ayse".to_string(),
            phone: "+90 555 000 0000".to_string(),
            email: None,
        },
    }
}

#[test]
fn draft_end_is_start_plus_service_duration() {
    let draft =
        Reservation::for_service("new", "staff-1", &haircut(), at(16, 9, 0), Customer::default())
            .unwrap();

    assert_eq!(draft.end, at(16, 9, 45));
    assert_eq!(draft.service_id, "haircut");
    assert_eq!(draft.staff_id, "staff-1");
}

#[test]
fn zero_duration_service_cannot_be_drafted() {
    let service = Service {
        duration_minutes: 0,
        ..haircut()
    };

    let err = Reservation::for_service("new", "staff-1", &service, at(16, 9, 0), Customer::default())
        .unwrap_err();

    assert!(matches!(err, SlotError::InvalidDuration(_)));
}

#[test]
fn free_time_is_bookable() {
    let existing = vec![reservation("r1", "staff-1", at(16, 10, 0), at(16, 10, 45))];
    let draft = reservation("new", "staff-1", at(16, 9, 0), at(16, 9, 45));

    assert_eq!(ensure_bookable(&draft, &existing), Ok(()));
}

#[test]
fn booking_ending_as_next_starts_is_bookable() {
    let existing = vec![reservation("r1", "staff-1", at(16, 9, 45), at(16, 10, 30))];
    let draft = reservation("new", "staff-1", at(16, 9, 0), at(16, 9, 45));

    assert!(ensure_bookable(&draft, &existing).is_ok());
}

#[test]
fn overlapping_booking_is_rejected_with_conflict() {
    let existing = vec![
        reservation("r1", "staff-1", at(16, 8, 0), at(16, 8, 30)),
        reservation("r2", "staff-1", at(16, 9, 30), at(16, 10, 15)),
    ];
    let draft = reservation("new", "staff-1", at(16, 9, 0), at(16, 9, 45));

    let err = ensure_bookable(&draft, &existing).unwrap_err();

    assert_eq!(
        err,
        SlotError::Conflict {
            reservation_id: "r2".to_string(),
            overlap_minutes: 15,
        }
    );
    assert_eq!(err.to_string(), "Booking overlaps reservation r2 by 15 minutes");
}

#[test]
fn other_staff_bookings_do_not_conflict() {
    let existing = vec![reservation("r1", "staff-2", at(16, 9, 0), at(16, 9, 45))];
    let draft = reservation("new", "staff-1", at(16, 9, 0), at(16, 9, 45));

    assert!(ensure_bookable(&draft, &existing).is_ok());
}

#[test]
fn rescheduling_does_not_collide_with_itself() {
    let existing = vec![reservation("r1", "staff-1", at(16, 9, 0), at(16, 9, 45))];
    let moved = reservation("r1", "staff-1", at(16, 9, 15), at(16, 10, 0));

    assert!(ensure_bookable(&moved, &existing).is_ok());
}

#[test]
fn malformed_draft_is_rejected() {
    let draft = reservation("new", "staff-1", at(16, 10, 0), at(16, 9, 0));

    assert_eq!(
        ensure_bookable(&draft, &[]),
        Err(SlotError::InvalidReservation {
            id: "new".to_string()
        })
    );
}

#[test]
fn day_filter_keeps_staff_and_date_in_order() {
    let all = vec![
        reservation("a", "staff-1", at(16, 14, 0), at(16, 14, 30)),
        reservation("b", "staff-2", at(16, 9, 0), at(16, 9, 30)),
        reservation("c", "staff-1", at(17, 9, 0), at(17, 9, 30)),
        reservation("d", "staff-1", at(16, 9, 0), at(16, 9, 30)),
    ];
    let day = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();

    let ids: Vec<String> = reservations_for_day(&all, "staff-1", day, Tz::UTC)
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec!["a", "d"]);
}

#[test]
fn day_filter_uses_branch_local_date() {
    // 22:30 UTC on the 16th is 01:30 on the 17th in Istanbul (UTC+3).
    let all = vec![reservation("late", "staff-1", at(16, 22, 30), at(16, 23, 0))];
    let tz: Tz = "Europe/Istanbul".parse().unwrap();

    let on_16th = reservations_for_day(&all, "staff-1", NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(), tz);
    let on_17th = reservations_for_day(&all, "staff-1", NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(), tz);

    assert!(on_16th.is_empty());
    assert_eq!(on_17th.len(), 1);
}

#[test]
fn reservation_json_without_customer_defaults_it() {
    let json = r#"{
        "id": "r1",
        "staff_id": "staff-1",
        "service_id": "haircut",
        "start": "2026-03-16T09:00:00Z",
        "end": "2026-03-16T09:45:00Z"
    }"#;

    let r: Reservation = serde_json::from_str(json).unwrap();

    assert_eq!(r.start, at(16, 9, 0));
    assert_eq!(r.customer, Customer::default());
    assert!(r.is_well_formed());
}
