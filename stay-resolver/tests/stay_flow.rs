use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{
    BookingDecision, BookingStatus, GuestInfo, HotelDetailRecord, RoomType, StayRequest,
};
use stay_resolver::{
    ErrorCode, FailureReason, ResolverConfig, StaySession, build_submission,
    clamp_rooms_requested, estimate_total, min_rooms_needed, nights_between,
    recommend_room_type, validate,
};

const HOTEL_JSON: &str = r#"{
    "hotel": {
        "_id": "hotel-porto-1",
        "name": "Ribeira Guest House",
        "city": "Porto",
        "country": "Portugal",
        "startingPricePerNight": 45.5,
        "currency": "eur"
    },
    "roomTypes": [
        {"_id": "single", "title": "Single", "capacityAdults": 1, "quantity": 4, "pricePerNight": 45.5},
        {"_id": "twin", "title": "Twin", "capacityAdults": 2, "quantity": 3, "pricePerNight": 80},
        {"_id": "loft", "title": "Loft", "capacityAdults": 0, "quantity": 0, "pricePerNight": 120},
        {"title": "Broken record"}
    ]
}"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn twin() -> RoomType {
    RoomType::new("twin", "Twin", 2, Some(3), Decimal::from(80))
}

#[test]
fn test_nights_properties() {
    let d = date(2024, 3, 10);
    assert_eq!(nights_between(d, d), 0);
    assert_eq!(nights_between(d, date(2024, 3, 11)), 1);
    assert_eq!(nights_between(date(2024, 3, 11), d), 0);
    // across the DST change and a leap day
    assert_eq!(nights_between(date(2024, 2, 28), date(2024, 4, 1)), 33);
}

#[test]
fn test_min_rooms_is_ceiling() {
    for guests in 1..=12 {
        for capacity in 1..=5 {
            let expected = (guests + capacity - 1) / capacity;
            assert_eq!(min_rooms_needed(guests, capacity), expected);
        }
    }
    assert_eq!(min_rooms_needed(5, 2), 3);
}

#[test]
fn test_clamp_and_estimate() {
    for requested in -3..15 {
        let rooms = clamp_rooms_requested(requested, 2, 6);
        assert!((2..=6).contains(&rooms));
    }
    assert_eq!(estimate_total(Decimal::from(100), 3, 2), Decimal::from(600));
}

#[test]
fn test_five_adults_in_twins() {
    let offered = [twin()];
    let stay = |rooms| StayRequest::new(date(2024, 3, 10), date(2024, 3, 12), 5, "twin", rooms);

    assert_eq!(min_rooms_needed(5, 2), 3);
    assert!(validate(&stay(3), &offered, 10).valid);
    assert_eq!(
        validate(&stay(2), &offered, 10).failure_reason,
        Some(FailureReason::InsufficientRooms {
            min_needed: 3,
            guests_adults: 5
        })
    );
    assert_eq!(
        validate(&stay(5), &offered, 10).failure_reason,
        Some(FailureReason::ExceedsAvailability { max_possible: 3 })
    );
}

#[test]
fn test_same_day_stay_rejected() {
    let request = StayRequest::new(date(2024, 3, 10), date(2024, 3, 10), 2, "twin", 1);
    let result = validate(&request, &[twin()], 10);
    assert!(!result.valid);
    assert_eq!(result.failure_reason, Some(FailureReason::InvalidDateRange));
}

#[test]
fn test_hotel_without_room_types() {
    assert!(recommend_room_type(&[], 2).is_none());

    let request = StayRequest::new(date(2024, 3, 10), date(2024, 3, 12), 2, "twin", 1);
    assert_eq!(
        validate(&request, &[], 10).failure_reason,
        Some(FailureReason::NoRoomTypeSelected)
    );
}

#[test]
fn test_validate_is_deterministic() {
    let offered = [twin()];
    let request = StayRequest::new(date(2024, 3, 10), date(2024, 3, 12), 5, "twin", 2);
    let first = validate(&request, &offered, 10);
    for _ in 0..10 {
        assert_eq!(validate(&request, &offered, 10), first);
    }
}

#[test]
fn test_detail_response_to_booking() {
    let record: HotelDetailRecord = serde_json::from_str(HOTEL_JSON).unwrap();
    let (hotel, room_types) = record.normalize().unwrap();

    assert_eq!(hotel.currency.as_deref(), Some("EUR"));
    // record without id dropped, loft normalized
    assert_eq!(room_types.len(), 3);
    let loft = room_types.iter().find(|rt| rt.id == "loft").unwrap();
    assert_eq!(loft.capacity_adults, 1);
    assert_eq!(loft.quantity, None);

    let config = ResolverConfig::default();
    let mut session = StaySession::new(hotel, room_types, date(2024, 3, 10), config);

    // 2 adults: one twin beats two singles
    assert_eq!(session.selected_room_type().unwrap().id, "twin");
    assert_eq!(session.request().rooms_requested, 1);

    session.set_guests_adults(6);
    assert_eq!(session.request().rooms_requested, 3);
    assert!(session.can_submit());

    session.set_guests_adults(7);
    // twin cannot host 7 adults: 4 needed, 3 in stock
    assert_eq!(session.min_rooms_needed(), 4);
    assert_eq!(session.request().rooms_requested, 3);
    assert_eq!(
        session.validate().failure_reason,
        Some(FailureReason::InsufficientRooms {
            min_needed: 4,
            guests_adults: 7
        })
    );

    // loft has no quantity: fallback limit applies
    session.select_room_type("loft").unwrap();
    assert_eq!(session.max_rooms_possible(), 10);
    assert_eq!(session.request().rooms_requested, 7);

    session.set_check_in(date(2024, 3, 11));
    assert_eq!(session.request().check_out, Some(date(2024, 3, 12)));
    session.set_check_out(date(2024, 3, 14));

    let submission = session
        .submit(&GuestInfo::new("Ines Costa", "+351 912 345 678").with_email("ines@example.pt"))
        .unwrap();
    assert_eq!(submission.hotel_id, "hotel-porto-1");
    assert_eq!(submission.room_type_id, "loft");
    assert_eq!(submission.pricing_estimate.nights, 3);
    assert_eq!(submission.pricing_estimate.total, Decimal::from(2520));
    assert_eq!(submission.pricing_estimate.currency, "EUR");
}

#[test]
fn test_build_submission_reports_failure_code() {
    let record: HotelDetailRecord = serde_json::from_str(HOTEL_JSON).unwrap();
    let (hotel, room_types) = record.normalize().unwrap();
    let request = StayRequest::new(date(2024, 3, 10), date(2024, 3, 12), 5, "twin", 5);

    let err = build_submission(
        &hotel,
        &room_types,
        &request,
        &GuestInfo::new("Ines", "123"),
        &ResolverConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExceedsAvailability);
    assert_eq!(err.message, "Only 3 room(s) available for this type.");
    assert_eq!(err.http_status().as_u16(), 422);
}

#[test]
fn test_owner_decision_flow() {
    let status = BookingStatus::default();
    assert!(status.is_pending());

    let rejected = status
        .apply(&BookingDecision::reject("Closed for renovation"))
        .unwrap();
    assert_eq!(rejected, BookingStatus::Rejected);

    let err = rejected.apply(&BookingDecision::Approved).unwrap_err();
    assert_eq!(err.code, ErrorCode::BookingNotPending);
}
