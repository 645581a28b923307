//! Room Capacity Resolver
//!
//! How many rooms of a type a party needs, and which type to offer first.

use rust_decimal::Decimal;
use shared::models::RoomType;

/// Minimum rooms needed so every adult has a bed
///
/// `ceil(guests / capacity)`. Non-positive inputs are treated as 1, so
/// malformed capacity data never divides by zero.
pub fn min_rooms_needed(guests_adults: i32, capacity_adults: i32) -> i32 {
    let guests = guests_adults.max(1) as u32;
    let capacity = capacity_adults.max(1) as u32;
    guests.div_ceil(capacity) as i32
}

/// Ranked candidate for the default room type selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation<'a> {
    pub room_type: &'a RoomType,
    /// Rooms of this type the party needs
    pub min_rooms: i32,
    /// min_rooms × price_per_night
    pub total_per_night: Decimal,
}

impl<'a> Recommendation<'a> {
    fn score(room_type: &'a RoomType, guests_adults: i32) -> Self {
        let min_rooms = min_rooms_needed(guests_adults, room_type.capacity_adults);
        Self {
            room_type,
            min_rooms,
            total_per_night: room_type
                .price_per_night
                .checked_mul(Decimal::from(min_rooms))
                .unwrap_or(Decimal::MAX),
        }
    }
}

/// Pick the default room type for a party
///
/// Fewest rooms wins; among equals, the cheapest total per night. Ties keep
/// the first listed room type. `None` when the hotel has no room types.
pub fn recommend_room_type(room_types: &[RoomType], guests_adults: i32) -> Option<Recommendation<'_>> {
    let best = room_types
        .iter()
        .map(|rt| Recommendation::score(rt, guests_adults))
        .min_by(|a, b| {
            a.min_rooms
                .cmp(&b.min_rooms)
                .then_with(|| a.total_per_night.cmp(&b.total_per_night))
        });

    if let Some(rec) = &best {
        tracing::debug!(
            room_type = %rec.room_type.id,
            min_rooms = rec.min_rooms,
            total_per_night = %rec.total_per_night,
            "Recommended room type"
        );
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, capacity: i32, price: i64) -> RoomType {
        RoomType::new(id, id.to_uppercase(), capacity, Some(5), Decimal::from(price))
    }

    #[test]
    fn test_min_rooms_ceiling() {
        assert_eq!(min_rooms_needed(5, 2), 3);
        assert_eq!(min_rooms_needed(4, 2), 2);
        assert_eq!(min_rooms_needed(1, 4), 1);
        assert_eq!(min_rooms_needed(7, 7), 1);
    }

    #[test]
    fn test_min_rooms_malformed_inputs() {
        // capacity 0 or negative behaves as 1
        assert_eq!(min_rooms_needed(3, 0), 3);
        assert_eq!(min_rooms_needed(3, -2), 3);
        // no guests still needs a room
        assert_eq!(min_rooms_needed(0, 2), 1);
        assert_eq!(min_rooms_needed(-4, 2), 1);
    }

    #[test]
    fn test_min_rooms_matches_ceiling_for_range() {
        for guests in 1..=30 {
            for capacity in 1..=8 {
                let expected = (guests as f64 / capacity as f64).ceil() as i32;
                assert_eq!(min_rooms_needed(guests, capacity), expected);
            }
        }
    }

    #[test]
    fn test_min_rooms_no_overflow() {
        assert_eq!(min_rooms_needed(i32::MAX, 1), i32::MAX);
        assert_eq!(min_rooms_needed(i32::MAX, 2), 1_073_741_824);
    }

    #[test]
    fn test_recommend_empty_list() {
        assert!(recommend_room_type(&[], 2).is_none());
    }

    #[test]
    fn test_recommend_prefers_fewer_rooms_over_price() {
        // 4 adults: twin needs 2 rooms (2 × 50 = 100), family needs 1 (150)
        let room_types = vec![room("twin", 2, 50), room("family", 4, 150)];
        let rec = recommend_room_type(&room_types, 4).unwrap();

        assert_eq!(rec.room_type.id, "family");
        assert_eq!(rec.min_rooms, 1);
        assert_eq!(rec.total_per_night, Decimal::from(150));
    }

    #[test]
    fn test_recommend_cheapest_among_equal_rooms() {
        let room_types = vec![room("suite", 2, 300), room("double", 2, 120)];
        let rec = recommend_room_type(&room_types, 2).unwrap();
        assert_eq!(rec.room_type.id, "double");
    }

    #[test]
    fn test_recommend_tie_keeps_first_listed() {
        let room_types = vec![room("a", 2, 100), room("b", 2, 100), room("c", 2, 100)];
        let rec = recommend_room_type(&room_types, 2).unwrap();
        assert_eq!(rec.room_type.id, "a");
    }

    #[test]
    fn test_recommend_single_guest_takes_cheapest() {
        let room_types = vec![room("family", 4, 150), room("single", 1, 40), room("twin", 2, 60)];
        let rec = recommend_room_type(&room_types, 1).unwrap();
        assert_eq!(rec.room_type.id, "single");
        assert_eq!(rec.total_per_night, Decimal::from(40));
    }
}
