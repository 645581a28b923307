//! Quantity Bounds
//!
//! Keeps the requested room count inside what the party needs and what the
//! room type has.

use shared::models::RoomType;

use super::capacity::min_rooms_needed;

/// Room limit used when a room type has no usable quantity
pub const DEFAULT_FALLBACK_MAX_ROOMS: i32 = 10;

/// Most rooms of a type that can be requested
///
/// The configured quantity when positive. Otherwise the fallback, raised to
/// `min_needed` so a missing quantity never makes the party unbookable.
pub fn max_rooms_possible(quantity: Option<i32>, min_needed: i32, fallback: i32) -> i32 {
    match quantity {
        Some(q) if q > 0 => q,
        _ => fallback.max(min_needed).max(1),
    }
}

/// `min(max(requested, min_needed), max_possible)`
///
/// Too few rooms are raised, too many are capped; nothing is rejected here.
/// When inventory is below the minimum (`min_needed > max_possible`) the
/// result is `max_possible` and the request validator reports it.
pub fn clamp_rooms_requested(requested: i32, min_needed: i32, max_possible: i32) -> i32 {
    requested.max(min_needed).min(max_possible)
}

/// Room count bounds for one room type and party size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomBounds {
    pub min_needed: i32,
    pub max_possible: i32,
}

impl RoomBounds {
    /// Bounds for a party in the given room type
    pub fn for_room_type(room_type: &RoomType, guests_adults: i32, fallback: i32) -> Self {
        Self::from_parts(
            room_type.capacity_adults,
            room_type.quantity,
            guests_adults,
            fallback,
        )
    }

    /// Bounds from raw capacity and quantity (no room type selected yet uses capacity 1)
    pub fn from_parts(
        capacity_adults: i32,
        quantity: Option<i32>,
        guests_adults: i32,
        fallback: i32,
    ) -> Self {
        let min_needed = min_rooms_needed(guests_adults, capacity_adults);
        Self {
            min_needed,
            max_possible: max_rooms_possible(quantity, min_needed, fallback),
        }
    }

    pub fn clamp(&self, requested: i32) -> i32 {
        clamp_rooms_requested(requested, self.min_needed, self.max_possible)
    }

    pub fn contains(&self, requested: i32) -> bool {
        requested >= self.min_needed && requested <= self.max_possible
    }

    /// Whether the room type can host the party at all
    pub fn is_satisfiable(&self) -> bool {
        self.min_needed <= self.max_possible
    }
}
