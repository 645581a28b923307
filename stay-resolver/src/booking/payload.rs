//! Booking Payload Builder
//!
//! Turns a validated stay plus guest details into the request body for the
//! booking API. Persistence, inventory locking and owner approval happen
//! behind that API.

use shared::error::AppResult;
use shared::models::{BookingSubmission, GuestInfo, Hotel, RoomType, StayRequest};

use super::guest::validate_guest_info;
use super::validator::resolve;
use crate::core::ResolverConfig;
use crate::pricing::submission_estimate;

/// Build the booking submission for a stay request
///
/// The stay is validated first, then the guest info. The attached estimate
/// uses the exact nights and rooms (no interactive flooring).
pub fn build_submission(
    hotel: &Hotel,
    room_types: &[RoomType],
    request: &StayRequest,
    guest_info: &GuestInfo,
    config: &ResolverConfig,
) -> AppResult<BookingSubmission> {
    let stay = resolve(request, room_types, config.fallback_max_rooms)?;
    let guest_info = validate_guest_info(guest_info)?;

    let pricing_estimate = submission_estimate(
        stay.room_type.price_per_night,
        stay.nights,
        stay.rooms_requested,
        hotel.currency_or(&config.default_currency),
    );

    tracing::info!(
        hotel = %hotel.id,
        room_type = %stay.room_type.id,
        nights = stay.nights,
        rooms = stay.rooms_requested,
        total = %pricing_estimate.total,
        currency = %pricing_estimate.currency,
        "Booking submission built"
    );

    Ok(BookingSubmission {
        hotel_id: hotel.id.clone(),
        room_type_id: stay.room_type.id.clone(),
        check_in: stay.check_in,
        check_out: stay.check_out,
        guests_adults: stay.guests_adults,
        rooms_requested: stay.rooms_requested,
        guest_info,
        pricing_estimate,
    })
}
