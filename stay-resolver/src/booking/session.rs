//! Stay Session
//!
//! Form state of the hotel detail view for one hotel. Every mutation is
//! followed by [`StaySession::normalize`], so the request always holds a
//! selected room type (when the hotel has any) and a room count inside the
//! type's bounds.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{BookingSubmission, GuestInfo, Hotel, PricingEstimate, RoomType, StayRequest};

use super::payload::build_submission;
use super::validator::{ValidationResult, validate};
use crate::core::ResolverConfig;
use crate::pricing::{RoomBounds, nights_between, preview_estimate, recommend_room_type};
use crate::utils::time::{next_day, today_in};

#[derive(Debug, Clone)]
pub struct StaySession {
    hotel: Hotel,
    room_types: Vec<RoomType>,
    request: StayRequest,
    config: ResolverConfig,
}

impl StaySession {
    /// Start a session: check-in today, check-out tomorrow, default party
    pub fn new(
        hotel: Hotel,
        room_types: Vec<RoomType>,
        today: NaiveDate,
        config: ResolverConfig,
    ) -> Self {
        let request = StayRequest {
            check_in: Some(today),
            check_out: Some(next_day(today)),
            guests_adults: config.default_guests,
            selected_room_type_id: None,
            rooms_requested: 1,
        };
        let mut session = Self {
            hotel,
            room_types,
            request,
            config,
        };
        session.normalize();
        session
    }

    /// Start a session dated from the current day in the hotel's time zone
    pub fn open(hotel: Hotel, room_types: Vec<RoomType>, config: ResolverConfig) -> Self {
        let today = today_in(config.timezone);
        Self::new(hotel, room_types, today, config)
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn room_types(&self) -> &[RoomType] {
        &self.room_types
    }

    pub fn request(&self) -> &StayRequest {
        &self.request
    }

    pub fn selected_room_type(&self) -> Option<&RoomType> {
        let id = self.request.selected_room_type_id.as_deref()?;
        self.room_types.iter().find(|rt| rt.id == id)
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Move check-in; check-out follows to the next day when no night is left
    pub fn set_check_in(&mut self, check_in: NaiveDate) {
        self.request.check_in = Some(check_in);
        let keeps_nights = self
            .request
            .check_out
            .is_some_and(|check_out| nights_between(check_in, check_out) > 0);
        if !keeps_nights {
            self.request.check_out = Some(next_day(check_in));
        }
        self.normalize();
    }

    pub fn set_check_out(&mut self, check_out: NaiveDate) {
        self.request.check_out = Some(check_out);
        self.normalize();
    }

    pub fn clear_dates(&mut self) {
        self.request.check_in = None;
        self.request.check_out = None;
    }

    /// Change the party size; the room count follows the new minimum
    pub fn set_guests_adults(&mut self, guests_adults: i32) {
        self.request.guests_adults = guests_adults;
        self.normalize();
    }

    /// Select a room type by id; only offered types are accepted
    pub fn select_room_type(&mut self, room_type_id: &str) -> AppResult<()> {
        if !self.room_types.iter().any(|rt| rt.id == room_type_id) {
            return Err(AppError::not_found(format!("Room type {room_type_id}")));
        }
        self.request.selected_room_type_id = Some(room_type_id.to_string());
        self.normalize();
        Ok(())
    }

    pub fn set_rooms_requested(&mut self, rooms_requested: i32) {
        self.request.rooms_requested = rooms_requested;
        self.normalize();
    }

    pub fn increment_rooms(&mut self) {
        self.set_rooms_requested(self.request.rooms_requested.saturating_add(1));
    }

    pub fn decrement_rooms(&mut self) {
        self.set_rooms_requested(self.request.rooms_requested.saturating_sub(1));
    }

    /// Re-apply the form invariants
    ///
    /// Without a selection the recommended room type is picked and the room
    /// count seeded with its minimum. The count is then clamped into the
    /// selected type's bounds.
    pub fn normalize(&mut self) {
        if self.selected_room_type().is_none()
            && let Some(rec) = recommend_room_type(&self.room_types, self.request.guests_adults)
        {
            self.request.selected_room_type_id = Some(rec.room_type.id.clone());
            self.request.rooms_requested = rec.min_rooms;
        }

        let bounds = self.bounds();
        let clamped = bounds.clamp(self.request.rooms_requested);
        if clamped != self.request.rooms_requested {
            tracing::debug!(
                requested = self.request.rooms_requested,
                clamped,
                min = bounds.min_needed,
                max = bounds.max_possible,
                "Clamped rooms requested"
            );
            self.request.rooms_requested = clamped;
        }
    }

    // ── Derived views ───────────────────────────────────────────────

    /// Nights of the current dates, 0 while a date is missing
    pub fn nights(&self) -> i64 {
        match (self.request.check_in, self.request.check_out) {
            (Some(check_in), Some(check_out)) => nights_between(check_in, check_out),
            _ => 0,
        }
    }

    fn bounds(&self) -> RoomBounds {
        let (capacity, quantity) = self
            .selected_room_type()
            .map_or((1, None), |rt| (rt.capacity_adults, rt.quantity));
        RoomBounds::from_parts(
            capacity,
            quantity,
            self.request.guests_adults,
            self.config.fallback_max_rooms,
        )
    }

    pub fn min_rooms_needed(&self) -> i32 {
        self.bounds().min_needed
    }

    pub fn max_rooms_possible(&self) -> i32 {
        self.bounds().max_possible
    }

    /// Selected room type's price, else the hotel's starting price, else 0
    pub fn price_per_night(&self) -> Decimal {
        self.selected_room_type()
            .map(|rt| rt.price_per_night)
            .or(self.hotel.starting_price_per_night)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn currency(&self) -> &str {
        self.hotel.currency_or(&self.config.default_currency)
    }

    /// Estimate shown while editing
    pub fn preview(&self) -> PricingEstimate {
        preview_estimate(
            self.price_per_night(),
            self.nights(),
            self.request.rooms_requested,
            self.currency(),
        )
    }

    pub fn validate(&self) -> ValidationResult {
        validate(
            &self.request,
            &self.room_types,
            self.config.fallback_max_rooms,
        )
    }

    pub fn can_submit(&self) -> bool {
        self.validate().valid
    }

    /// Build the booking submission for the current form state
    pub fn submit(&self, guest_info: &GuestInfo) -> AppResult<BookingSubmission> {
        build_submission(
            &self.hotel,
            &self.room_types,
            &self.request,
            guest_info,
            &self.config,
        )
    }
}
