//! Stay Request Validator
//!
//! Single pass over a [`StayRequest`], checks run in a fixed order and the
//! first failure wins:
//!
//! 1. both dates present
//! 2. at least one night
//! 3. at least one adult
//! 4. a room type selected from the offered set
//! 5. enough rooms for the party
//! 6. no more rooms than the type has
//!
//! Purely local: no I/O, no state. The caller re-runs it on every change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{RoomType, StayRequest};

use crate::pricing::{RoomBounds, nights_between};

/// Why a stay request cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    MissingDates,
    InvalidDateRange,
    InvalidGuestCount,
    NoRoomTypeSelected,
    #[serde(rename_all = "camelCase")]
    InsufficientRooms { min_needed: i32, guests_adults: i32 },
    #[serde(rename_all = "camelCase")]
    ExceedsAvailability { max_possible: i32 },
}

impl FailureReason {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingDates => ErrorCode::MissingDates,
            Self::InvalidDateRange => ErrorCode::InvalidDateRange,
            Self::InvalidGuestCount => ErrorCode::InvalidGuestCount,
            Self::NoRoomTypeSelected => ErrorCode::NoRoomTypeSelected,
            Self::InsufficientRooms { .. } => ErrorCode::InsufficientRooms,
            Self::ExceedsAvailability { .. } => ErrorCode::ExceedsAvailability,
        }
    }

    /// Inline message shown to the guest
    pub fn message(&self) -> String {
        match self {
            Self::InsufficientRooms {
                min_needed,
                guests_adults,
            } => format!("You need at least {min_needed} room(s) for {guests_adults} adults."),
            Self::ExceedsAvailability { max_possible } => {
                format!("Only {max_possible} room(s) available for this type.")
            }
            other => other.code().message().to_string(),
        }
    }

    pub fn to_error(&self) -> AppError {
        let err = AppError::with_message(self.code(), self.message());
        match *self {
            Self::InsufficientRooms {
                min_needed,
                guests_adults,
            } => err
                .with_detail("minNeeded", min_needed)
                .with_detail("guestsAdults", guests_adults),
            Self::ExceedsAvailability { max_possible } => {
                err.with_detail("maxPossible", max_possible)
            }
            _ => err,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<FailureReason> for AppError {
    fn from(reason: FailureReason) -> Self {
        reason.to_error()
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub failure_reason: Option<FailureReason>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            valid: true,
            failure_reason: None,
        }
    }

    pub fn fail(reason: FailureReason) -> Self {
        Self {
            valid: false,
            failure_reason: Some(reason),
        }
    }

    pub fn into_result(self) -> Result<(), FailureReason> {
        match self.failure_reason {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }
}

/// A request that passed every check, with the values derived on the way
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedStay<'a> {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guests_adults: i32,
    pub room_type: &'a RoomType,
    pub rooms_requested: i32,
    pub bounds: RoomBounds,
}

/// Run every check and keep what was derived
pub fn resolve<'a>(
    request: &StayRequest,
    offered: &'a [RoomType],
    fallback_max_rooms: i32,
) -> Result<ValidatedStay<'a>, FailureReason> {
    let (Some(check_in), Some(check_out)) = (request.check_in, request.check_out) else {
        return Err(FailureReason::MissingDates);
    };

    let nights = nights_between(check_in, check_out);
    if nights <= 0 {
        return Err(FailureReason::InvalidDateRange);
    }

    let guests_adults = request.guests_adults;
    if guests_adults < 1 {
        return Err(FailureReason::InvalidGuestCount);
    }

    let room_type = request
        .selected_room_type_id
        .as_deref()
        .and_then(|id| offered.iter().find(|rt| rt.id == id))
        .ok_or(FailureReason::NoRoomTypeSelected)?;

    let bounds = RoomBounds::for_room_type(room_type, guests_adults, fallback_max_rooms);
    let rooms_requested = request.rooms_requested;
    if rooms_requested < bounds.min_needed {
        return Err(FailureReason::InsufficientRooms {
            min_needed: bounds.min_needed,
            guests_adults,
        });
    }
    if rooms_requested > bounds.max_possible {
        return Err(FailureReason::ExceedsAvailability {
            max_possible: bounds.max_possible,
        });
    }

    Ok(ValidatedStay {
        check_in,
        check_out,
        nights,
        guests_adults,
        room_type,
        rooms_requested,
        bounds,
    })
}

/// Pass/fail gate over a stay request
pub fn validate(
    request: &StayRequest,
    offered: &[RoomType],
    fallback_max_rooms: i32,
) -> ValidationResult {
    match resolve(request, offered, fallback_max_rooms) {
        Ok(_) => ValidationResult::pass(),
        Err(reason) => {
            tracing::debug!(?reason, "Stay request rejected");
            ValidationResult::fail(reason)
        }
    }
}
