//! Unified error codes for the stay resolver
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Stay errors (dates, guest count)
//! - 2xxx: Room errors (room type selection, inventory)
//! - 3xxx: Guest info errors
//! - 4xxx: Booking lifecycle errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Stay ====================
    /// Check-in or check-out date missing
    MissingDates = 1001,
    /// Check-out is not after check-in
    InvalidDateRange = 1002,
    /// Fewer than one adult
    InvalidGuestCount = 1003,

    // ==================== 2xxx: Room ====================
    /// No room type selected, or the selection is not offered
    NoRoomTypeSelected = 2001,
    /// Not enough rooms requested for the party
    InsufficientRooms = 2002,
    /// More rooms requested than the room type has
    ExceedsAvailability = 2003,

    // ==================== 3xxx: Guest info ====================
    /// Guest full name missing
    GuestNameRequired = 3001,
    /// Guest phone missing
    GuestPhoneRequired = 3002,
    /// Guest email present but malformed
    GuestEmailInvalid = 3003,

    // ==================== 4xxx: Booking ====================
    /// Booking request already decided
    BookingNotPending = 4001,
    /// Rejection without a reason
    RejectionReasonRequired = 4002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default user-facing message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Stay
            ErrorCode::MissingDates => "Please select check-in and check-out dates.",
            ErrorCode::InvalidDateRange => "Check-out must be after check-in.",
            ErrorCode::InvalidGuestCount => "Guests must be at least 1 adult.",

            // Room
            ErrorCode::NoRoomTypeSelected => "Please select a room type.",
            ErrorCode::InsufficientRooms => "Not enough rooms for the number of adults.",
            ErrorCode::ExceedsAvailability => "Not enough rooms available for this type.",

            // Guest info
            ErrorCode::GuestNameRequired => "Full name is required.",
            ErrorCode::GuestPhoneRequired => "Phone number is required.",
            ErrorCode::GuestEmailInvalid => "Please enter a valid email address.",

            // Booking
            ErrorCode::BookingNotPending => "Booking request has already been decided",
            ErrorCode::RejectionReasonRequired => "A reason is required to reject a booking",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Stay
            1001 => Ok(ErrorCode::MissingDates),
            1002 => Ok(ErrorCode::InvalidDateRange),
            1003 => Ok(ErrorCode::InvalidGuestCount),

            // Room
            2001 => Ok(ErrorCode::NoRoomTypeSelected),
            2002 => Ok(ErrorCode::InsufficientRooms),
            2003 => Ok(ErrorCode::ExceedsAvailability),

            // Guest info
            3001 => Ok(ErrorCode::GuestNameRequired),
            3002 => Ok(ErrorCode::GuestPhoneRequired),
            3003 => Ok(ErrorCode::GuestEmailInvalid),

            // Booking
            4001 => Ok(ErrorCode::BookingNotPending),
            4002 => Ok(ErrorCode::RejectionReasonRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
