//! HTTP status code mapping for error codes
//!
//! Used by the backend-for-frontend routes when relaying a failure.

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound => StatusCode::NOT_FOUND,

            Self::BookingNotPending => StatusCode::CONFLICT,

            // Well-formed but unsatisfiable against inventory
            Self::InsufficientRooms | Self::ExceedsAvailability => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            Self::Unknown | Self::InternalError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
