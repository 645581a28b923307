//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Stay errors
/// - 2xxx: Room errors
/// - 3xxx: Guest info errors
/// - 4xxx: Booking errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Stay errors (1xxx)
    Stay,
    /// Room errors (2xxx)
    Room,
    /// Guest info errors (3xxx)
    Guest,
    /// Booking errors (4xxx)
    Booking,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Stay,
            2000..3000 => Self::Room,
            3000..4000 => Self::Guest,
            4000..5000 => Self::Booking,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Stay => "stay",
            Self::Room => "room",
            Self::Guest => "guest",
            Self::Booking => "booking",
            Self::System => "system",
        }
    }

    /// Whether the guest can fix this by editing the form
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Stay | Self::Room | Self::Guest)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Stay);
        assert_eq!(ErrorCategory::from_code(2003), ErrorCategory::Room);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Guest);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Booking);
        assert_eq!(ErrorCategory::from_code(7000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::MissingDates.category(), ErrorCategory::Stay);
        assert_eq!(ErrorCode::ExceedsAvailability.category(), ErrorCategory::Room);
        assert_eq!(ErrorCode::GuestNameRequired.category(), ErrorCategory::Guest);
        assert_eq!(ErrorCode::BookingNotPending.category(), ErrorCategory::Booking);
        assert_eq!(ErrorCode::ConfigError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_user_correctable() {
        assert!(ErrorCategory::Stay.is_user_correctable());
        assert!(ErrorCategory::Guest.is_user_correctable());
        assert!(!ErrorCategory::Booking.is_user_correctable());
        assert!(!ErrorCategory::System.is_user_correctable());
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Room).unwrap();
        assert_eq!(json, "\"room\"");

        let category: ErrorCategory = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(category, ErrorCategory::Guest);
    }
}
