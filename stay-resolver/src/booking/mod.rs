//! Booking Module
//!
//! Request validation, guest details, the interactive stay session and the
//! submission payload for the booking API.

pub mod guest;
pub mod payload;
pub mod session;
pub mod validator;

pub use guest::validate_guest_info;
pub use payload::build_submission;
pub use session::StaySession;
pub use validator::{FailureReason, ValidatedStay, ValidationResult, resolve, validate};
