//! Stay Resolver - room, date and price resolution for hotel bookings
//!
//! # Overview
//!
//! Given a stay request (dates, adult count, candidate room types) the
//! resolver works out how many rooms the party needs, keeps the requested
//! room count inside inventory, estimates the price and validates the request
//! before it goes to the booking API.
//!
//! - **Pricing** (`pricing`): nights, rooms needed, quantity bounds, estimate
//! - **Booking** (`booking`): request validator, guest info, stay session, payload
//! - **Core** (`core`): configuration
//! - **Utils** (`utils`): logging, calendar and text helpers
//!
//! # Module layout
//!
//! ```text
//! stay-resolver/src/
//! ├── core/          # ResolverConfig
//! ├── pricing/       # nights, capacity, quantity, estimator
//! ├── booking/       # validator, guest, session, payload
//! └── utils/         # logger, time, validation
//! ```
//!
//! Everything here is synchronous and side-effect free apart from logging.

pub mod booking;
pub mod core;
pub mod pricing;
pub mod utils;

pub use booking::{
    FailureReason, StaySession, ValidationResult, build_submission, validate, validate_guest_info,
};
pub use core::ResolverConfig;
pub use pricing::{
    clamp_rooms_requested, estimate_total, max_rooms_possible, min_rooms_needed, nights_between,
    recommend_room_type,
};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};
