//! Shared types for the stay resolver
//!
//! Error codes and the API response envelope, plus the hotel, room type,
//! stay and booking models exchanged with the booking API.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
