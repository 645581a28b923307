//! Data models
//!
//! Shared between the resolver, the backend-for-frontend routes and the
//! external booking API (camelCase JSON).
//! `*Record` types mirror the API's loose shape; everything else is normalized.

pub mod booking;
pub mod guest;
pub mod hotel;
pub mod money;
pub mod room_type;
pub mod stay;

// Re-exports
pub use booking::*;
pub use guest::*;
pub use hotel::*;
pub use room_type::*;
pub use stay::*;
