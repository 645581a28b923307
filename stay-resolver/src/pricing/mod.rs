//! Stay Pricing Module
//!
//! Pure arithmetic behind the hotel detail view: nights, rooms needed,
//! room count bounds and the price estimate. No I/O, no shared state.

pub mod capacity;
pub mod estimator;
pub mod nights;
pub mod quantity;

pub use capacity::*;
pub use estimator::*;
pub use nights::*;
pub use quantity::*;
