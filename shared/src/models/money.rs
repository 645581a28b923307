//! Money helpers
//!
//! All monetary values are `Decimal`. The external API speaks JSON numbers,
//! so conversion happens once at the boundary.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Default ISO currency when a hotel carries none
pub const DEFAULT_CURRENCY: &str = "USD";

/// Convert f64 to Decimal, NaN and infinities become zero
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round a monetary value to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a raw API price into a non-negative Decimal
pub fn non_negative_price(value: Option<f64>) -> Decimal {
    value
        .map(to_decimal)
        .map(round_money)
        .filter(|p| !p.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}
