//! Pricing Estimator
//!
//! Uses rust_decimal for precise calculations; currency is carried through
//! untouched.

use rust_decimal::Decimal;
use shared::models::PricingEstimate;
use shared::models::money::round_money;

/// `price × max(nights, 1) × max(rooms, 1)`
///
/// Nights and rooms are floored at 1 so the guest never sees a 0 total while
/// still editing the form. Not used for the submitted estimate.
pub fn estimate_total(price_per_night: Decimal, nights: i64, rooms_requested: i32) -> Decimal {
    multiply(price_per_night, nights.max(1), rooms_requested.max(1))
}

/// Estimate shown next to the form while the guest edits it
pub fn preview_estimate(
    price_per_night: Decimal,
    nights: i64,
    rooms_requested: i32,
    currency: impl Into<String>,
) -> PricingEstimate {
    PricingEstimate {
        price_per_night,
        nights: nights.max(0),
        rooms_requested,
        total: estimate_total(price_per_night, nights, rooms_requested),
        currency: currency.into(),
    }
}

/// Estimate attached to a submitted booking: exact product, no flooring
///
/// Only built from a request that passed validation.
pub fn submission_estimate(
    price_per_night: Decimal,
    nights: i64,
    rooms_requested: i32,
    currency: impl Into<String>,
) -> PricingEstimate {
    PricingEstimate {
        price_per_night,
        nights,
        rooms_requested,
        total: multiply(price_per_night, nights.max(0), rooms_requested.max(0)),
        currency: currency.into(),
    }
}

fn multiply(price_per_night: Decimal, nights: i64, rooms: i32) -> Decimal {
    let total = price_per_night
        .checked_mul(Decimal::from(nights))
        .and_then(|t| t.checked_mul(Decimal::from(rooms)))
        .unwrap_or_else(|| {
            tracing::warn!(%price_per_night, nights, rooms, "Price estimate overflowed");
            Decimal::MAX
        });
    round_money(total)
}
