//! Stay Request Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Guest's proposed stay prior to submission
///
/// Built fresh on every form change; dates are optional because the guest
/// may still be picking them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests_adults: i32,
    pub selected_room_type_id: Option<String>,
    pub rooms_requested: i32,
}

impl StayRequest {
    pub fn new(
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests_adults: i32,
        selected_room_type_id: impl Into<String>,
        rooms_requested: i32,
    ) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
            guests_adults,
            selected_room_type_id: Some(selected_room_type_id.into()),
            rooms_requested,
        }
    }
}

/// Price estimate shown to the guest and sent with the booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEstimate {
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_night: Decimal,
    pub nights: i64,
    pub rooms_requested: i32,
    /// price_per_night × nights × rooms_requested
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub currency: String,
}
