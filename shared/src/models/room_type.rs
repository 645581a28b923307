//! Room Type Model

use super::money::non_negative_price;
use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room type as returned by the hotel API
///
/// Every field is optional; the API omits fields the owner never filled in.
/// Convert with [`RoomType::try_from`] before handing it to the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeRecord {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub capacity_adults: Option<i64>,
    /// Total rooms of this type
    pub quantity: Option<i64>,
    pub price_per_night: Option<f64>,
}

/// Room type entity (normalized)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: String,
    pub title: String,
    /// Adults one room holds, always >= 1
    pub capacity_adults: i32,
    /// Configured inventory; `None` when missing or non-positive upstream
    pub quantity: Option<i32>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_night: Decimal,
}

impl RoomType {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        capacity_adults: i32,
        quantity: Option<i32>,
        price_per_night: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            capacity_adults: capacity_adults.max(1),
            quantity: quantity.filter(|q| *q > 0),
            price_per_night: price_per_night.max(Decimal::ZERO),
        }
    }
}

impl TryFrom<RoomTypeRecord> for RoomType {
    type Error = AppError;

    fn try_from(record: RoomTypeRecord) -> AppResult<Self> {
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::RequiredField, "Room type id is missing")
                    .with_detail("field", "id")
            })?;

        let capacity_adults = match record.capacity_adults {
            Some(c) if c >= 1 => c.min(i32::MAX as i64) as i32,
            other => {
                tracing::warn!(room_type = %id, capacity = ?other, "Room type capacity missing or invalid, assuming 1");
                1
            }
        };

        let quantity = record
            .quantity
            .filter(|q| *q > 0)
            .map(|q| q.min(i32::MAX as i64) as i32);

        Ok(Self {
            title: record.title.unwrap_or_default(),
            capacity_adults,
            quantity,
            price_per_night: non_negative_price(record.price_per_night),
            id,
        })
    }
}

/// Normalize API room types, dropping records that cannot be offered
pub fn normalize_room_types(records: Vec<RoomTypeRecord>) -> Vec<RoomType> {
    records
        .into_iter()
        .filter_map(|record| match RoomType::try_from(record) {
            Ok(room_type) => Some(room_type),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping room type record");
                None
            }
        })
        .collect()
}
