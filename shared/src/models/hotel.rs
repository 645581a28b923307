//! Hotel Model

use super::money::non_negative_price;
use super::room_type::{RoomType, RoomTypeRecord, normalize_room_types};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hotel as returned by the hotel API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub starting_price_per_night: Option<f64>,
    pub currency: Option<String>,
}

/// Hotel detail response: the hotel document plus its room types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetailRecord {
    pub hotel: Option<HotelRecord>,
    #[serde(default)]
    pub room_types: Vec<RoomTypeRecord>,
}

/// Hotel entity (normalized)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// Shown when no room type is selected
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub starting_price_per_night: Option<Decimal>,
    pub currency: Option<String>,
}

impl Hotel {
    /// Hotel currency, or the given default when the hotel carries none
    pub fn currency_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.currency.as_deref().unwrap_or(default)
    }

    /// "City, Country" label
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

impl From<HotelRecord> for Hotel {
    fn from(record: HotelRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            city: record.city.unwrap_or_default(),
            country: record.country.unwrap_or_default(),
            starting_price_per_night: record
                .starting_price_per_night
                .map(|p| non_negative_price(Some(p))),
            currency: record
                .currency
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty()),
        }
    }
}

impl HotelDetailRecord {
    /// Normalize the detail response; `None` when the hotel document is absent
    pub fn normalize(self) -> Option<(Hotel, Vec<RoomType>)> {
        let hotel = Hotel::from(self.hotel?);
        Some((hotel, normalize_room_types(self.room_types)))
    }
}
