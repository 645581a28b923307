//! Booking Request Model

use super::guest::GuestInfo;
use super::stay::PricingEstimate;
use crate::error::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated booking request sent to the booking API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub hotel_id: String,
    pub room_type_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests_adults: i32,
    pub rooms_requested: i32,
    pub guest_info: GuestInfo,
    pub pricing_estimate: PricingEstimate,
}

/// Booking request status (owner approval workflow)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Apply an owner decision
    ///
    /// Only pending requests can be decided, and a rejection needs a reason.
    pub fn apply(self, decision: &BookingDecision) -> AppResult<BookingStatus> {
        if !self.is_pending() {
            return Err(AppError::new(ErrorCode::BookingNotPending)
                .with_detail("status", self.as_str()));
        }
        match decision {
            BookingDecision::Approved => Ok(Self::Approved),
            BookingDecision::Rejected { reason } if reason.trim().is_empty() => {
                Err(AppError::new(ErrorCode::RejectionReasonRequired))
            }
            BookingDecision::Rejected { .. } => Ok(Self::Rejected),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner decision payload
///
/// Wire form: `{"decision":"approved"}` or `{"decision":"rejected","reason":"..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum BookingDecision {
    Approved,
    Rejected { reason: String },
}

impl BookingDecision {
    pub fn reject(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into().trim().to_string(),
        }
    }
}
