//! Guest Info Model

use serde::{Deserialize, Serialize};

/// Contact details collected in the confirm step
///
/// Form input arrives with empty strings for untouched fields; the guest info
/// validator trims everything and turns blank optionals into `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    pub full_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free text such as "around 14:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GuestInfo {
    pub fn new(full_name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_arrival_time(mut self, arrival_time: impl Into<String>) -> Self {
        self.arrival_time = Some(arrival_time.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
