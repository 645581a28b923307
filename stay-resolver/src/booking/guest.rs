//! Guest Info Validator
//!
//! Completeness check over the free-text contact fields, separate from the
//! stay request validator. Name and phone are required, email is optional
//! but must look like an address when given.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::GuestInfo;
use validator::ValidateEmail;

use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, trimmed_optional,
    validate_max_len,
};

/// Validate guest contact details and return a normalized copy
///
/// Fields are trimmed and blank optionals become `None`.
pub fn validate_guest_info(info: &GuestInfo) -> AppResult<GuestInfo> {
    let full_name = info.full_name.trim();
    if full_name.is_empty() {
        return Err(AppError::new(ErrorCode::GuestNameRequired).with_detail("field", "fullName"));
    }
    validate_max_len(full_name, "fullName", MAX_NAME_LEN)?;

    let phone = info.phone.trim();
    if phone.is_empty() {
        return Err(AppError::new(ErrorCode::GuestPhoneRequired).with_detail("field", "phone"));
    }
    validate_max_len(phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let email = trimmed_optional(info.email.as_deref());
    if let Some(email) = &email {
        validate_max_len(email, "email", MAX_EMAIL_LEN)?;
        if !is_valid_email(email) {
            return Err(AppError::new(ErrorCode::GuestEmailInvalid).with_detail("field", "email"));
        }
    }

    let arrival_time = trimmed_optional(info.arrival_time.as_deref());
    if let Some(arrival_time) = &arrival_time {
        validate_max_len(arrival_time, "arrivalTime", MAX_SHORT_TEXT_LEN)?;
    }

    let notes = trimmed_optional(info.notes.as_deref());
    if let Some(notes) = &notes {
        validate_max_len(notes, "notes", MAX_NOTE_LEN)?;
    }

    Ok(GuestInfo {
        full_name: full_name.to_string(),
        phone: phone.to_string(),
        email,
        arrival_time,
        notes,
    })
}

/// HTML5-style address check plus a dot in the domain (`a@localhost` is refused)
fn is_valid_email(email: &str) -> bool {
    email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
}
