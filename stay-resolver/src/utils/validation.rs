//! Input validation helpers
//!
//! Centralized text length constants for guest-entered free text.

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Person names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, arrival time
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Notes to the hotel
pub const MAX_NOTE_LEN: usize = 500;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a string is within the length limit (in characters).
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::out_of_range(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Trim an optional string, mapping blank input to `None`.
pub fn trimmed_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
