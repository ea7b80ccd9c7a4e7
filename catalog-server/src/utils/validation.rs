//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! vendor forms.

use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: discount titles, menu items, packs
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Referenced extras per record
pub const MAX_EXTRAS: usize = 50;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::field(field, format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

/// Validate the extras reference list
pub fn validate_extras(extras: &[String]) -> Result<(), AppError> {
    if extras.len() > MAX_EXTRAS {
        return Err(AppError::field(
            "extras",
            format!("too many extras ({}, max {MAX_EXTRAS})", extras.len()),
        ));
    }
    if extras.iter().any(|id| id.trim().is_empty()) {
        return Err(AppError::field("extras", "extras must not contain empty ids"));
    }
    Ok(())
}
