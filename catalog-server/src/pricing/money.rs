//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for storage/serialization.

use rust_decimal::prelude::*;
use shared::error::{AppError, ErrorCode};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per catalog record
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
///
/// `None` for NaN, infinities and magnitudes beyond the `Decimal` range
/// (about 7.9e28); callers decide how to handle those.
#[inline]
pub fn try_to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
///
/// `MidpointAwayFromZero` equals half-up for the non-negative amounts handled here.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a monetary value to cents
#[inline]
///
/// Values outside the `Decimal` range have no cents to round and are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    try_to_decimal(value).map(to_f64).unwrap_or(value)
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::field(
            field,
            format!("{} must be a finite number, got {}", field, value),
        ));
    }
    Ok(())
}

/// Validate an already-parsed price
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::field(
            field,
            format!("{} must be non-negative, got {}", field, value),
        ));
    }
    if value > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "{} exceeds maximum allowed ({}), got {}",
                field, MAX_PRICE, value
            ),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Parse a numeric form field
///
/// - surrounding whitespace is ignored
/// - empty input means "not entered yet" and yields `None`
/// - `,` is accepted as decimal separator
/// - non-numeric, non-finite and negative values are rejected
pub fn parse_amount(raw: &str, field: &str) -> Result<Option<f64>, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{} is not a number: {:?}", field, trimmed),
        )
        .with_detail("field", field)
        .with_detail("value", trimmed)
    })?;

    validate_price(value, field)?;
    Ok(Some(value))
}
