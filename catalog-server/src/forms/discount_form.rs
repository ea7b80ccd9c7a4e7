//! Discount form adapter
//!
//! Used by both the create and the edit flow with the same fallback policy.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiscountInput, DiscountPayload, DiscountResult, DiscountType};

use crate::pricing::money::parse_amount;
use crate::pricing::{FallbackPolicy, compute_with, is_submittable};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_extras, validate_optional_text, validate_required_text,
};

/// Raw discount form as sent by the vendor UI
///
/// Numeric fields arrive as strings exactly as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub original_price: String,
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: String,
    #[serde(default)]
    pub extras: Vec<String>,
    /// Unix millis
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Parsed discount form
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountDraft {
    pub title: String,
    pub description: Option<String>,
    pub original_price: Option<f64>,
    pub discount_type: DiscountType,
    pub discount_value: Option<f64>,
    pub extras: Vec<String>,
    pub expires_at: Option<i64>,
}

impl DiscountDraft {
    /// Parse and validate the raw form
    pub fn parse(form: DiscountForm) -> AppResult<Self> {
        validate_required_text(&form.title, "title", MAX_NAME_LEN)?;
        validate_optional_text(&form.description, "description", MAX_NOTE_LEN)?;
        validate_extras(&form.extras)?;

        Ok(Self {
            title: form.title.trim().to_string(),
            description: form
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            original_price: parse_amount(&form.original_price, "original_price")?,
            discount_type: form.discount_type,
            discount_value: parse_amount(&form.discount_value, "discount_value")?,
            extras: form.extras,
            expires_at: form.expires_at,
        })
    }

    /// Pricing input; fields not entered yet count as zero
    pub fn input(&self) -> DiscountInput {
        DiscountInput::new(
            self.original_price.unwrap_or_default(),
            self.discount_type,
            self.discount_value.unwrap_or_default(),
        )
    }

    /// Live preview shown while the vendor types
    pub fn preview(&self, policy: FallbackPolicy) -> DiscountResult {
        compute_with(&self.input(), policy)
    }

    /// Build the catalog payload, blocking submission while the form is
    /// incomplete, carries a pricing warning, or is already expired.
    pub fn into_payload(self, policy: FallbackPolicy, now: i64) -> AppResult<DiscountPayload> {
        let input = self.input();
        let result = compute_with(&input, policy);

        if let Some(warning) = result.warning {
            return Err(
                AppError::with_message(ErrorCode::DiscountInvalid, warning.to_string())
                    .with_detail("warning", format!("{:?}", warning)),
            );
        }

        if !is_submittable(&input, &result) {
            let field = if input.original_price > 0.0 {
                "discount_value"
            } else {
                "original_price"
            };
            return Err(AppError::with_message(
                ErrorCode::DiscountIncomplete,
                format!("{} must be greater than zero", field),
            )
            .with_detail("field", field));
        }

        if let Some(expires_at) = self.expires_at
            && expires_at <= now
        {
            return Err(AppError::new(ErrorCode::DiscountExpired)
                .with_detail("expires_at", expires_at));
        }

        Ok(DiscountPayload {
            title: self.title,
            description: self.description,
            original_price: input.original_price,
            discount_type: input.discount_type,
            discount_value: input.discount_value,
            discounted_price: result.discounted_price,
            extras: self.extras,
            expires_at: self.expires_at,
        })
    }
}
