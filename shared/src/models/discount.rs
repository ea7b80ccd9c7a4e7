//! Discount Model

use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// `discount_value` is a percent (0-100)
    Percentage,
    /// `discount_value` is a currency amount
    Fixed,
}

/// Raw pricing input of a discount form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiscountInput {
    /// Pre-discount price
    pub original_price: f64,
    pub discount_type: DiscountType,
    /// Percentage: 30 = 30%, fixed: 5.00 = 5.00 off
    pub discount_value: f64,
}

impl DiscountInput {
    pub fn new(original_price: f64, discount_type: DiscountType, discount_value: f64) -> Self {
        Self {
            original_price,
            discount_type,
            discount_value,
        }
    }

    pub fn percentage(original_price: f64, discount_value: f64) -> Self {
        Self::new(original_price, DiscountType::Percentage, discount_value)
    }

    pub fn fixed(original_price: f64, discount_value: f64) -> Self {
        Self::new(original_price, DiscountType::Fixed, discount_value)
    }
}

/// Soft validation warning attached to a [`DiscountResult`]
///
/// The `Display` text is the user-facing message shown next to the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountWarning {
    #[error("Percentage discount cannot exceed 100%.")]
    PercentageOverHundred,
    #[error("Fixed discount cannot exceed original price.")]
    FixedOverOriginal,
}

/// Computed discount price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiscountResult {
    /// Rounded to 2 decimal places, never negative
    pub discounted_price: f64,
    pub warning: Option<DiscountWarning>,
}

impl DiscountResult {
    /// Price computed from valid input
    pub fn priced(discounted_price: f64) -> Self {
        Self {
            discounted_price,
            warning: None,
        }
    }

    /// Not enough input yet to compute anything
    pub fn pending() -> Self {
        Self::priced(0.0)
    }

    pub fn rejected(discounted_price: f64, warning: DiscountWarning) -> Self {
        Self {
            discounted_price,
            warning: Some(warning),
        }
    }

    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// User-facing warning text, if any
    pub fn warning_message(&self) -> Option<String> {
        self.warning.map(|w| w.to_string())
    }
}

/// Discount entity (catalog record)
///
/// The raw input fields are stored next to the computed price so the edit
/// form can re-display them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub id: String,
    pub vendor_id: String,
    pub title: String,
    pub description: Option<String>,
    pub original_price: f64,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub discounted_price: f64,
    /// Referenced add-on / packaging ids
    pub extras: Vec<String>,
    /// Expiry (Unix millis), `None` = never expires
    pub expires_at: Option<i64>,
    /// Moderation flag; cleared automatically once the discount expires
    pub is_approved: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Discount {
    /// Pricing input this record was computed from
    pub fn input(&self) -> DiscountInput {
        DiscountInput::new(self.original_price, self.discount_type, self.discount_value)
    }
}

/// Validated write payload for both the create and the edit flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountPayload {
    pub title: String,
    pub description: Option<String>,
    pub original_price: f64,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub discounted_price: f64,
    pub extras: Vec<String>,
    pub expires_at: Option<i64>,
}
