//! Discount Pricing Engine
//!
//! Computes the discounted price of a catalog record from its original price,
//! discount type and discount value. Never fails: invalid combinations come
//! back as a [`DiscountWarning`] next to a safe fallback price.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{DiscountInput, DiscountResult, DiscountType, DiscountWarning};

use super::money::{round2, to_f64, try_to_decimal};

/// Price reported alongside a warning
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Discounted price becomes 0
    #[default]
    Zero,
    /// No discount applied: discounted price equals the original price
    OriginalPrice,
}

impl FallbackPolicy {
    fn price_for(&self, original_price: f64) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::OriginalPrice => round2(original_price),
        }
    }
}

impl std::str::FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "original" | "original_price" => Ok(Self::OriginalPrice),
            other => Err(format!("unknown discount fallback policy: {}", other)),
        }
    }
}

/// Compute the discounted price with the default [`FallbackPolicy::Zero`]
pub fn compute(input: &DiscountInput) -> DiscountResult {
    compute_with(input, FallbackPolicy::Zero)
}

/// Compute the discounted price
///
/// Rules:
/// - no usable discount value or original price yet: price 0, no warning
/// - percentage over 100: warning, fallback price
/// - fixed amount over the original price: warning, fallback price
/// - otherwise the discounted price, rounded half-up to cents
pub fn compute_with(input: &DiscountInput, fallback: FallbackPolicy) -> DiscountResult {
    let DiscountInput {
        original_price,
        discount_type,
        discount_value,
    } = *input;

    // NaN fails every comparison, so check finiteness explicitly
    if !discount_value.is_finite()
        || discount_value <= 0.0
        || !original_price.is_finite()
        || original_price <= 0.0
    {
        return DiscountResult::pending();
    }

    // Limits are checked on the raw values; `Decimal` cannot hold every finite f64
    match discount_type {
        DiscountType::Percentage => {
            if discount_value > 100.0 {
                return DiscountResult::rejected(
                    fallback.price_for(original_price),
                    DiscountWarning::PercentageOverHundred,
                );
            }
            let price = match (try_to_decimal(original_price), try_to_decimal(discount_value)) {
                (Some(original), Some(value)) => {
                    to_f64(original * (Decimal::ONE - value / Decimal::ONE_HUNDRED))
                }
                _ => round2(original_price * (1.0 - discount_value / 100.0)),
            };
            DiscountResult::priced(price)
        }
        DiscountType::Fixed => {
            if discount_value > original_price {
                return DiscountResult::rejected(
                    fallback.price_for(original_price),
                    DiscountWarning::FixedOverOriginal,
                );
            }
            let price = match (try_to_decimal(original_price), try_to_decimal(discount_value)) {
                (Some(original), Some(value)) => to_f64(original - value),
                _ => round2(original_price - discount_value),
            };
            DiscountResult::priced(price)
        }
    }
}

/// Whether a result may be written to the catalog
///
/// Pending results (no usable input) and results carrying a warning are not.
pub fn is_submittable(input: &DiscountInput, result: &DiscountResult) -> bool {
    !result.has_warning()
        && input.discount_value.is_finite()
        && input.discount_value > 0.0
        && input.original_price.is_finite()
        && input.original_price > 0.0
}
