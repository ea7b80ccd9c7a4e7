//! Pricing API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{
    DiscountInput, DiscountWarning, PackagingSelectionInput, PackagingSelectionResult,
};

use crate::core::ServerState;
use crate::pricing;

/// Live discount preview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountPreview {
    pub discounted_price: f64,
    pub warning: Option<DiscountWarning>,
    /// Display text of `warning`
    pub warning_message: Option<String>,
    /// Whether the form may be submitted as-is
    pub submittable: bool,
}

/// POST /api/pricing/discount/preview - 计算折扣价格
pub async fn preview_discount(
    State(state): State<ServerState>,
    Json(input): Json<DiscountInput>,
) -> Json<DiscountPreview> {
    let result = pricing::compute_with(&input, state.discount_fallback());
    Json(DiscountPreview {
        discounted_price: result.discounted_price,
        warning: result.warning,
        warning_message: result.warning_message(),
        submittable: pricing::is_submittable(&input, &result),
    })
}

/// POST /api/pricing/packaging/resolve - 解析外卖包装
pub async fn resolve_packaging(
    Json(input): Json<PackagingSelectionInput>,
) -> Json<PackagingSelectionResult> {
    Json(pricing::resolve(&input))
}
