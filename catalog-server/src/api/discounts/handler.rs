//! Discount API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use shared::models::Discount;
use shared::util::now_millis;

use crate::core::ServerState;
use crate::forms::{DiscountDraft, DiscountForm};
use crate::pricing::expiry;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Moderation toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub is_approved: bool,
}

fn discount_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::DiscountNotFound,
        format!("Discount {} not found", id),
    )
}

async fn load(state: &ServerState, id: &str) -> AppResult<Discount> {
    state
        .catalog
        .find_discount(id)
        .await?
        .ok_or_else(|| discount_not_found(id))
}

/// GET /api/vendors/:vendor_id/discounts - 获取商家所有折扣
pub async fn list(
    State(state): State<ServerState>,
    Path(vendor_id): Path<String>,
) -> AppResult<Json<Vec<Discount>>> {
    let discounts = state.catalog.list_discounts(&vendor_id).await?;
    Ok(Json(discounts))
}

/// GET /api/discounts/:id - 获取单个折扣
///
/// An expired discount that is still approved is un-approved on read.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Discount>> {
    let now = now_millis();
    let discount = load(&state, &id).await?;

    if discount.is_approved && expiry::is_expired(&discount, now) {
        let discount = state
            .catalog
            .set_discount_approval(&id, false, now)
            .await
            .map_err(|e| e.into_app_error(ErrorCode::DiscountNotFound, ErrorCode::AlreadyExists))?;
        tracing::info!(discount_id = %id, "Expired discount un-approved");
        return Ok(Json(discount));
    }

    Ok(Json(discount))
}

/// POST /api/vendors/:vendor_id/discounts - 创建折扣
pub async fn create(
    State(state): State<ServerState>,
    Path(vendor_id): Path<String>,
    Json(form): Json<DiscountForm>,
) -> AppResult<Json<Discount>> {
    let now = now_millis();
    let payload = DiscountDraft::parse(form)?.into_payload(state.discount_fallback(), now)?;
    let discount = state
        .catalog
        .create_discount(&vendor_id, payload, now)
        .await?;

    tracing::info!(
        vendor_id = %vendor_id,
        discount_id = %discount.id,
        discounted_price = discount.discounted_price,
        "Discount created"
    );
    Ok(Json(discount))
}

/// PUT /api/discounts/:id - 编辑折扣
///
/// Same parsing, pricing and fallback policy as creation; the moderation
/// state is left untouched.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(form): Json<DiscountForm>,
) -> AppResult<Json<Discount>> {
    let now = now_millis();
    load(&state, &id).await?;

    let payload = DiscountDraft::parse(form)?.into_payload(state.discount_fallback(), now)?;
    let discount = state
        .catalog
        .update_discount(&id, payload, now)
        .await
        .map_err(|e| e.into_app_error(ErrorCode::DiscountNotFound, ErrorCode::AlreadyExists))?;

    tracing::info!(
        discount_id = %id,
        discounted_price = discount.discounted_price,
        "Discount updated"
    );
    Ok(Json(discount))
}

/// PUT /api/discounts/:id/approval - 审核折扣
pub async fn set_approval(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(request): Json<ApprovalRequest>,
) -> AppResult<Json<Discount>> {
    let now = now_millis();
    let discount = load(&state, &id).await?;

    if request.is_approved && expiry::is_expired(&discount, now) {
        return Err(AppError::new(ErrorCode::DiscountExpired).with_detail("discount_id", id));
    }

    let discount = state
        .catalog
        .set_discount_approval(&id, request.is_approved, now)
        .await
        .map_err(|e| e.into_app_error(ErrorCode::DiscountNotFound, ErrorCode::AlreadyExists))?;

    tracing::info!(
        discount_id = %discount.id,
        is_approved = discount.is_approved,
        "Discount approval changed"
    );
    Ok(Json(discount))
}
