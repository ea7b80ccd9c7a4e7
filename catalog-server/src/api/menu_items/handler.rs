//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::MenuItem;
use shared::util::now_millis;

use crate::core::ServerState;
use crate::forms::{MenuItemDraft, MenuItemForm};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/vendors/:vendor_id/menu-items - 获取商家所有菜品
pub async fn list(
    State(state): State<ServerState>,
    Path(vendor_id): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.catalog.list_menu_items(&vendor_id).await?;
    Ok(Json(items))
}

/// GET /api/menu-items/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = state.catalog.find_menu_item(&id).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::MenuItemNotFound,
            format!("Menu item {} not found", id),
        )
    })?;
    Ok(Json(item))
}

/// POST /api/vendors/:vendor_id/menu-items - 创建菜品
///
/// Takeaway items get their container pack attached from the vendor's
/// current catalog; creation is blocked while that pack is missing.
pub async fn create(
    State(state): State<ServerState>,
    Path(vendor_id): Path<String>,
    Json(form): Json<MenuItemForm>,
) -> AppResult<Json<MenuItem>> {
    let draft = MenuItemDraft::parse(form)?;
    let packs = state.catalog.list_packs(&vendor_id).await?;
    let payload = draft.into_payload(&packs)?;

    let item = state
        .catalog
        .create_menu_item(&vendor_id, payload, now_millis())
        .await?;

    tracing::info!(
        vendor_id = %vendor_id,
        menu_item_id = %item.id,
        extras = item.extras.len(),
        "Menu item created"
    );
    Ok(Json(item))
}
