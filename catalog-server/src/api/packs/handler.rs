//! Pack API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use shared::models::{Pack, PackCreate, PackagingSelectionResult};

use crate::core::ServerState;
use crate::pricing::{self, money};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Packaging resolution against the vendor's own catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingRequest {
    pub needs_container: bool,
    #[serde(default)]
    pub extra_portion: bool,
}

/// GET /api/vendors/:vendor_id/packs - 获取商家所有包装
pub async fn list(
    State(state): State<ServerState>,
    Path(vendor_id): Path<String>,
) -> AppResult<Json<Vec<Pack>>> {
    let packs = state.catalog.list_packs(&vendor_id).await?;
    Ok(Json(packs))
}

/// POST /api/vendors/:vendor_id/packs - 创建包装
pub async fn create(
    State(state): State<ServerState>,
    Path(vendor_id): Path<String>,
    Json(payload): Json<PackCreate>,
) -> AppResult<Json<Pack>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    money::validate_price(payload.price, "price")?;

    let payload = PackCreate {
        name: payload.name.trim().to_string(),
        price: money::round2(payload.price),
    };
    let pack = state
        .catalog
        .create_pack(&vendor_id, payload)
        .await
        .map_err(|e| e.into_app_error(ErrorCode::PackNotFound, ErrorCode::PackNameExists))?;

    tracing::info!(vendor_id = %vendor_id, pack_id = %pack.id, name = %pack.name, "Pack created");
    Ok(Json(pack))
}

/// DELETE /api/vendors/:vendor_id/packs/:id - 删除包装
pub async fn delete(
    State(state): State<ServerState>,
    Path((vendor_id, id)): Path<(String, String)>,
) -> AppResult<Json<bool>> {
    let deleted = state.catalog.delete_pack(&vendor_id, &id).await?;
    if !deleted {
        return Err(AppError::with_message(
            ErrorCode::PackNotFound,
            format!("Pack {} not found", id),
        ));
    }

    tracing::info!(vendor_id = %vendor_id, pack_id = %id, "Pack deleted");
    Ok(Json(true))
}

/// POST /api/vendors/:vendor_id/packaging/resolve - 按商家包装目录解析
pub async fn resolve(
    State(state): State<ServerState>,
    Path(vendor_id): Path<String>,
    Json(request): Json<PackagingRequest>,
) -> AppResult<Json<PackagingSelectionResult>> {
    let packs = state.catalog.list_packs(&vendor_id).await?;
    Ok(Json(pricing::resolve_with(
        request.needs_container,
        request.extra_portion,
        &packs,
    )))
}
