//! Menu Item API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/vendors/{vendor_id}/menu-items",
            get(handler::list).post(handler::create),
        )
        .route("/api/menu-items/{id}", get(handler::get_by_id))
}
