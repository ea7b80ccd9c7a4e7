//! Pack API 模块

mod handler;

pub use handler::PackagingRequest;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/vendors/{vendor_id}/packs",
            get(handler::list).post(handler::create),
        )
        .route("/api/vendors/{vendor_id}/packs/{id}", delete(handler::delete))
        .route(
            "/api/vendors/{vendor_id}/packaging/resolve",
            post(handler::resolve),
        )
}
