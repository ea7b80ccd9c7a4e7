//! Discount API 模块
//!
//! Create and edit share one pricing path and one fallback policy.

mod handler;

pub use handler::ApprovalRequest;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/vendors/{vendor_id}/discounts",
            get(handler::list).post(handler::create),
        )
        .nest("/api/discounts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/approval", put(handler::set_approval))
}
