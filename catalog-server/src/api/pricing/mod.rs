//! Pricing API 模块
//!
//! Stateless live-preview endpoints backing the vendor forms.

mod handler;

pub use handler::DiscountPreview;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pricing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/discount/preview", post(handler::preview_discount))
        .route("/packaging/resolve", post(handler::resolve_packaging))
}
