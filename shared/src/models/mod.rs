//! Data models
//!
//! Shared between catalog-server and the web frontend (via API).
//! All record IDs are opaque strings.

pub mod discount;
pub mod menu_item;
pub mod pack;

// Re-exports
pub use discount::*;
pub use menu_item::*;
pub use pack::*;
