//! Shared types for the marketplace catalog
//!
//! Common types used across crates and by the web frontend:
//! discount / pack / menu-item models, the unified error system,
//! and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
