//! Unified error system for the catalog services
//!
//! This module provides a comprehensive error handling system with:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Discount errors
//! - 5xxx: Packaging errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors
//!
//! Soft pricing warnings are NOT errors: they travel as data on
//! [`crate::models::DiscountResult`] and [`crate::models::PackagingSelectionResult`].
//! An [`AppError`] only appears once a form tries to submit while one is present.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::PackMissing);
//!
//! let err = AppError::validation("original_price is not a number")
//!     .with_detail("field", "original_price");
//!
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
