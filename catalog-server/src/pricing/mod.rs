//! Pricing Module
//!
//! Pure calculations behind the vendor forms:
//! - [`discount`]: discounted price + soft warnings
//! - [`packaging`]: takeaway container selection
//! - [`expiry`]: expiry-driven approval of discount records
//! - [`money`]: decimal helpers and numeric field parsing

pub mod discount;
pub mod expiry;
pub mod money;
pub mod packaging;

pub use discount::{FallbackPolicy, compute, compute_with, is_submittable};
pub use packaging::{merge_into_extras, resolve, resolve_with};
