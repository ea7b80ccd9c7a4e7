//! Catalog Store Module
//!
//! The document store holding packs, discounts and menu items lives outside
//! this service; [`CatalogStore`] is the seam it plugs into. [`MemoryCatalog`]
//! is the in-process implementation used by default and in tests.

mod memory;

pub use memory::MemoryCatalog;

use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use shared::models::{Discount, DiscountPayload, MenuItem, MenuItemPayload, Pack, PackCreate};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(what) => AppError::not_found(what),
            RepoError::Duplicate(what) => AppError::already_exists(what),
        }
    }
}

impl RepoError {
    /// Map to a domain-specific error code
    pub fn into_app_error(self, not_found: ErrorCode, duplicate: ErrorCode) -> AppError {
        match self {
            RepoError::NotFound(what) => {
                AppError::with_message(not_found, format!("{} not found", what))
                    .with_detail("resource", what)
            }
            RepoError::Duplicate(what) => {
                AppError::with_message(duplicate, format!("{} already exists", what))
                    .with_detail("resource", what)
            }
        }
    }
}

/// Vendor catalog storage
#[async_trait]
pub trait CatalogStore: Send + Sync + std::fmt::Debug {
    // ========== Packs ==========

    /// All packs of a vendor (empty if the vendor has none)
    async fn list_packs(&self, vendor_id: &str) -> RepoResult<Vec<Pack>>;

    /// Create a pack; names are unique per vendor
    async fn create_pack(&self, vendor_id: &str, data: PackCreate) -> RepoResult<Pack>;

    async fn delete_pack(&self, vendor_id: &str, pack_id: &str) -> RepoResult<bool>;

    // ========== Discounts ==========

    async fn create_discount(
        &self,
        vendor_id: &str,
        data: DiscountPayload,
        now: i64,
    ) -> RepoResult<Discount>;

    async fn update_discount(&self, id: &str, data: DiscountPayload, now: i64)
    -> RepoResult<Discount>;

    async fn find_discount(&self, id: &str) -> RepoResult<Option<Discount>>;

    async fn list_discounts(&self, vendor_id: &str) -> RepoResult<Vec<Discount>>;

    async fn set_discount_approval(
        &self,
        id: &str,
        is_approved: bool,
        now: i64,
    ) -> RepoResult<Discount>;

    /// Un-approve every expired discount, returning how many changed
    async fn sweep_expired(&self, now: i64) -> RepoResult<usize>;

    // ========== Menu items ==========

    async fn create_menu_item(
        &self,
        vendor_id: &str,
        data: MenuItemPayload,
        now: i64,
    ) -> RepoResult<MenuItem>;

    async fn find_menu_item(&self, id: &str) -> RepoResult<Option<MenuItem>>;

    async fn list_menu_items(&self, vendor_id: &str) -> RepoResult<Vec<MenuItem>>;
}
