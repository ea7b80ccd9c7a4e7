//! In-memory catalog backed by DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{Discount, DiscountPayload, MenuItem, MenuItemPayload, Pack, PackCreate};
use shared::util::record_id;

use super::{CatalogStore, RepoError, RepoResult};
use crate::pricing::expiry;

/// In-memory catalog
///
/// Packs are grouped per vendor; discounts and menu items are keyed by id.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    packs: DashMap<String, Vec<Pack>>,
    discounts: DashMap<String, Discount>,
    menu_items: DashMap<String, MenuItem>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list_packs(&self, vendor_id: &str) -> RepoResult<Vec<Pack>> {
        Ok(self
            .packs
            .get(vendor_id)
            .map(|packs| packs.clone())
            .unwrap_or_default())
    }

    async fn create_pack(&self, vendor_id: &str, data: PackCreate) -> RepoResult<Pack> {
        let mut packs = self.packs.entry(vendor_id.to_string()).or_default();
        if packs.iter().any(|p| p.name == data.name) {
            return Err(RepoError::Duplicate(format!("Pack {}", data.name)));
        }

        let pack = Pack {
            id: record_id(),
            name: data.name,
            price: data.price,
        };
        packs.push(pack.clone());
        Ok(pack)
    }

    async fn delete_pack(&self, vendor_id: &str, pack_id: &str) -> RepoResult<bool> {
        let Some(mut packs) = self.packs.get_mut(vendor_id) else {
            return Ok(false);
        };
        let before = packs.len();
        packs.retain(|p| p.id != pack_id);
        Ok(packs.len() != before)
    }

    async fn create_discount(
        &self,
        vendor_id: &str,
        data: DiscountPayload,
        now: i64,
    ) -> RepoResult<Discount> {
        let discount = Discount {
            id: record_id(),
            vendor_id: vendor_id.to_string(),
            title: data.title,
            description: data.description,
            original_price: data.original_price,
            discount_type: data.discount_type,
            discount_value: data.discount_value,
            discounted_price: data.discounted_price,
            extras: data.extras,
            expires_at: data.expires_at,
            // New discounts wait for moderation
            is_approved: false,
            created_at: now,
            updated_at: now,
        };
        self.discounts.insert(discount.id.clone(), discount.clone());
        Ok(discount)
    }

    async fn update_discount(
        &self,
        id: &str,
        data: DiscountPayload,
        now: i64,
    ) -> RepoResult<Discount> {
        let mut discount = self
            .discounts
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(format!("Discount {}", id)))?;

        discount.title = data.title;
        discount.description = data.description;
        discount.original_price = data.original_price;
        discount.discount_type = data.discount_type;
        discount.discount_value = data.discount_value;
        discount.discounted_price = data.discounted_price;
        discount.extras = data.extras;
        discount.expires_at = data.expires_at;
        discount.updated_at = now;

        Ok(discount.clone())
    }

    async fn find_discount(&self, id: &str) -> RepoResult<Option<Discount>> {
        Ok(self.discounts.get(id).map(|d| d.clone()))
    }

    async fn list_discounts(&self, vendor_id: &str) -> RepoResult<Vec<Discount>> {
        let mut discounts: Vec<Discount> = self
            .discounts
            .iter()
            .filter(|d| d.vendor_id == vendor_id)
            .map(|d| d.clone())
            .collect();
        discounts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(discounts)
    }

    async fn set_discount_approval(
        &self,
        id: &str,
        is_approved: bool,
        now: i64,
    ) -> RepoResult<Discount> {
        let mut discount = self
            .discounts
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(format!("Discount {}", id)))?;
        discount.is_approved = is_approved;
        discount.updated_at = now;
        Ok(discount.clone())
    }

    async fn sweep_expired(&self, now: i64) -> RepoResult<usize> {
        Ok(expiry::sweep(self.discounts.iter_mut(), now))
    }

    async fn create_menu_item(
        &self,
        vendor_id: &str,
        data: MenuItemPayload,
        now: i64,
    ) -> RepoResult<MenuItem> {
        let item = MenuItem {
            id: record_id(),
            vendor_id: vendor_id.to_string(),
            name: data.name,
            description: data.description,
            price: data.price,
            needs_container: data.needs_container,
            extra_portion: data.extra_portion,
            extras: data.extras,
            created_at: now,
        };
        self.menu_items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn find_menu_item(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        Ok(self.menu_items.get(id).map(|m| m.clone()))
    }

    async fn list_menu_items(&self, vendor_id: &str) -> RepoResult<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self
            .menu_items
            .iter()
            .filter(|m| m.vendor_id == vendor_id)
            .map(|m| m.clone())
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }
}
