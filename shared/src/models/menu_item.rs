//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Sold as takeaway and needs a container pack
    pub needs_container: bool,
    /// Larger portion; requires the big container
    pub extra_portion: bool,
    /// Referenced add-on / packaging ids (includes the resolved container)
    pub extras: Vec<String>,
    pub created_at: i64,
}

/// Validated write payload for a menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItemPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub needs_container: bool,
    pub extra_portion: bool,
    pub extras: Vec<String>,
}
