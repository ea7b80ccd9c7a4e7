//! Form adapters
//!
//! Turn the raw vendor forms (numeric fields as typed strings) into typed
//! pricing input, and gate submission on the soft warnings the pricing
//! module reports.

mod discount_form;
mod menu_item_form;

pub use discount_form::{DiscountDraft, DiscountForm};
pub use menu_item_form::{MenuItemDraft, MenuItemForm};
