//! Discount expiry
//!
//! Approved discounts drop their approval once `expires_at` has passed,
//! which hides them from customers until a vendor re-publishes them.

use shared::models::Discount;
use std::ops::DerefMut;

/// Check if a discount has expired at `now` (Unix millis)
pub fn is_expired(discount: &Discount, now: i64) -> bool {
    matches!(discount.expires_at, Some(expires_at) if expires_at <= now)
}

/// Clear the approval of an expired discount
///
/// Returns `true` if the record changed.
pub fn apply_expiry(discount: &mut Discount, now: i64) -> bool {
    if discount.is_approved && is_expired(discount, now) {
        discount.is_approved = false;
        discount.updated_at = now;
        return true;
    }
    false
}

/// Apply expiry to every record, returning how many changed
///
/// Accepts plain `&mut Discount` as well as map guards (e.g. `dashmap::mapref::multiple::RefMutMulti`).
pub fn sweep<D>(discounts: impl IntoIterator<Item = D>, now: i64) -> usize
where
    D: DerefMut<Target = Discount>,
{
    discounts
        .into_iter()
        .map(|mut d| apply_expiry(&mut d, now))
        .filter(|changed| *changed)
        .count()
}
