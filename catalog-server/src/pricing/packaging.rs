//! Takeaway Packaging Resolver
//!
//! Picks the container pack a takeaway menu item must carry, based on
//! whether it needs a container and whether it is an extra portion.
//! Stateless: every call re-resolves from scratch.

use shared::models::{Pack, PackKind, PackagingSelectionInput, PackagingSelectionResult};

/// Resolve the container pack for a menu item
pub fn resolve(input: &PackagingSelectionInput) -> PackagingSelectionResult {
    resolve_with(
        input.needs_container,
        input.extra_portion,
        &input.available_packs,
    )
}

/// Resolve against a borrowed pack catalog
pub fn resolve_with(
    needs_container: bool,
    extra_portion: bool,
    available_packs: &[Pack],
) -> PackagingSelectionResult {
    if !needs_container {
        return PackagingSelectionResult::default();
    }

    let required = PackKind::required(extra_portion);
    // Exact, case-sensitive match on the catalog name
    match available_packs
        .iter()
        .find(|p| p.name == required.catalog_name())
    {
        Some(pack) => PackagingSelectionResult::selected(pack.id.clone()),
        None => PackagingSelectionResult::missing(required),
    }
}

/// Merge a packaging selection into a menu item's extras
///
/// Container packs already present are dropped first, so switching between
/// medium and big never leaves both attached. Remaining extras keep their
/// order; duplicates are removed.
pub fn merge_into_extras(
    extras: &[String],
    selection: &PackagingSelectionResult,
    available_packs: &[Pack],
) -> Vec<String> {
    let is_container_id =
        |id: &str| available_packs.iter().any(|p| p.is_container() && p.id == id);

    let mut merged: Vec<String> = Vec::with_capacity(extras.len() + 1);
    for id in extras {
        if is_container_id(id) || merged.contains(id) {
            continue;
        }
        merged.push(id.clone());
    }

    if let Some(pack_id) = &selection.selected_pack_id
        && !merged.contains(pack_id)
    {
        merged.push(pack_id.clone());
    }

    merged
}
