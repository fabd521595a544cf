use crate::{
    facets::{FacetFilter, Filters},
    layout::types::ShelfLineItem,
    model::ProductPlacement,
};
use std::collections::HashSet;

/// Ids of product slots to render dimmed: those whose product drops out of
/// the current filter. Nothing is dimmed while no filter is active.
pub fn dimmed_item_ids(
    shelf_lines: &[Vec<Vec<ShelfLineItem>>],
    products: &[ProductPlacement],
    filters: &Filters,
    engine: &FacetFilter,
) -> HashSet<String> {
    if filters.is_empty() {
        return HashSet::new();
    }

    let visible: HashSet<&str> = engine
        .filter(products, filters, None)
        .into_iter()
        .map(|p| p.product_id.as_str())
        .collect();

    shelf_lines
        .iter()
        .flatten()
        .flatten()
        .filter_map(ShelfLineItem::as_product)
        .filter(|slot| !visible.contains(slot.placement.product_id.as_str()))
        .map(|slot| slot.id.clone())
        .collect()
}
