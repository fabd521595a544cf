use crate::{
    config::LayoutConfig,
    error::Result,
    layout::{
        shelf_line::ShelfLineBuilder,
        types::{ShelfLineItem, ShelfRef},
    },
    model::{Bay, ProductPlacement},
};
use log::{debug, warn};
use std::collections::HashMap;

/// `lines[bay_idx][shelf_idx]` holds the slot sequence of that sub-shelf
pub type ShelfLines = Vec<Vec<Vec<ShelfLineItem>>>;

/// Builds the slot sequence of every sub-shelf of every bay.
///
/// Placements are grouped by their 1-based `(bay, shelf)` and sorted by
/// position before building. Placements pointing at a missing bay or
/// sub-shelf are skipped. Fails only on an invalid `config`.
pub fn build_shelf_lines(
    products: &[ProductPlacement],
    bays: &[Bay],
    config: &LayoutConfig,
) -> Result<ShelfLines> {
    let mut by_shelf: HashMap<ShelfRef, Vec<&ProductPlacement>> = HashMap::new();
    for product in products {
        if product.bay == 0 || product.shelf == 0 {
            warn!(
                "Product {} has a zero bay/shelf index; indices are 1-based",
                product.product_id
            );
            continue;
        }
        by_shelf
            .entry(ShelfRef::new(product.bay - 1, product.shelf - 1))
            .or_default()
            .push(product);
    }

    let builder = ShelfLineBuilder::new(config)?;
    let mut placed = 0usize;
    let lines: ShelfLines = bays
        .iter()
        .enumerate()
        .map(|(bay_idx, bay)| {
            bay.sub_shelves
                .iter()
                .enumerate()
                .map(|(shelf_idx, sub_shelf)| {
                    let shelf = ShelfRef::new(bay_idx, shelf_idx);
                    let mut group = by_shelf.remove(&shelf).unwrap_or_default();
                    group.sort_by(|a, b| a.position.total_cmp(&b.position));
                    placed += group.len();
                    builder.build(shelf, group, sub_shelf.width * builder.scale())
                })
                .collect()
        })
        .collect();

    let orphans: usize = by_shelf.values().map(Vec::len).sum();
    if orphans > 0 {
        warn!("{orphans} placements reference a bay or sub-shelf that does not exist");
    }
    debug!(
        "Built shelf lines for {} bays ({} placements laid out)",
        lines.len(),
        placed
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductDetails, SubShelf};

    fn placement(id: &str, bay: usize, shelf: usize, position: f64) -> ProductPlacement {
        ProductPlacement {
            product_id: id.to_string(),
            bay,
            shelf,
            position,
            facings_wide: 1,
            facings_high: 1,
            orientation: None,
            product_details: ProductDetails {
                width: Some(100.0),
                height: Some(100.0),
                ..Default::default()
            },
        }
    }

    fn bay(widths: &[f64]) -> Bay {
        Bay {
            width: 100.0,
            height: 200.0,
            sub_shelves: widths
                .iter()
                .map(|&width| SubShelf {
                    width,
                    height: Some(50.0),
                })
                .collect(),
        }
    }

    fn product_ids(line: &[ShelfLineItem]) -> Vec<&str> {
        line.iter()
            .filter_map(ShelfLineItem::as_product)
            .map(|p| p.placement.product_id.as_str())
            .collect()
    }

    #[test]
    fn test_groups_and_sorts_by_position() {
        let products = vec![
            placement("b", 1, 1, 60.0),
            placement("a", 1, 1, 10.0),
            placement("c", 2, 2, 0.0),
        ];
        let bays = vec![bay(&[100.0, 100.0]), bay(&[100.0, 80.0])];
        let lines = build_shelf_lines(&products, &bays, &LayoutConfig::default()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(product_ids(&lines[0][0]), vec!["a", "b"]);
        assert!(product_ids(&lines[0][1]).is_empty());
        assert_eq!(product_ids(&lines[1][1]), vec!["c"]);

        let width: f64 = lines[1][1].iter().map(ShelfLineItem::width).sum();
        assert_eq!(width, 80.0);
    }

    #[test]
    fn test_orphan_placements_are_skipped() {
        let products = vec![placement("x", 3, 1, 0.0), placement("y", 1, 0, 0.0)];
        let bays = vec![bay(&[100.0])];
        let lines = build_shelf_lines(&products, &bays, &LayoutConfig::default()).unwrap();
        assert!(lines[0][0].iter().all(ShelfLineItem::is_empty));
    }

    #[test]
    fn test_no_bays_gives_empty_grid() {
        let products = vec![placement("x", 1, 1, 0.0)];
        let lines = build_shelf_lines(&products, &[], &LayoutConfig::default()).unwrap();
        assert!(lines.is_empty());
    }
}
