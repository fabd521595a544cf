use crate::{
    layout::{
        footprint::Footprint,
        types::{CompatiblePosition, ShelfLineItem},
    },
    model::Bay,
};
use log::debug;

/// Finds every run of empty slots able to host `footprint`.
///
/// Scans each sub-shelf left to right. Once a run of consecutive empty slots
/// reaches the required width, the run is reported if the sub-shelf is tall
/// enough, and the scan restarts after it either way. A long run therefore
/// yields at most one position. Results are ordered by bay, then shelf, then
/// scan order; an empty result means nothing fits.
pub fn find_compatible_positions(
    shelf_lines: &[Vec<Vec<ShelfLineItem>>],
    bays: &[Bay],
    footprint: Footprint,
) -> Vec<CompatiblePosition> {
    let mut positions = Vec::new();

    for (bay_idx, bay_lines) in shelf_lines.iter().enumerate() {
        for (shelf_idx, line) in bay_lines.iter().enumerate() {
            let shelf_height = bays
                .get(bay_idx)
                .map(|bay| bay.sub_shelf_height(shelf_idx))
                .unwrap_or(f64::INFINITY);

            let mut consecutive_empty_width = 0.0;
            let mut start_item_idx: Option<usize> = None;

            for (item_idx, item) in line.iter().enumerate() {
                if !item.is_empty() {
                    consecutive_empty_width = 0.0;
                    start_item_idx = None;
                    continue;
                }

                let start = *start_item_idx.get_or_insert(item_idx);
                consecutive_empty_width += item.width();

                if consecutive_empty_width >= footprint.width() {
                    if footprint.height() <= shelf_height {
                        positions.push(CompatiblePosition {
                            bay_idx,
                            shelf_idx,
                            start_item_idx: start,
                            end_item_idx: item_idx,
                            available_width: consecutive_empty_width,
                        });
                    }
                    consecutive_empty_width = 0.0;
                    start_item_idx = None;
                }
            }
        }
    }

    debug!(
        "Found {} positions for footprint {:.2}x{:.2}",
        positions.len(),
        footprint.width(),
        footprint.height()
    );
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::{EmptySlot, ProductSlot};
    use crate::model::{ProductDetails, ProductPlacement, SubShelf};

    fn empty(x: f64, width: f64) -> ShelfLineItem {
        ShelfLineItem::Empty(EmptySlot {
            id: format!("e{x}"),
            width,
            x_position: x,
        })
    }

    fn product(x: f64, width: f64) -> ShelfLineItem {
        ShelfLineItem::Product(ProductSlot {
            id: format!("p{x}"),
            width,
            height: 40.0,
            x_position: x,
            placement: ProductPlacement {
                product_id: "p".into(),
                bay: 1,
                shelf: 1,
                position: x,
                facings_wide: 1,
                facings_high: 1,
                orientation: None,
                product_details: ProductDetails::default(),
            },
        })
    }

    fn bay_with_heights(heights: &[Option<f64>]) -> Bay {
        Bay {
            width: 100.0,
            height: 200.0,
            sub_shelves: heights
                .iter()
                .map(|&height| SubShelf {
                    width: 100.0,
                    height,
                })
                .collect(),
        }
    }

    fn fillers(from: f64, count: usize) -> Vec<ShelfLineItem> {
        (0..count).map(|i| empty(from + 5.0 * i as f64, 5.0)).collect()
    }

    #[test]
    fn test_one_match_per_run() {
        // 20 wide product then an 80 wide run made of 16 fillers
        let mut line = vec![product(0.0, 20.0)];
        line.extend(fillers(20.0, 16));
        let lines = vec![vec![line]];
        let bays = vec![bay_with_heights(&[Some(50.0)])];

        let positions = find_compatible_positions(&lines, &bays, Footprint::new(50.0, 50.0).unwrap());
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].start_item_idx, 1);
        assert_eq!(positions[0].end_item_idx, 10);
        assert_eq!(positions[0].available_width, 50.0);
    }

    #[test]
    fn test_single_wide_gap_reports_whole_width() {
        let lines = vec![vec![vec![product(0.0, 20.0), empty(20.0, 80.0)]]];
        let bays = vec![bay_with_heights(&[Some(50.0)])];

        let positions = find_compatible_positions(&lines, &bays, Footprint::new(50.0, 50.0).unwrap());
        assert_eq!(
            positions,
            vec![CompatiblePosition {
                bay_idx: 0,
                shelf_idx: 0,
                start_item_idx: 1,
                end_item_idx: 1,
                available_width: 80.0,
            }]
        );
    }

    #[test]
    fn test_products_break_runs() {
        let mut line = fillers(0.0, 4);
        line.push(product(20.0, 10.0));
        line.extend(fillers(30.0, 4));
        let lines = vec![vec![line]];

        let positions = find_compatible_positions(&lines, &[], Footprint::new(25.0, 10.0).unwrap());
        assert!(positions.is_empty());
    }

    #[test]
    fn test_too_short_shelf_is_rejected() {
        let lines = vec![vec![fillers(0.0, 20), fillers(0.0, 20)]];
        let bays = vec![bay_with_heights(&[Some(30.0), None])];

        let positions = find_compatible_positions(&lines, &bays, Footprint::new(40.0, 45.0).unwrap());
        // shelf 0 is too short; shelf 1 has no height and is unbounded
        assert_eq!(positions.len(), 2);
        assert!(positions.iter().all(|p| p.shelf_idx == 1));
        assert_eq!(positions[0].end_item_idx, 7);
        assert_eq!(positions[1].start_item_idx, 8);
    }

    #[test]
    fn test_order_is_bay_then_shelf() {
        let lines = vec![
            vec![fillers(0.0, 4), fillers(0.0, 4)],
            vec![fillers(0.0, 4)],
        ];
        let positions = find_compatible_positions(&lines, &[], Footprint::new(20.0, 1.0).unwrap());
        let order: Vec<_> = positions.iter().map(|p| (p.bay_idx, p.shelf_idx)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0)]);
    }
}
