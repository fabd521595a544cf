use crate::{
    config::LayoutConfig,
    constants::{DETAILS_TO_SHELF_UNITS, EMPTY_SLOT_PREFIX, WIDTH_EPSILON},
    error::Result,
    layout::types::{EmptySlot, ProductSlot, ShelfLineItem, ShelfRef},
    model::ProductPlacement,
};
use log::{trace, warn};

/// Converts one sub-shelf's placements into slots covering `[0, shelf_width)`
#[derive(Debug, Clone)]
pub struct ShelfLineBuilder {
    config: LayoutConfig,
}

impl ShelfLineBuilder {
    /// Fails with [`PlanogramError::Config`](crate::PlanogramError::Config)
    /// when a layout length is zero, negative or not finite.
    pub fn new(config: &LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn scale(&self) -> f64 {
        self.config.scale
    }

    /// Builds the slot sequence of one sub-shelf.
    ///
    /// `products` must all sit on `shelf` and be sorted by ascending
    /// `position`. `shelf_width` is in display units.
    ///
    /// A stored position beyond the shelf width wraps modulo the width.
    pub fn build<'p, I>(&self, shelf: ShelfRef, products: I, shelf_width: f64) -> Vec<ShelfLineItem>
    where
        I: IntoIterator<Item = &'p ProductPlacement>,
    {
        let mut items = Vec::new();
        if !(shelf_width.is_finite() && shelf_width > 0.0) {
            return items;
        }

        let scale = self.config.scale;
        let mut cursor = 0.0_f64;

        for product in products {
            let raw_position = product.position * scale;
            if raw_position >= shelf_width {
                warn!(
                    "Product {} on shelf {} at {:.2} exceeds shelf width {:.2}; wrapping",
                    product.product_id, shelf, raw_position, shelf_width
                );
            }
            let scaled_position = (raw_position % shelf_width).min(shelf_width);
            if scaled_position > cursor {
                self.fill(&mut items, shelf, &mut cursor, scaled_position);
            }

            let (width, height) = self.slot_size(product);
            items.push(ShelfLineItem::Product(ProductSlot {
                id: format!("{}-{}-{}", product.product_id, shelf, items.len()),
                width,
                height,
                x_position: cursor,
                placement: product.clone(),
            }));
            cursor += width;
        }

        self.fill(&mut items, shelf, &mut cursor, shelf_width);
        trace!(
            "Shelf {}: {} slots over width {:.2}",
            shelf,
            items.len(),
            shelf_width
        );
        items
    }

    /// Total display size of a placement (all facings)
    pub fn slot_size(&self, product: &ProductPlacement) -> (f64, f64) {
        let details = &product.product_details;
        let unit = |dimension: Option<f64>, fallback: f64| {
            dimension
                .map(|d| d / DETAILS_TO_SHELF_UNITS * self.config.scale)
                .unwrap_or(fallback)
        };
        let unit_width = unit(details.width, self.config.default_product_width);
        let unit_height = unit(details.height, self.config.default_product_height);
        (
            unit_width * f64::from(product.facings_wide),
            unit_height * f64::from(product.facings_high),
        )
    }

    /// Emits filler slots from `cursor` up to `target` in `filler_unit` chunks
    fn fill(&self, items: &mut Vec<ShelfLineItem>, shelf: ShelfRef, cursor: &mut f64, target: f64) {
        while target - *cursor > WIDTH_EPSILON {
            let width = self.config.filler_unit.min(target - *cursor);
            items.push(ShelfLineItem::Empty(EmptySlot {
                id: format!("{EMPTY_SLOT_PREFIX}-{}-{}", shelf, items.len()),
                width,
                x_position: *cursor,
            }));
            *cursor += width;
        }
        // absorb accumulated rounding so the next slot starts exactly on target
        if (target - *cursor).abs() <= WIDTH_EPSILON {
            *cursor = target;
        }
    }
}
