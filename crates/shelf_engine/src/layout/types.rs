use crate::model::ProductPlacement;
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;

/// Grid coordinates of a sub-shelf (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShelfRef {
    pub bay: usize,
    pub shelf: usize,
}

impl ShelfRef {
    pub fn new(bay: usize, shelf: usize) -> Self {
        Self { bay, shelf }
    }
}

/// Displayed as the 1-based labels merchandisers use ("bay 1 / shelf 3")
impl fmt::Display for ShelfRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.bay + 1, self.shelf + 1)
    }
}

/// Slot occupied by a placed product (all facings)
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSlot {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub x_position: f64,
    pub placement: ProductPlacement,
}

/// Filler slot covering free shelf space
#[derive(Debug, Clone, PartialEq)]
pub struct EmptySlot {
    pub id: String,
    pub width: f64,
    pub x_position: f64,
}

/// One entry of a shelf line. A line tiles its shelf left to right.
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfLineItem {
    Product(ProductSlot),
    Empty(EmptySlot),
}

impl ShelfLineItem {
    pub fn id(&self) -> &str {
        match self {
            ShelfLineItem::Product(p) => &p.id,
            ShelfLineItem::Empty(e) => &e.id,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            ShelfLineItem::Product(p) => p.width,
            ShelfLineItem::Empty(e) => e.width,
        }
    }

    pub fn x_position(&self) -> f64 {
        match self {
            ShelfLineItem::Product(p) => p.x_position,
            ShelfLineItem::Empty(e) => e.x_position,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ShelfLineItem::Empty(_))
    }

    pub fn as_product(&self) -> Option<&ProductSlot> {
        match self {
            ShelfLineItem::Product(p) => Some(p),
            ShelfLineItem::Empty(_) => None,
        }
    }
}

// Renderers expect a flat object with an `isEmpty` discriminator and the
// placement fields passed through on product slots.
impl Serialize for ShelfLineItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ShelfLineItem::Product(p) => {
                let mut s = serializer.serialize_struct("ShelfLineItem", 9)?;
                s.serialize_field("id", &p.id)?;
                s.serialize_field("width", &p.width)?;
                s.serialize_field("height", &p.height)?;
                s.serialize_field("xPosition", &p.x_position)?;
                s.serialize_field("isEmpty", &false)?;
                s.serialize_field("product_id", &p.placement.product_id)?;
                s.serialize_field("facings_wide", &p.placement.facings_wide)?;
                s.serialize_field("facings_high", &p.placement.facings_high)?;
                s.serialize_field("product_details", &p.placement.product_details)?;
                s.end()
            }
            ShelfLineItem::Empty(e) => {
                let mut s = serializer.serialize_struct("ShelfLineItem", 4)?;
                s.serialize_field("id", &e.id)?;
                s.serialize_field("width", &e.width)?;
                s.serialize_field("isEmpty", &true)?;
                s.serialize_field("xPosition", &e.x_position)?;
                s.end()
            }
        }
    }
}

/// A contiguous run of empty slots able to host a requested footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatiblePosition {
    pub bay_idx: usize,
    pub shelf_idx: usize,
    pub start_item_idx: usize,
    pub end_item_idx: usize, // inclusive
    pub available_width: f64,
}
