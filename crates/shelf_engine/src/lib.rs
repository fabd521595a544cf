//! Shelf layout, placement search and faceted filtering for planograms.
//!
//! Every engine function is a pure computation over the snapshot passed in:
//! placements and bays go through [`build_shelf_lines`] to get per-shelf slot
//! sequences, [`find_compatible_positions`] searches those for free space, and
//! [`FacetFilter`] narrows and counts the assortment.

pub mod config;
pub mod constants;
mod de;
pub mod error;
pub mod export;
pub mod facets;
pub mod layout;
pub mod model;
pub mod snapshot;
pub mod violations;

pub use config::{EngineConfig, FilterConfig, LayoutConfig};
pub use constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_FILLER_UNIT, DEFAULT_PRODUCT_DIMENSION};
pub use error::{PlanogramError, Result};
pub use facets::{FacetFilter, FacetKey, Filters, PriceConstraint};
pub use layout::{
    CompatiblePosition, EmptySlot, Footprint, ProductSlot, ShelfLineBuilder, ShelfLineItem,
    ShelfLines, ShelfRef, build_shelf_lines, dimmed_item_ids, find_compatible_positions,
};
pub use model::{Bay, Flag, Price, ProductDetails, ProductPlacement, SubShelf};
pub use snapshot::PlanogramSnapshot;
pub use violations::{ProductIdList, Violation, ViolationExtras, ViolationReport, ViolationRequest};
