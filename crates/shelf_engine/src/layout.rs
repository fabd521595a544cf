pub mod dimming;
pub mod footprint;
pub mod grid;
pub mod placement;
pub mod shelf_line;
pub mod types;

pub use dimming::dimmed_item_ids;
pub use footprint::Footprint;
pub use grid::{ShelfLines, build_shelf_lines};
pub use placement::find_compatible_positions;
pub use shelf_line::ShelfLineBuilder;
pub use types::{CompatiblePosition, EmptySlot, ProductSlot, ShelfLineItem, ShelfRef};
