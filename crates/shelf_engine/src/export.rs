use crate::{
    error::Result,
    layout::{CompatiblePosition, ShelfLineItem},
};
use csv::WriterBuilder;
use std::io::Write;

/// Writes every slot of every sub-shelf as one CSV row (1-based bay/shelf)
pub fn write_shelf_lines<W: Write>(writer: W, shelf_lines: &[Vec<Vec<ShelfLineItem>>]) -> Result<usize> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record([
        "Bay", "Shelf", "Index", "Id", "Kind", "ProductId", "XPosition", "Width", "Height",
    ])?;

    let mut rows = 0;
    for (bay_idx, bay) in shelf_lines.iter().enumerate() {
        for (shelf_idx, line) in bay.iter().enumerate() {
            for (item_idx, item) in line.iter().enumerate() {
                let (kind, product_id, height) = match item {
                    ShelfLineItem::Product(p) => (
                        "product",
                        p.placement.product_id.as_str(),
                        format!("{:.2}", p.height),
                    ),
                    ShelfLineItem::Empty(_) => ("empty", "", String::new()),
                };
                wtr.write_record([
                    (bay_idx + 1).to_string().as_str(),
                    (shelf_idx + 1).to_string().as_str(),
                    item_idx.to_string().as_str(),
                    item.id(),
                    kind,
                    product_id,
                    format!("{:.2}", item.x_position()).as_str(),
                    format!("{:.2}", item.width()).as_str(),
                    height.as_str(),
                ])?;
                rows += 1;
            }
        }
    }

    wtr.flush()?;
    Ok(rows)
}

/// Writes placement candidates, one per row (1-based bay/shelf)
pub fn write_positions<W: Write>(writer: W, positions: &[CompatiblePosition]) -> Result<usize> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(["Bay", "Shelf", "StartItem", "EndItem", "AvailableWidth"])?;
    for pos in positions {
        wtr.write_record([
            (pos.bay_idx + 1).to_string(),
            (pos.shelf_idx + 1).to_string(),
            pos.start_item_idx.to_string(),
            pos.end_item_idx.to_string(),
            format!("{:.2}", pos.available_width),
        ])?;
    }
    wtr.flush()?;
    Ok(positions.len())
}
