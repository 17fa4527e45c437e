use crate::error::Result;
use crate::model::{Rect, validate_box, validate_item_dims};

/// Deterministic row-major tiling of one rectangle size into the container.
///
/// `cols = floor(box_w / item_w)` and `rows = floor(box_h / item_h)` are
/// fixed up front; placements are emitted row by row, left to right, at
/// `(col * item_w, row * item_h)`. Emission stops the instant `max_items`
/// is reached, so the count is `min(cols * rows, max_items)`. The tiling is
/// non-overlapping by construction.
pub fn grid_layout(
    box_w: f64,
    box_h: f64,
    item_w: f64,
    item_h: f64,
    max_items: Option<usize>,
) -> Result<Vec<Rect>> {
    validate_box(box_w, box_h)?;
    validate_item_dims(item_w, item_h)?;

    let cols = (box_w / item_w).floor() as usize;
    let rows = (box_h / item_h).floor() as usize;
    let mut placements = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if let Some(max) = max_items {
                if placements.len() >= max {
                    return Ok(placements);
                }
            }
            placements.push(Rect::new(
                col as f64 * item_w,
                row as f64 * item_h,
                item_w,
                item_h,
            ));
        }
    }
    Ok(placements)
}
