use crate::error::Result;
use crate::model::{Rect, validate_box, validate_item_dims};

/// Row-by-row greedy fill allowing per-item rotation.
///
/// A vertical cursor advances from 0 in increments of the unrotated item
/// height while `y + min(item_w, item_h) <= box_h`. Within each row a
/// horizontal cursor takes the first orientation that fits the remaining row
/// width and the remaining vertical space: unrotated `(item_w, item_h)`
/// first, then rotated `(item_h, item_w)`; when neither fits the row
/// terminates. Emission stops globally the instant `max_items` is reached.
///
/// The row pitch is always `item_h`, even when only rotated rectangles of
/// height `item_w` were placed in a row, so the cursor can under- or
/// over-advance relative to the tallest rectangle actually placed there.
/// Candidate selection in [`best_single_layout`](crate::layout::best_single_layout)
/// depends on this exact pitch rule; changing it is a behavior change, not a
/// cleanup.
pub fn row_greedy_layout(
    box_w: f64,
    box_h: f64,
    item_w: f64,
    item_h: f64,
    max_items: Option<usize>,
) -> Result<Vec<Rect>> {
    validate_box(box_w, box_h)?;
    validate_item_dims(item_w, item_h)?;

    let mut placements = Vec::new();
    let mut y = 0.0;
    while y + item_w.min(item_h) <= box_h {
        let mut remaining = box_w;
        let mut x = 0.0;
        loop {
            if let Some(max) = max_items {
                if placements.len() >= max {
                    return Ok(placements);
                }
            }
            if item_w <= remaining && item_h <= box_h - y {
                placements.push(Rect::new(x, y, item_w, item_h));
                x += item_w;
                remaining -= item_w;
            } else if item_h <= remaining && item_w <= box_h - y {
                placements.push(Rect::new(x, y, item_h, item_w));
                x += item_h;
                remaining -= item_h;
            } else {
                break;
            }
        }
        y += item_h;
    }
    Ok(placements)
}
