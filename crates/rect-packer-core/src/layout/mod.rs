//! Single-type layout strategies and the best-of-candidates selector.

pub mod greedy;
pub mod grid;

pub use greedy::row_greedy_layout;
pub use grid::grid_layout;

use tracing::instrument;

use crate::error::Result;
use crate::model::Rect;

/// Best single-type layout across three candidates:
///
/// 1. the grid tiling with the item as given;
/// 2. the grid tiling with width and height swapped, each resulting
///    rectangle's size rewritten back to the original `(item_w, item_h)`.
///    This is a capacity-counting probe for whether the swapped grid seats
///    more copies at the same positions, not a physically rotated tiling;
/// 3. the row-greedy fill.
///
/// The candidate placing the most items wins; ties go to the earlier
/// candidate in the order above, and the winning sequence is returned
/// untouched. Returns an empty sequence when the item does not fit in
/// either orientation.
#[instrument(skip_all)]
pub fn best_single_layout(
    box_w: f64,
    box_h: f64,
    item_w: f64,
    item_h: f64,
    max_items: Option<usize>,
) -> Result<Vec<Rect>> {
    let grid = grid_layout(box_w, box_h, item_w, item_h, max_items)?;
    let swapped: Vec<Rect> = grid_layout(box_w, box_h, item_h, item_w, max_items)?
        .into_iter()
        .map(|r| Rect::new(r.x, r.y, item_w, item_h))
        .collect();
    let greedy = row_greedy_layout(box_w, box_h, item_w, item_h, max_items)?;

    let mut best = grid;
    if swapped.len() > best.len() {
        best = swapped;
    }
    if greedy.len() > best.len() {
        best = greedy;
    }
    Ok(best)
}
