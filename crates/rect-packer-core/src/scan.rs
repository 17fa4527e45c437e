//! Multi-type greedy placement scanner.

use tracing::{debug, instrument};

use crate::error::{PackError, Result};
use crate::model::{ItemType, Placement, Rect, validate_box};

/// Distance between candidate positions on both axes, in container units.
const SCAN_STEP: f64 = 1.0;

/// Admission gate for the scanner: `rect` must lie fully inside the
/// container and overlap none of the already placed rectangles.
/// O(|placed|) per call.
pub fn fits(rect: &Rect, box_w: f64, box_h: f64, placed: &[Placement]) -> bool {
    rect.within(box_w, box_h) && placed.iter().all(|p| !p.rect.overlaps(rect))
}

struct Instance {
    w: f64,
    h: f64,
    type_id: usize,
}

/// First position admitting a `w x h` rectangle, scanning the quantized
/// grid in row-major order (y outer, x inner).
fn scan_position(w: f64, h: f64, box_w: f64, box_h: f64, placed: &[Placement]) -> Option<Rect> {
    let y_steps = (box_h / SCAN_STEP).floor() as usize;
    let x_steps = (box_w / SCAN_STEP).floor() as usize;
    for yi in 0..=y_steps {
        let y = yi as f64 * SCAN_STEP;
        if y + h > box_h {
            break;
        }
        for xi in 0..=x_steps {
            let x = xi as f64 * SCAN_STEP;
            let candidate = Rect::new(x, y, w, h);
            if fits(&candidate, box_w, box_h, placed) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Greedily seats every instance of every item type that fits.
///
/// Each type expands into `capacity` instances; instances are sorted by
/// area descending (stable, so ties keep catalog order) and seated one at a
/// time at the first admitted position on the quantized grid, trying the
/// unrotated orientation across the whole grid before the rotated one.
/// Instances admitted nowhere are dropped; a shorter-than-requested result
/// is a normal outcome, not an error.
///
/// Worst case is O(n * (box_w / step) * (box_h / step) * n) for n expanded
/// instances; bound catalog sizes accordingly.
#[instrument(skip_all, fields(types = item_types.len()))]
pub fn pack_multiple(box_w: f64, box_h: f64, item_types: &[ItemType]) -> Result<Vec<Placement>> {
    validate_box(box_w, box_h)?;
    if item_types.is_empty() {
        return Err(PackError::Empty);
    }
    for (index, item) in item_types.iter().enumerate() {
        item.validate(index)?;
    }

    let mut instances = Vec::new();
    for (type_id, item) in item_types.iter().enumerate() {
        for _ in 0..item.capacity {
            instances.push(Instance {
                w: item.w,
                h: item.h,
                type_id,
            });
        }
    }
    instances.sort_by(|a, b| (b.w * b.h).total_cmp(&(a.w * a.h)));

    let mut placements: Vec<Placement> = Vec::new();
    let mut dropped = 0usize;
    for instance in &instances {
        let seat = scan_position(instance.w, instance.h, box_w, box_h, &placements)
            .or_else(|| scan_position(instance.h, instance.w, box_w, box_h, &placements));
        match seat {
            Some(rect) => placements.push(Placement {
                rect,
                type_id: instance.type_id,
            }),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(
            dropped,
            placed = placements.len(),
            "instances could not be seated"
        );
    }
    Ok(placements)
}
