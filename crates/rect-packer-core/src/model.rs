use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Axis-aligned rectangle. `x,y` is the top-left corner; `w,h` are sizes.
/// Coordinates live in the container frame: origin top-left, x rightward,
/// y downward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Right edge coordinate (`x + w`).
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Returns true iff the open interiors of `self` and `other` intersect.
    /// Rectangles sharing only a boundary do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true iff `self` lies fully inside `[0, box_w] x [0, box_h]`.
    pub fn within(&self, box_w: f64, box_h: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= box_w && self.bottom() <= box_h
    }
}

/// One rectangle shape with a finite quantity bound.
///
/// A type is identified by its index in the slice handed to
/// [`pack_multiple`](crate::scan::pack_multiple); that index becomes the
/// `type_id` on every placement derived from it. `capacity` is a literal
/// count and zero requests zero instances. Callers wanting "as many as fit"
/// must resolve that to a finite upper bound first, e.g.
/// `floor(box_w / w) * floor(box_h / h) + 1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ItemType {
    pub w: f64,
    pub h: f64,
    pub capacity: usize,
}

impl ItemType {
    pub fn new(w: f64, h: f64, capacity: usize) -> Self {
        Self { w, h, capacity }
    }

    pub(crate) fn validate(&self, index: usize) -> Result<()> {
        if !(self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0) {
            return Err(PackError::InvalidInput(format!(
                "item type {index}: dimensions must be positive and finite, got {}x{}",
                self.w, self.h
            )));
        }
        Ok(())
    }
}

/// One accepted instance of an item type inside the container.
/// Serializes flat (`x, y, w, h, type`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(rename = "type")]
    pub type_id: usize,
}

/// Statistics about a packing result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of placements in the result.
    pub num_placed: usize,
    /// Container area (`box_w * box_h`).
    pub box_area: f64,
    /// Sum of placement areas.
    pub used_area: f64,
    /// `used_area / box_area` (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
}

impl PackStats {
    pub fn from_rects(box_w: f64, box_h: f64, rects: &[Rect]) -> Self {
        Self::compute(box_w, box_h, rects.iter())
    }

    pub fn from_placements(box_w: f64, box_h: f64, placements: &[Placement]) -> Self {
        Self::compute(box_w, box_h, placements.iter().map(|p| &p.rect))
    }

    fn compute<'a, I>(box_w: f64, box_h: f64, rects: I) -> Self
    where
        I: Iterator<Item = &'a Rect>,
    {
        let box_area = box_w * box_h;
        let mut num_placed = 0usize;
        let mut used_area = 0.0f64;
        for r in rects {
            num_placed += 1;
            used_area += r.area();
        }
        let occupancy = if box_area > 0.0 {
            used_area / box_area
        } else {
            0.0
        };
        Self {
            num_placed,
            box_area,
            used_area,
            occupancy,
        }
    }

    /// Returns a human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Placed: {}, Occupancy: {:.2}%, Box Area: {:.2}, Used Area: {:.2}",
            self.num_placed,
            self.occupancy * 100.0,
            self.box_area,
            self.used_area,
        )
    }
}

pub(crate) fn validate_box(box_w: f64, box_h: f64) -> Result<()> {
    if !(box_w.is_finite() && box_h.is_finite() && box_w > 0.0 && box_h > 0.0) {
        return Err(PackError::InvalidContainer {
            width: box_w,
            height: box_h,
        });
    }
    Ok(())
}

pub(crate) fn validate_item_dims(item_w: f64, item_h: f64) -> Result<()> {
    if !(item_w.is_finite() && item_h.is_finite() && item_w > 0.0 && item_h > 0.0) {
        return Err(PackError::InvalidInput(format!(
            "item dimensions must be positive and finite, got {item_w}x{item_h}"
        )));
    }
    Ok(())
}
