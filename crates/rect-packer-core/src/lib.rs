//! Core library for packing axis-aligned rectangles into a fixed container.
//!
//! - Single-type: grid tiling, row-greedy fill with per-item rotation, and a
//!   best-of-candidates selector (`best_single_layout`)
//! - Multi-type: greedy largest-first scanner over quantized candidate
//!   positions with overlap testing (`pack_multiple`)
//! - Data model is serde-serializable; rendering to RGBA/PNG sits behind the
//!   `render` feature with an explicit availability check.
//!
//! Every operation is a pure function of its inputs; no state is held
//! between calls, so independent packing calls can run in parallel without
//! synchronization.
//!
//! Quick example:
//! ```
//! use rect_packer_core::{ItemType, best_single_layout, pack_multiple};
//! # fn main() -> rect_packer_core::Result<()> {
//! let single = best_single_layout(100.0, 50.0, 30.0, 20.0, Some(100))?;
//! assert_eq!(single.len(), 6);
//!
//! let multi = pack_multiple(200.0, 100.0, &[ItemType::new(30.0, 20.0, 10)])?;
//! assert!(!multi.is_empty());
//! # Ok(()) }
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod scan;

pub use error::*;
pub use layout::*;
pub use model::*;
pub use scan::*;

/// Convenience prelude for common types and functions.
/// Importing `rect_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::error::{PackError, Result};
    pub use crate::layout::{best_single_layout, grid_layout, row_greedy_layout};
    pub use crate::model::{ItemType, PackStats, Placement, Rect};
    pub use crate::scan::{fits, pack_multiple};
}
