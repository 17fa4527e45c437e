//! Layout rendering, compiled in behind the `render` feature.
//!
//! The capability is explicit rather than best-effort: [`is_available`]
//! reports whether rendering support was compiled in, and [`export_png`]
//! exists under both configurations but fails with
//! [`PackError::RenderUnavailable`](crate::error::PackError::RenderUnavailable)
//! when it was not. The core never touches the filesystem; callers decide
//! what to do with the returned bytes.

#[cfg(not(feature = "render"))]
use crate::error::PackError;
use crate::error::Result;
use crate::model::Placement;

/// True iff the `render` feature was compiled in.
pub fn is_available() -> bool {
    cfg!(feature = "render")
}

/// PNG-encodes the rendered layout in memory.
///
/// Without the `render` feature this fails with `RenderUnavailable`.
#[cfg(not(feature = "render"))]
pub fn export_png(
    _box_w: f64,
    _box_h: f64,
    _placements: &[Placement],
    _scale: f64,
) -> Result<Vec<u8>> {
    Err(PackError::RenderUnavailable)
}

/// PNG-encodes the rendered layout in memory.
#[cfg(feature = "render")]
pub fn export_png(box_w: f64, box_h: f64, placements: &[Placement], scale: f64) -> Result<Vec<u8>> {
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    use crate::error::PackError;

    let canvas = render_layout(box_w, box_h, placements, scale)?;
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| PackError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(feature = "render")]
pub use imp::render_layout;

#[cfg(feature = "render")]
mod imp {
    use image::{Rgba, RgbaImage};

    use crate::error::{PackError, Result};
    use crate::model::{Placement, validate_box};

    const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

    /// Fill colors cycled by `type_id`.
    const PALETTE: [[u8; 4]; 10] = [
        [31, 119, 180, 255],
        [255, 127, 14, 255],
        [44, 160, 44, 255],
        [214, 39, 40, 255],
        [148, 103, 189, 255],
        [140, 86, 75, 255],
        [227, 119, 194, 255],
        [127, 127, 127, 255],
        [188, 189, 34, 255],
        [23, 190, 207, 255],
    ];

    /// Draws the container border and every placement onto a white canvas of
    /// `ceil(box_w * scale) x ceil(box_h * scale)` pixels. Each placement is
    /// filled with a palette color chosen by `type_id` and outlined in
    /// black. `scale` is pixels per container unit.
    pub fn render_layout(
        box_w: f64,
        box_h: f64,
        placements: &[Placement],
        scale: f64,
    ) -> Result<RgbaImage> {
        validate_box(box_w, box_h)?;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(PackError::InvalidInput(format!(
                "render scale must be positive and finite, got {scale}"
            )));
        }

        let width = (box_w * scale).ceil() as u32;
        let height = (box_h * scale).ceil() as u32;
        let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
        draw_outline(&mut canvas, 0, 0, width, height, OUTLINE);

        for p in placements {
            let x0 = (p.rect.x * scale).round() as u32;
            let y0 = (p.rect.y * scale).round() as u32;
            let x1 = (p.rect.right() * scale).round() as u32;
            let y1 = (p.rect.bottom() * scale).round() as u32;
            let fill = Rgba(PALETTE[p.type_id % PALETTE.len()]);
            fill_rect(&mut canvas, x0, y0, x1, y1, fill);
            draw_outline(&mut canvas, x0, y0, x1, y1, OUTLINE);
        }
        Ok(canvas)
    }

    fn fill_rect(canvas: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
        let (cw, ch) = canvas.dimensions();
        for y in y0..y1.min(ch) {
            for x in x0..x1.min(cw) {
                canvas.put_pixel(x, y, color);
            }
        }
    }

    fn draw_outline(canvas: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let (cw, ch) = canvas.dimensions();
        let bottom = y1 - 1;
        let right = x1 - 1;
        for x in x0..x1.min(cw) {
            if y0 < ch {
                canvas.put_pixel(x, y0, color);
            }
            if bottom < ch {
                canvas.put_pixel(x, bottom, color);
            }
        }
        for y in y0..y1.min(ch) {
            if x0 < cw {
                canvas.put_pixel(x0, y, color);
            }
            if right < cw {
                canvas.put_pixel(right, y, color);
            }
        }
    }
}
