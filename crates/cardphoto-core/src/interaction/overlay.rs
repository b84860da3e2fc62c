//! Visual crop overlay.
//!
//! Two renditions of the same picture: [`OverlayGeometry`] describes the box,
//! guides and handles in relative units for hosts that draw with their own
//! toolkit, and [`render_overlay`] paints them onto a copy of the raster.

use serde::{Deserialize, Serialize};

use super::Handle;
use crate::decode::{Raster, CHANNELS};
use crate::transform::{CropRegion, PixelRect};

const WHITE: [u8; 3] = [255, 255, 255];
const HANDLE_FILL: [u8; 3] = [13, 148, 136];

/// Where a corner handle sits, and the cursor to show over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleAnchor {
    pub handle: Handle,
    /// Image-space x of the corner.
    pub x: f64,
    /// Image-space y of the corner.
    pub y: f64,
    pub cursor: String,
}

/// Overlay layout relative to the displayed raster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    /// Crop box position and size, in percent of the raster dimensions.
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
    /// Rule-of-thirds guides, image-space x of the two vertical lines.
    pub thirds_x: [f64; 2],
    /// Rule-of-thirds guides, image-space y of the two horizontal lines.
    pub thirds_y: [f64; 2],
    pub handles: Vec<HandleAnchor>,
}

impl OverlayGeometry {
    pub fn new(region: &CropRegion, raster_width: u32, raster_height: u32) -> Self {
        let w = (raster_width as f64).max(1.0);
        let h = (raster_height as f64).max(1.0);

        let handles = Handle::CORNERS
            .iter()
            .filter_map(|&handle| {
                handle.corner_position(region).map(|p| HandleAnchor {
                    handle,
                    x: p.x,
                    y: p.y,
                    cursor: handle.cursor().to_string(),
                })
            })
            .collect();

        Self {
            left_pct: region.x * 100.0 / w,
            top_pct: region.y * 100.0 / h,
            width_pct: region.width * 100.0 / w,
            height_pct: region.height * 100.0 / h,
            thirds_x: [
                region.x + region.width / 3.0,
                region.x + region.width * 2.0 / 3.0,
            ],
            thirds_y: [
                region.y + region.height / 3.0,
                region.y + region.height * 2.0 / 3.0,
            ],
            handles,
        }
    }
}

/// Overlay drawing sizes, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub border_width: u32,
    pub handle_size: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border_width: 2,
            handle_size: 20,
        }
    }
}

impl OverlayStyle {
    /// Scale screen-pixel sizes to image pixels.
    pub fn scaled(self, scale: f64) -> Self {
        let s = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            border_width: ((self.border_width as f64 * s).round() as u32).max(1),
            handle_size: ((self.handle_size as f64 * s).round() as u32).max(1),
        }
    }
}

/// Paint the crop overlay onto a copy of `raster`.
///
/// Outside the crop is dimmed to half brightness, the crop gets a white
/// border and faint thirds guides, and each corner a filled handle.
pub fn render_overlay(raster: &Raster, region: &CropRegion, style: &OverlayStyle) -> Raster {
    let mut out = raster.clone();
    if out.is_empty() {
        return out;
    }
    let rect = region.to_pixel_rect(out.width, out.height);

    for y in 0..out.height {
        for x in 0..out.width {
            if !contains(&rect, x, y) {
                let i = out.offset(x, y);
                for c in &mut out.pixels[i..i + 3] {
                    *c /= 2;
                }
            }
        }
    }

    let third_w = rect.width / 3;
    let third_h = rect.height / 3;
    if third_w > 0 && third_h > 0 {
        for k in 1..=2 {
            vline(&mut out, rect.x + k * third_w, rect.y, rect.height, 1, 0.4);
            hline(&mut out, rect.y + k * third_h, rect.x, rect.width, 1, 0.4);
        }
    }

    let bw = style.border_width.min(rect.width).min(rect.height);
    hline(&mut out, rect.y, rect.x, rect.width, bw, 1.0);
    hline(&mut out, rect.y + rect.height - bw, rect.x, rect.width, bw, 1.0);
    vline(&mut out, rect.x, rect.y, rect.height, bw, 1.0);
    vline(&mut out, rect.x + rect.width - bw, rect.y, rect.height, bw, 1.0);

    for handle in Handle::CORNERS {
        if let Some(corner) = handle.corner_position(region) {
            draw_handle(&mut out, corner.x, corner.y, style.handle_size);
        }
    }

    out
}

fn contains(rect: &PixelRect, x: u32, y: u32) -> bool {
    x >= rect.x && y >= rect.y && x < rect.x + rect.width && y < rect.y + rect.height
}

fn blend(out: &mut Raster, x: u32, y: u32, color: [u8; 3], opacity: f32) {
    if x >= out.width || y >= out.height {
        return;
    }
    let i = out.offset(x, y);
    for (c, &target) in out.pixels[i..i + 3].iter_mut().zip(color.iter()) {
        *c = (*c as f32 * (1.0 - opacity) + target as f32 * opacity).round() as u8;
    }
}

fn hline(out: &mut Raster, y: u32, x: u32, len: u32, thickness: u32, opacity: f32) {
    for dy in 0..thickness {
        for dx in 0..len {
            blend(out, x + dx, y + dy, WHITE, opacity);
        }
    }
}

fn vline(out: &mut Raster, x: u32, y: u32, len: u32, thickness: u32, opacity: f32) {
    for dx in 0..thickness {
        for dy in 0..len {
            blend(out, x + dx, y + dy, WHITE, opacity);
        }
    }
}

/// Filled square centered on the corner: white rim, teal center.
fn draw_handle(out: &mut Raster, cx: f64, cy: f64, size: u32) {
    let half = size as f64 / 2.0;
    let x0 = (cx - half).max(0.0).round() as u32;
    let y0 = (cy - half).max(0.0).round() as u32;
    let x1 = ((cx + half).round().max(0.0) as u32).min(out.width);
    let y1 = ((cy + half).round().max(0.0) as u32).min(out.height);
    let rim = (size / 10).max(1);

    for y in y0..y1 {
        for x in x0..x1 {
            let on_rim = x < x0 + rim || y < y0 + rim || x + rim >= x1 || y + rim >= y1;
            let color = if on_rim { WHITE } else { HANDLE_FILL };
            let i = out.offset(x, y);
            out.pixels[i..i + 3].copy_from_slice(&color);
            out.pixels[i + CHANNELS - 1] = 255;
        }
    }
}
