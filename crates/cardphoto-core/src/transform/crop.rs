//! Crop rectangle and sub-image extraction.

use serde::{Deserialize, Serialize};

use crate::decode::{Raster, CHANNELS};

/// Axis-aligned crop rectangle in image-pixel coordinates.
///
/// Within a session the region always satisfies `0 <= x`, `0 <= y`,
/// `x + width <= raster width`, `y + height <= raster height` and both sides
/// at least the minimum crop size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centered square whose side is `fraction * min(width, height)`.
    pub fn centered_square(raster_width: u32, raster_height: u32, fraction: f64) -> Self {
        let w = raster_width as f64;
        let h = raster_height as f64;
        let size = w.min(h) * fraction;
        Self {
            x: (w - size) / 2.0,
            y: (h - size) / 2.0,
            width: size,
            height: size,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check the session invariants against a raster of the given size.
    ///
    /// `epsilon` absorbs floating point drift from accumulated pointer deltas.
    pub fn is_valid_within(&self, raster_width: u32, raster_height: u32, min_size: f64, epsilon: f64) -> bool {
        self.x >= -epsilon
            && self.y >= -epsilon
            && self.right() <= raster_width as f64 + epsilon
            && self.bottom() <= raster_height as f64 + epsilon
            && self.width >= min_size - epsilon
            && self.height >= min_size - epsilon
    }

    /// Snap to whole pixels inside a `raster_width x raster_height` raster.
    ///
    /// The origin is floored, the size rounded, and the result clamped so it
    /// covers at least one pixel and never leaves the raster.
    pub fn to_pixel_rect(&self, raster_width: u32, raster_height: u32) -> PixelRect {
        let x = snap_origin(self.x, raster_width);
        let y = snap_origin(self.y, raster_height);
        let width = snap_extent(self.width, raster_width - x);
        let height = snap_extent(self.height, raster_height - y);
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// A crop rectangle snapped to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

fn snap_origin(v: f64, limit: u32) -> u32 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    (v.floor() as u32).min(limit.saturating_sub(1))
}

fn snap_extent(v: f64, room: u32) -> u32 {
    if v.is_nan() || v <= 0.0 {
        return 1.min(room);
    }
    (v.round() as u32).clamp(1.min(room), room)
}

/// Copy the sub-rectangle selected by `region` into a new raster.
///
/// Pixels are copied 1:1 with no resampling: output pixel `(i, j)` is source
/// pixel `(x + i, y + j)` of the snapped rectangle. Reads never leave the
/// source bounds.
pub fn extract(raster: &Raster, region: &CropRegion) -> Raster {
    if raster.is_empty() {
        return Raster::new(0, 0, Vec::new());
    }

    let rect = region.to_pixel_rect(raster.width, raster.height);

    // Fast path: full frame
    if rect.x == 0 && rect.y == 0 && rect.width == raster.width && rect.height == raster.height {
        return raster.clone();
    }

    let row_bytes = rect.width as usize * CHANNELS;
    let mut pixels = Vec::with_capacity(row_bytes * rect.height as usize);

    for row in 0..rect.height {
        let start = raster.offset(rect.x, rect.y + row);
        pixels.extend_from_slice(&raster.pixels[start..start + row_bytes]);
    }

    Raster::new(rect.width, rect.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test raster where each pixel encodes its position.
    fn test_raster(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255]);
            }
        }
        Raster::new(width, height, pixels)
    }

    #[test]
    fn test_centered_square_landscape() {
        // min(1000, 800) * 0.8 = 640
        let r = CropRegion::centered_square(1000, 800, 0.8);
        assert_eq!(r, CropRegion::new(180.0, 80.0, 640.0, 640.0));
    }

    #[test]
    fn test_centered_square_portrait() {
        let r = CropRegion::centered_square(600, 900, 0.8);
        assert_eq!(r, CropRegion::new(60.0, 210.0, 480.0, 480.0));
    }

    #[test]
    fn test_validity() {
        let r = CropRegion::new(10.0, 10.0, 60.0, 60.0);
        assert!(r.is_valid_within(100, 100, 50.0, 0.0));
        assert!(!r.is_valid_within(60, 100, 50.0, 0.0));
        assert!(!r.is_valid_within(100, 100, 70.0, 0.0));
        assert!(!CropRegion::new(-1.0, 0.0, 60.0, 60.0).is_valid_within(100, 100, 50.0, 0.0));
    }

    #[test]
    fn test_pixel_rect_snapping() {
        let r = CropRegion::new(10.7, 3.2, 20.4, 20.6);
        assert_eq!(
            r.to_pixel_rect(100, 100),
            PixelRect {
                x: 10,
                y: 3,
                width: 20,
                height: 21
            }
        );
    }

    #[test]
    fn test_pixel_rect_clamped_to_bounds() {
        let r = CropRegion::new(90.0, 95.0, 50.0, 50.0);
        let p = r.to_pixel_rect(100, 100);
        assert_eq!((p.x, p.y, p.width, p.height), (90, 95, 10, 5));
    }

    #[test]
    fn test_extract_dimensions_and_origin() {
        let img = test_raster(100, 80);
        let out = extract(&img, &CropRegion::new(20.0, 10.0, 50.0, 40.0));
        assert_eq!((out.width, out.height), (50, 40));
        assert_eq!(out.pixels.len(), 50 * 40 * 4);
        assert_eq!(out.pixel(0, 0), Some([20, 10, 30, 255]));
        assert_eq!(out.pixel(49, 39), Some([69, 49, 118, 255]));
    }

    #[test]
    fn test_extract_full_frame() {
        let img = test_raster(60, 60);
        let out = extract(&img, &CropRegion::new(0.0, 0.0, 60.0, 60.0));
        assert_eq!(out, img);
    }

    #[test]
    fn test_extract_does_not_modify_source() {
        let img = test_raster(60, 60);
        let before = img.clone();
        let _ = extract(&img, &CropRegion::new(5.0, 5.0, 50.0, 50.0));
        assert_eq!(img, before);
    }

    #[test]
    fn test_extract_out_of_range_region_is_clamped() {
        let img = test_raster(20, 20);
        let out = extract(&img, &CropRegion::new(-5.0, 15.0, 100.0, 100.0));
        assert_eq!((out.width, out.height), (20, 5));
        assert_eq!(out.pixel(0, 0), Some([0, 15, 15, 255]));
    }

    #[test]
    fn test_extract_empty_raster() {
        let img = Raster::new(0, 0, vec![]);
        assert!(extract(&img, &CropRegion::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
