//! Image resizing for brightness sampling.
//!
//! Analysis does not need every pixel of a 24MP upload, so rasters are
//! reduced to a small grid first. All functions return new rasters without
//! modifying the input.

use std::borrow::Cow;

use super::{LoadError, Raster};

/// Resize a raster to exact dimensions with nearest-neighbor picking.
///
/// # Errors
///
/// Returns `LoadError::InvalidFormat` for a zero target dimension and
/// `LoadError::CorruptedFile` if the pixel buffer does not match the raster
/// dimensions.
fn resize(raster: &Raster, width: u32, height: u32) -> Result<Raster, LoadError> {
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if raster.width == width && raster.height == height {
        return Ok(raster.clone());
    }

    let rgba = raster
        .to_rgba_image()
        .ok_or_else(|| LoadError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba, width, height, image::imageops::FilterType::Nearest);

    Ok(Raster::from_rgba_image(resized))
}

/// Dimensions of the sampling grid for a `width x height` raster.
///
/// The grid is `sample_width` wide with the aspect ratio preserved, widened
/// until it holds at least `min_samples` pixels. It never exceeds the source
/// dimensions; small sources are sampled in full.
pub fn sample_dimensions(width: u32, height: u32, sample_width: u32, min_samples: u32) -> (u32, u32) {
    let total = width as u64 * height as u64;
    if total <= min_samples as u64 || width <= sample_width {
        return (width, height);
    }

    let ratio = height as f64 / width as f64;
    let grid_w = sample_width.max(1);
    let grid_h = ((grid_w as f64 * ratio).round() as u32).max(1);

    if (grid_w as u64 * grid_h as u64) >= min_samples as u64 {
        return (grid_w, grid_h);
    }

    // Too few samples (very wide panorama): grow both sides uniformly
    let scale = (min_samples as f64 / total as f64).sqrt();
    let grid_w = ((width as f64 * scale).ceil() as u32).clamp(1, width);
    let grid_h = ((height as f64 * scale).ceil() as u32).clamp(1, height);
    (grid_w, grid_h)
}

/// Reduce a raster to its sampling grid.
///
/// Uses nearest-neighbor picking so every sample is a real source pixel.
/// Falls back to the full raster if resizing is not possible, so analysis
/// always has something to measure.
pub fn downsample_for_analysis(raster: &Raster, sample_width: u32, min_samples: u32) -> Cow<'_, Raster> {
    let (w, h) = sample_dimensions(raster.width, raster.height, sample_width, min_samples);
    if (w, h) == (raster.width, raster.height) {
        return Cow::Borrowed(raster);
    }
    match resize(raster, w, h) {
        Ok(small) => Cow::Owned(small),
        Err(_) => Cow::Borrowed(raster),
    }
}
