//! WASM bindings for crop extraction.

use crate::types::JsRaster;
use cardphoto_core::transform::{extract as core_extract, CropRegion};
use wasm_bindgen::prelude::*;

/// Copy a sub-rectangle of `image`, given in image pixels.
///
/// The region is snapped to whole pixels and clamped to the raster, so any
/// input yields a raster of at least 1x1 for a non-empty source.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cropped = extract(raster, 180, 80, 640, 640);
/// ```
#[wasm_bindgen]
pub fn extract(image: &JsRaster, x: f64, y: f64, width: f64, height: f64) -> JsRaster {
    let region = CropRegion::new(x, y, width, height);
    JsRaster::from_raster(core_extract(&image.to_raster(), &region))
}
