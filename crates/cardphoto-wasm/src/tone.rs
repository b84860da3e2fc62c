//! Tone analysis WASM bindings.
//!
//! The upload path only needs a CSS filter string for the card renderer;
//! [`analyze_photo_filter`] returns it without keeping the decoded photo.
//!
//! # Example
//!
//! ```typescript
//! import { analyze_photo_filter } from '@cardphoto/wasm';
//!
//! const filter = analyze_photo_filter(bytes); // "" when analysis failed
//! img.style.filter = filter;
//! ```

use crate::types::JsRaster;
use cardphoto_core::config::ToneConfig;
use cardphoto_core::tone::{self, FilterTriple};
use wasm_bindgen::prelude::*;

/// Brightness/contrast/saturation multipliers for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsFilterTriple {
    inner: FilterTriple,
}

#[wasm_bindgen]
impl JsFilterTriple {
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    #[wasm_bindgen(getter)]
    pub fn saturate(&self) -> f32 {
        self.inner.saturate
    }

    /// CSS `filter` value, e.g. `brightness(1.60) contrast(1.15) saturate(1.1)`.
    pub fn to_css(&self) -> String {
        self.inner.to_css()
    }

    /// The generic boost used when no analysis result is available.
    pub fn fallback() -> JsFilterTriple {
        Self::from(FilterTriple::fallback())
    }
}

impl From<FilterTriple> for JsFilterTriple {
    fn from(inner: FilterTriple) -> Self {
        Self { inner }
    }
}

impl JsFilterTriple {
    pub(crate) fn inner(&self) -> &FilterTriple {
        &self.inner
    }
}

/// Analyze an upload and return its display filter as a CSS string.
///
/// Returns an empty string if the bytes cannot be decoded; the failure is
/// logged and the photo is shown unfiltered.
#[wasm_bindgen]
pub fn analyze_photo_filter(bytes: &[u8]) -> String {
    tone::analyze_upload(bytes, &ToneConfig::default())
        .map(|triple| triple.to_css())
        .unwrap_or_default()
}

/// Analyze an upload and return its display filter.
#[wasm_bindgen]
pub fn analyze_photo(bytes: &[u8]) -> Result<JsFilterTriple, JsValue> {
    tone::analyze_upload(bytes, &ToneConfig::default())
        .map(JsFilterTriple::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Mean brightness (0-255) of a raster.
#[wasm_bindgen]
pub fn measure_brightness(image: &JsRaster) -> u8 {
    tone::measure_brightness(&image.to_raster(), &ToneConfig::default()).value()
}

/// Render the display filter into a new raster.
#[wasm_bindgen]
pub fn apply_filter_triple(image: &JsRaster, triple: &JsFilterTriple) -> JsRaster {
    JsRaster::from_raster(tone::apply_filter_triple(&image.to_raster(), triple.inner()))
}

/// Destructive auto correction into a new raster.
#[wasm_bindgen]
pub fn auto_correct(image: &JsRaster) -> JsRaster {
    let mut raster = image.to_raster();
    tone::auto_correct(&mut raster, &ToneConfig::default());
    JsRaster::from_raster(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_photo_filter_empty_on_garbage() {
        assert_eq!(analyze_photo_filter(b"not an image"), "");
    }

    #[test]
    fn test_measure_brightness_gray() {
        let img = JsRaster::new(10, 10, [90u8, 90, 90, 255].repeat(100));
        assert_eq!(measure_brightness(&img), 90);
    }

    #[test]
    fn test_fallback_triple() {
        let t = JsFilterTriple::fallback();
        assert_eq!((t.brightness(), t.contrast(), t.saturate()), (1.1, 1.1, 1.0));
        assert_eq!(t.to_css(), "brightness(1.10) contrast(1.10) saturate(1)");
    }

    #[test]
    fn test_auto_correct_lifts_dark_gray() {
        let img = JsRaster::new(2, 2, [100u8, 100, 100, 255].repeat(4));
        let out = auto_correct(&img);
        assert_eq!(&out.pixels()[0..4], &[130, 130, 130, 255]);
        // Input untouched
        assert_eq!(&img.pixels()[0..4], &[100, 100, 100, 255]);
    }

    #[test]
    fn test_apply_identity_filter() {
        let img = JsRaster::new(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 128]);
        let out = apply_filter_triple(&img, &JsFilterTriple::from(FilterTriple::identity()));
        assert_eq!(out.pixels(), img.pixels());
    }
}
