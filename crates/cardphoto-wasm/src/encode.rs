//! Image encoding WASM bindings.
//!
//! - [`encode_raster_jpeg`] - Encode a JsRaster (RGBA) to JPEG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_raster_jpeg } from '@cardphoto/wasm';
//!
//! const jpeg = encode_raster_jpeg(cropped, 90);
//! const blob = new Blob([jpeg], { type: 'image/jpeg' });
//! ```

use crate::types::JsRaster;
use cardphoto_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsRaster to JPEG bytes. Transparent pixels are composited over
/// black.
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match
/// `width * height * 4`, a dimension is zero, or encoding fails.
#[wasm_bindgen]
pub fn encode_raster_jpeg(image: &JsRaster, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_raster_jpeg(&image.to_raster(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_raster_creates_valid_jpeg() {
        let img = JsRaster::new(10, 10, vec![128u8; 10 * 10 * 4]);
        let jpeg = encode::encode_raster_jpeg(&img.to_raster(), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
