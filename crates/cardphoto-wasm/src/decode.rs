//! Image decoding WASM bindings.
//!
//! - [`decode_image`] - Decode a JPEG, PNG or WebP upload into an RGBA raster
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@cardphoto/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const raster = decode_image(bytes);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(raster.pixels()), raster.width), 0, 0);
//! ```

use crate::types::JsRaster;
use cardphoto_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded photo from bytes.
///
/// EXIF orientation is applied, so the raster is upright.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image format or the
/// file is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_image(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_decode_rejects_garbage() {
        assert!(decode::decode_image(&[0x00, 0x01, 0x02]).is_err());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_image_invalid() {
        assert!(decode_image(&[0xFF, 0xD8, 0x00]).is_err());
    }
}
