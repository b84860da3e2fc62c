//! Cardphoto WASM - WebAssembly bindings for the card photo editor
//!
//! This crate exposes the cardphoto-core engine to the browser.
//!
//! # Module Structure
//!
//! - `session` - Interactive crop and tone session (`JsCropSession`)
//! - `tone` - Upload analysis and display filter
//! - `types` - WASM-compatible wrapper types for raster data
//! - `decode` - Image decoding bindings (JPEG, PNG, WebP)
//! - `encode` - JPEG export bindings
//! - `transform` - Crop extraction
//!
//! # Usage
//!
//! ```typescript
//! import init, { analyze_photo_filter, JsCropSession } from '@cardphoto/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! photo.style.filter = analyze_photo_filter(bytes);
//!
//! const session = new JsCropSession(bytes, undefined);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod session;
mod tone;
mod transform;
mod types;

pub use decode::decode_image;
pub use encode::encode_raster_jpeg;
pub use session::JsCropSession;
pub use tone::{
    analyze_photo, analyze_photo_filter, apply_filter_triple, auto_correct, measure_brightness,
    JsFilterTriple,
};
pub use transform::extract;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics and `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) finds the logger already set
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
