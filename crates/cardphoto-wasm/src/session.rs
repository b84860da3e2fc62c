//! Crop editor session bindings.
//!
//! [`JsCropSession`] is the editor modal's engine. The host forwards pointer
//! events with the handle that was grabbed and reports the width the photo
//! is displayed at; the session keeps the crop region valid and hands back
//! the final JPEG.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsCropSession(bytes, undefined);
//! session.set_display_width(img.clientWidth);
//!
//! handleEl.onpointerdown = (e) => session.pointer_down('se', e.clientX, e.clientY);
//! window.onpointermove = (e) => {
//!   if (session.pointer_move(e.clientX, e.clientY, e.pointerType === 'touch')) {
//!     e.preventDefault();
//!   }
//!   drawOverlay(session.overlay());
//! };
//! window.onpointerup = () => session.pointer_up();
//!
//! const jpeg = session.confirm(); // session is consumed
//! ```

use crate::tone::JsFilterTriple;
use crate::types::JsRaster;
use cardphoto_core::config::EditorConfig;
use cardphoto_core::interaction::{Handle, Point};
use cardphoto_core::session::{PointerKind, Session};
use wasm_bindgen::prelude::*;

/// Interactive crop and tone session over one photo.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Decode `bytes` and open a session.
    ///
    /// `config` is an optional object with any of the `EditorConfig` fields
    /// (`min_crop_size`, `initial_crop_fraction`, `jpeg_quality`, `tone`);
    /// missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config object is malformed or the photo
    /// cannot be decoded.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8], config: JsValue) -> Result<JsCropSession, JsValue> {
        let config = parse_config(config)?;
        Session::open_with_config(bytes, config)
            .map(|inner| Self { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    #[wasm_bindgen(getter)]
    pub fn crop_x(&self) -> f64 {
        self.inner.crop_region().x
    }

    #[wasm_bindgen(getter)]
    pub fn crop_y(&self) -> f64 {
        self.inner.crop_region().y
    }

    #[wasm_bindgen(getter)]
    pub fn crop_width(&self) -> f64 {
        self.inner.crop_region().width
    }

    #[wasm_bindgen(getter)]
    pub fn crop_height(&self) -> f64 {
        self.inner.crop_region().height
    }

    #[wasm_bindgen(getter)]
    pub fn is_corrected(&self) -> bool {
        self.inner.is_corrected()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Record the displayed width of the photo, in CSS pixels.
    pub fn set_display_width(&mut self, width: f64) {
        self.inner.set_display_width(width);
    }

    /// Start a gesture. `handle` is one of `move`, `n`, `s`, `e`, `w`,
    /// `ne`, `nw`, `se`, `sw`.
    pub fn pointer_down(&mut self, handle: &str, x: f64, y: f64) -> Result<(), JsValue> {
        let handle = Handle::from_tag(handle)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown crop handle: {handle}")))?;
        self.inner.pointer_down(handle, Point::new(x, y));
        Ok(())
    }

    /// Continue a gesture. Returns whether the host should call
    /// `preventDefault()` on the event.
    pub fn pointer_move(&mut self, x: f64, y: f64, is_touch: bool) -> bool {
        let kind = if is_touch {
            PointerKind::Touch
        } else {
            PointerKind::Mouse
        };
        self.inner.pointer_move(Point::new(x, y), kind).prevent_default
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    /// Handle tag under a point relative to the displayed photo, or
    /// `undefined` if the point misses the crop box.
    pub fn handle_at(&self, x: f64, y: f64, tolerance: f64) -> Option<String> {
        self.inner
            .handle_at(Point::new(x, y), tolerance)
            .map(|h| h.tag().to_string())
    }

    /// Overlay layout (percentages, thirds guides and handles) as a plain
    /// object.
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.overlay()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The displayed photo with the overlay painted on.
    pub fn render_overlay(&self) -> JsRaster {
        JsRaster::from_raster(self.inner.render_overlay())
    }

    /// The photo to display (corrected and/or filtered as toggled).
    pub fn display_raster(&self) -> JsRaster {
        JsRaster::from_raster(self.inner.display_raster().into_owned())
    }

    pub fn toggle_auto_correction(&mut self) {
        self.inner.toggle_auto_correction();
    }

    /// Flip the preview filter; returns the active filter, if any.
    pub fn toggle_preview_filter(&mut self) -> Option<JsFilterTriple> {
        self.inner.toggle_preview_filter().map(JsFilterTriple::from)
    }

    /// Active preview filter as a CSS string, or `""` when off.
    pub fn preview_filter_css(&self) -> String {
        self.inner
            .preview_filter()
            .map(|t| t.to_css())
            .unwrap_or_default()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// The cropped photo as a raster, without ending the session.
    pub fn extract(&self) -> JsRaster {
        JsRaster::from_raster(self.inner.extract())
    }

    /// End the session and return the cropped photo as JPEG bytes.
    pub fn confirm(self) -> Result<Vec<u8>, JsValue> {
        self.inner.confirm().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// End the session without producing output.
    pub fn cancel(self) {
        self.inner.cancel();
    }
}

fn parse_config(value: JsValue) -> Result<EditorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&format!("Invalid editor config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardphoto_core::decode::Raster;

    fn session(width: u32, height: u32) -> JsCropSession {
        let raster = Raster::filled(width, height, [90, 100, 110, 255]);
        JsCropSession {
            inner: Session::from_raster(raster, EditorConfig::default()).unwrap(),
        }
    }

    #[test]
    fn test_getters_after_open() {
        let s = session(1000, 800);
        assert_eq!((s.width(), s.height()), (1000, 800));
        assert_eq!((s.crop_x(), s.crop_y()), (180.0, 80.0));
        assert_eq!((s.crop_width(), s.crop_height()), (640.0, 640.0));
        assert!(!s.is_corrected());
    }

    #[test]
    fn test_touch_drag_reports_prevent_default() {
        let mut s = session(1000, 800);
        s.set_display_width(1000.0);
        s.inner.pointer_down(Handle::ResizeSE, Point::new(0.0, 0.0));
        assert!(s.pointer_move(50.0, 50.0, true));
        assert!(!s.pointer_move(60.0, 60.0, false));
        s.pointer_up();
        assert_eq!(s.crop_width(), 700.0);
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_handle_at_tags() {
        let s = session(1000, 800);
        assert_eq!(s.handle_at(180.0, 80.0, 10.0).as_deref(), Some("nw"));
        assert_eq!(s.handle_at(500.0, 400.0, 10.0).as_deref(), Some("move"));
        assert_eq!(s.handle_at(5.0, 5.0, 10.0), None);
    }

    #[test]
    fn test_toggles_and_reset() {
        let mut s = session(200, 200);
        s.toggle_auto_correction();
        assert!(s.is_corrected());
        assert!(s.toggle_preview_filter().is_some());
        assert!(!s.preview_filter_css().is_empty());
        s.reset();
        assert!(!s.is_corrected());
    }

    #[test]
    fn test_extract_size() {
        let s = session(300, 200);
        let out = s.extract();
        assert_eq!((out.width(), out.height()), (160, 160));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_open_invalid_bytes() {
        assert!(JsCropSession::new(b"nope", JsValue::UNDEFINED).is_err());
    }

    #[wasm_bindgen_test]
    fn test_unknown_handle_rejected() {
        let raster = cardphoto_core::decode::Raster::filled(100, 100, [0, 0, 0, 255]);
        let mut s = JsCropSession {
            inner: Session::from_raster(raster, EditorConfig::default()).unwrap(),
        };
        assert!(s.pointer_down("middle", 0.0, 0.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_confirm_returns_jpeg() {
        let raster = cardphoto_core::decode::Raster::filled(100, 100, [50, 60, 70, 255]);
        let s = JsCropSession {
            inner: Session::from_raster(raster, EditorConfig::default()).unwrap(),
        };
        let jpeg = s.confirm().unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_overlay_is_object() {
        let raster = cardphoto_core::decode::Raster::filled(100, 100, [50, 60, 70, 255]);
        let s = JsCropSession {
            inner: Session::from_raster(raster, EditorConfig::default()).unwrap(),
        };
        assert!(s.overlay().unwrap().is_object());
    }
}
