//! Photo editing session.
//!
//! A session exists only once its image has decoded, so gestures and
//! extraction can never run against a missing raster. It owns three things
//! exclusively:
//!
//! - the pristine decoded raster, never modified;
//! - the working raster, either a copy of the pristine one or its
//!   auto-corrected rewrite;
//! - the crop controller.
//!
//! `confirm` and `cancel` take the session by value, so it cannot be used
//! after either.

use std::borrow::Cow;

use crate::config::EditorConfig;
use crate::decode::{decode_image, LoadError, Raster};
use crate::encode::{encode_raster_jpeg, EncodeError};
use crate::interaction::{
    hit_test, render_overlay, CropController, DisplayScale, Handle, OverlayGeometry, OverlayStyle,
    Point, ViewportScale,
};
use crate::tone::{
    apply_filter_triple, auto_correct, derive_filter_triple, measure_brightness, Brightness,
    FilterTriple,
};
use crate::transform::{extract, CropRegion};

/// Kind of pointer that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// What the host should do with a pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResponse {
    /// The region changed and the overlay should be redrawn.
    pub changed: bool,
    /// Suppress the platform's default scroll/pan for this event.
    pub prevent_default: bool,
}

/// One crop-and-correct editing session over a single photo.
#[derive(Debug, Clone)]
pub struct Session {
    config: EditorConfig,
    pristine: Raster,
    working: Raster,
    corrected: bool,
    preview_filter: Option<FilterTriple>,
    controller: CropController,
    viewport: ViewportScale,
}

impl Session {
    /// Decode `bytes` and start a session with the default configuration.
    pub fn open(bytes: &[u8]) -> Result<Self, LoadError> {
        Self::open_with_config(bytes, EditorConfig::default())
    }

    /// Decode `bytes` and start a session.
    ///
    /// On failure no session exists; the caller may retry with other bytes.
    pub fn open_with_config(bytes: &[u8], config: EditorConfig) -> Result<Self, LoadError> {
        let raster = decode_image(bytes).inspect_err(|e| {
            log::warn!("photo editor could not load image: {e}");
        })?;
        Self::from_raster(raster, config)
    }

    /// Start a session over an already decoded raster.
    pub fn from_raster(raster: Raster, config: EditorConfig) -> Result<Self, LoadError> {
        if raster.is_empty() {
            return Err(LoadError::EmptyImage {
                width: raster.width,
                height: raster.height,
            });
        }

        let config = config.validate();
        let controller = CropController::new(raster.width, raster.height, &config);
        let viewport = ViewportScale::new(raster.width);
        log::debug!(
            "editor session opened on {}x{} raster, crop {:?}",
            raster.width,
            raster.height,
            controller.region()
        );

        Ok(Self {
            config,
            working: raster.clone(),
            pristine: raster,
            corrected: false,
            preview_filter: None,
            controller,
            viewport,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.pristine.width
    }

    pub fn height(&self) -> u32 {
        self.pristine.height
    }

    pub fn crop_region(&self) -> CropRegion {
        self.controller.region()
    }

    pub fn is_corrected(&self) -> bool {
        self.corrected
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// The raster the crop is taken from (corrected when the toggle is on).
    pub fn working_raster(&self) -> &Raster {
        &self.working
    }

    /// The decoded image as loaded.
    pub fn pristine_raster(&self) -> &Raster {
        &self.pristine
    }

    /// Brightness of the working raster.
    pub fn brightness(&self) -> Brightness {
        measure_brightness(&self.working, &self.config.tone)
    }

    /// Flip the destructive auto correction.
    ///
    /// Turning it on rewrites a fresh copy of the pristine raster; turning it
    /// off copies the pristine pixels back, so the result is bit-exact. An
    /// active preview filter is re-derived from the new working raster.
    pub fn toggle_auto_correction(&mut self) {
        self.working.clone_from(&self.pristine);
        self.corrected = !self.corrected;
        if self.corrected {
            auto_correct(&mut self.working, &self.config.tone);
        }
        self.refresh_preview_filter();
        log::debug!("auto correction {}", if self.corrected { "on" } else { "off" });
    }

    fn refresh_preview_filter(&mut self) {
        if self.preview_filter.is_some() {
            self.preview_filter = Some(derive_filter_triple(self.brightness(), &self.config.tone));
        }
    }

    /// Flip the non-destructive preview filter and return the active filter.
    ///
    /// The filter is derived from the working raster when switched on. The
    /// working raster is never modified by it.
    pub fn toggle_preview_filter(&mut self) -> Option<FilterTriple> {
        self.preview_filter = match self.preview_filter {
            Some(_) => None,
            None => Some(derive_filter_triple(self.brightness(), &self.config.tone)),
        };
        self.preview_filter
    }

    pub fn preview_filter(&self) -> Option<FilterTriple> {
        self.preview_filter
    }

    /// The raster to draw: the working raster, filtered when the preview
    /// filter is on.
    pub fn display_raster(&self) -> Cow<'_, Raster> {
        match &self.preview_filter {
            Some(triple) => Cow::Owned(apply_filter_triple(&self.working, triple)),
            None => Cow::Borrowed(&self.working),
        }
    }

    /// Record the width the photo is currently displayed at.
    ///
    /// Ignored until layout produced a positive width.
    pub fn set_display_width(&mut self, width: f64) {
        self.viewport.set_displayed_width(width);
    }

    /// Image pixels per screen pixel.
    pub fn scale(&self) -> f64 {
        self.viewport.current_scale()
    }

    /// Which exposed handle lies under a screen point relative to the
    /// displayed image's top-left corner.
    pub fn handle_at(&self, screen: Point, tolerance_px: f64) -> Option<Handle> {
        let image = self.viewport.screen_to_image(screen);
        hit_test(&self.crop_region(), image, tolerance_px * self.scale())
    }

    /// Gesture start over `handle` at screen position `pos`.
    pub fn pointer_down(&mut self, handle: Handle, pos: Point) {
        self.controller.begin(handle, pos);
        log::debug!("crop gesture started on {}", handle.tag());
    }

    /// Pointer moved to screen position `pos`.
    pub fn pointer_move(&mut self, pos: Point, kind: PointerKind) -> MoveResponse {
        let dragging = self.controller.is_dragging();
        let changed = self.controller.update(pos, &self.viewport);
        MoveResponse {
            changed,
            prevent_default: dragging && kind == PointerKind::Touch,
        }
    }

    /// Gesture end (pointer up or touch end).
    pub fn pointer_up(&mut self) {
        if self.controller.is_dragging() {
            self.controller.end();
            log::debug!("crop gesture ended at {:?}", self.controller.region());
        }
    }

    /// Back to the initial centered square with correction off.
    pub fn reset(&mut self) {
        self.controller.reset();
        if self.corrected {
            self.working.clone_from(&self.pristine);
            self.corrected = false;
            self.refresh_preview_filter();
        }
        log::debug!("editor session reset");
    }

    /// Overlay layout for hosts that draw their own crop box.
    pub fn overlay(&self) -> OverlayGeometry {
        OverlayGeometry::new(&self.crop_region(), self.width(), self.height())
    }

    /// The display raster with the crop overlay painted on.
    pub fn render_overlay(&self) -> Raster {
        let style = OverlayStyle::default().scaled(self.scale());
        render_overlay(&self.display_raster(), &self.crop_region(), &style)
    }

    /// The cropped working raster. Always succeeds.
    pub fn extract(&self) -> Raster {
        extract(&self.working, &self.crop_region())
    }

    /// Finish the session and return the cropped photo as JPEG.
    ///
    /// The preview filter is a display tag and is not baked into the output.
    pub fn confirm(self) -> Result<Vec<u8>, EncodeError> {
        let cropped = self.extract();
        log::debug!(
            "editor session confirmed: {}x{} crop, corrected: {}",
            cropped.width,
            cropped.height,
            self.corrected
        );
        encode_raster_jpeg(&cropped, self.config.jpeg_quality)
    }

    /// Abandon the session. Nothing is written back.
    pub fn cancel(self) {
        log::debug!("editor session cancelled");
    }
}
