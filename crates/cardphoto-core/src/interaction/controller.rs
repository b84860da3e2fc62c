//! Crop gesture state machine.

use super::{DisplayScale, Handle, Point};
use crate::config::EditorConfig;
use crate::transform::CropRegion;

/// Snapshot taken when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub handle: Handle,
    /// Pointer position at gesture start, in screen pixels.
    pub anchor_pointer: Point,
    /// Crop region at gesture start.
    pub anchor_region: CropRegion,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragState),
}

/// Owns the crop region of one editing session.
#[derive(Debug, Clone)]
pub struct CropController {
    raster_width: u32,
    raster_height: u32,
    min_size: f64,
    initial: CropRegion,
    region: CropRegion,
    state: GestureState,
}

impl CropController {
    /// Start with the centered initial square on a `width x height` raster.
    ///
    /// The minimum crop size never exceeds the initial square, so rasters too
    /// small for the configured minimum still yield a valid region.
    pub fn new(raster_width: u32, raster_height: u32, config: &EditorConfig) -> Self {
        let initial =
            CropRegion::centered_square(raster_width, raster_height, config.initial_crop_fraction);
        let min_size = (config.min_crop_size as f64).min(initial.width);
        Self {
            raster_width,
            raster_height,
            min_size,
            initial,
            region: initial,
            state: GestureState::Idle,
        }
    }

    pub fn region(&self) -> CropRegion {
        self.region
    }

    pub fn initial_region(&self) -> CropRegion {
        self.initial
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn raster_size(&self) -> (u32, u32) {
        (self.raster_width, self.raster_height)
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn active_handle(&self) -> Option<Handle> {
        match self.state {
            GestureState::Dragging(drag) => Some(drag.handle),
            GestureState::Idle => None,
        }
    }

    /// Start a gesture on `handle` at screen position `pointer`.
    ///
    /// A gesture already in progress is replaced.
    pub fn begin(&mut self, handle: Handle, pointer: Point) {
        self.state = GestureState::Dragging(DragState {
            handle,
            anchor_pointer: pointer,
            anchor_region: self.region,
        });
    }

    /// Recompute the region for the current pointer position.
    ///
    /// Returns `false` when no gesture is active or the pointer/scale is not a
    /// finite number; the region is unchanged in that case.
    pub fn update(&mut self, pointer: Point, scale: &dyn DisplayScale) -> bool {
        let GestureState::Dragging(drag) = self.state else {
            return false;
        };
        let s = scale.current_scale();
        if !pointer.is_finite() || !s.is_finite() {
            return false;
        }

        let dx = (pointer.x - drag.anchor_pointer.x) * s;
        let dy = (pointer.y - drag.anchor_pointer.y) * s;
        self.region = self.dragged_region(&drag, dx, dy);
        true
    }

    /// End the active gesture, wherever the pointer is.
    pub fn end(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Back to the initial square, dropping any gesture.
    pub fn reset(&mut self) {
        self.region = self.initial;
        self.state = GestureState::Idle;
    }

    fn dragged_region(&self, drag: &DragState, dx: f64, dy: f64) -> CropRegion {
        let anchor = drag.anchor_region;
        let max_w = self.raster_width as f64;
        let max_h = self.raster_height as f64;
        let mut next = anchor;

        if drag.handle == Handle::Move {
            next.x = (anchor.x + dx).min(max_w - anchor.width).max(0.0);
            next.y = (anchor.y + dy).min(max_h - anchor.height).max(0.0);
            return next;
        }

        let edges = drag.handle.edges();
        // Rejected leading edges hold the last accepted frame, not the anchor
        let prev = self.region;

        if edges.west {
            (next.x, next.width) = resize_leading(anchor.x, anchor.width, dx, self.min_size)
                .unwrap_or((prev.x, prev.width));
        }
        if edges.east {
            next.width = resize_trailing(next.x, anchor.width, dx, self.min_size, max_w);
        }
        if edges.north {
            (next.y, next.height) = resize_leading(anchor.y, anchor.height, dy, self.min_size)
                .unwrap_or((prev.y, prev.height));
        }
        if edges.south {
            next.height = resize_trailing(next.y, anchor.height, dy, self.min_size, max_h);
        }
        next
    }
}

/// Move the leading (west/north) edge by `delta`.
///
/// Accepted only if the new length stays above `min` and the edge stays on the
/// raster; otherwise the edge does not respond this frame.
fn resize_leading(pos: f64, len: f64, delta: f64, min: f64) -> Option<(f64, f64)> {
    let new_len = len - delta;
    let new_pos = pos + delta;
    (new_len > min && new_pos >= 0.0).then_some((new_pos, new_len))
}

/// Move the trailing (east/south) edge by `delta`, clamped to
/// `[min, limit - pos]`.
fn resize_trailing(pos: f64, len: f64, delta: f64, min: f64, limit: f64) -> f64 {
    (len + delta).min(limit - pos).max(min)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
