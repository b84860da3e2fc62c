//! Interactive crop tool.
//!
//! The controller owns the crop rectangle in image pixels and turns pointer
//! gestures, reported in screen pixels, into rectangle updates:
//!
//! ```text
//!   Idle --begin(handle)--> Dragging(handle) --update--> Dragging(handle)
//!     ^                          |
//!     +---------end--------------+
//! ```
//!
//! Screen deltas become image deltas through a [`DisplayScale`], which keeps
//! the geometry independent of whatever surface draws the photo. Handles are
//! a closed set; corners are the composition of two edge constraints.

mod controller;
mod handle;
mod overlay;
mod scale;

pub use controller::{CropController, DragState, GestureState};
pub use handle::{hit_test, Edges, Handle};
pub use overlay::{render_overlay, HandleAnchor, OverlayGeometry, OverlayStyle};
pub use scale::{DisplayScale, FixedScale, Point, ViewportScale};
