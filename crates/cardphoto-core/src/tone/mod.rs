//! Tone normalization engine.
//!
//! One measurement, two ways of acting on it:
//!
//! - [`measure_brightness`] averages BT.601 luminance over a downsampled grid
//!   and returns a [`Brightness`] value object.
//! - [`derive_filter_triple`] turns it into brightness/contrast/saturation
//!   multipliers applied at display time. The raster is never touched; see
//!   [`apply_filter_triple`] for a software rendition of that transform.
//! - [`auto_correct`] rewrites the pixel buffer in place: lift dark images
//!   towards the target brightness, then stretch contrast around mid-gray.
//!   The rewrite is lossy, so undoing it means restoring a retained copy.
//!
//! Every function here is a pure function of its inputs.

mod analyze;
mod filter;
mod rewrite;

pub use analyze::{analyze_upload, mean_brightness, measure_brightness, Brightness};
pub use filter::{apply_filter_triple, derive_filter_triple, FilterTriple};
pub use rewrite::{auto_correct, correction_lut, rewrite_offset};
