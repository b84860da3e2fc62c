//! Image decoding for the crop editor.
//!
//! This module provides functionality for:
//! - Decoding uploaded photos (JPEG, PNG, WebP) into RGBA rasters
//! - Applying EXIF orientation so phone portraits arrive upright
//! - Downsampling rasters to a small grid for brightness analysis
//!
//! Decoding is the only fallible step of an editing session. Everything that
//! happens to a raster afterwards is total.

mod reader;
mod resize;
mod types;

pub use reader::decode_image;
pub use resize::{downsample_for_analysis, sample_dimensions};
pub use types::{LoadError, Orientation, Raster, CHANNELS};
