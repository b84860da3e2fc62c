//! Crop geometry and extraction.
//!
//! # Coordinate System
//!
//! - Crop regions are in image pixels of the full-resolution raster, never in
//!   screen units
//! - Coordinates stay fractional while the user drags; they are snapped to
//!   whole pixels only when the sub-image is extracted
//! - Origin is the top-left corner

mod crop;

pub use crop::{extract, CropRegion, PixelRect};
