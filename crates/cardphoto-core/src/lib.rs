//! Cardphoto Core - photo crop and tone normalization
//!
//! This crate provides the engine behind the card photo editor: decoding an
//! upload into an RGBA raster, interactive crop geometry, brightness analysis
//! with its display filter and destructive auto correction, and JPEG export
//! of the final crop.
//!
//! [`Session`] ties the pieces together; the modules can also be used on
//! their own.

pub mod config;
pub mod decode;
pub mod encode;
pub mod interaction;
pub mod luminance;
pub mod session;
pub mod tone;
pub mod transform;

pub use config::{EditorConfig, ToneConfig, MIN_CROP_SIZE};
pub use decode::{decode_image, LoadError, Raster};
pub use encode::{encode_raster_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
pub use interaction::{CropController, DisplayScale, Handle, Point};
pub use session::{MoveResponse, PointerKind, Session};
pub use tone::{analyze_upload, auto_correct, measure_brightness, Brightness, FilterTriple};
pub use transform::{extract, CropRegion};
