//! JPEG encoding of the final cropped photo.
//!
//! The editor hands the card renderer a JPEG at quality 90. Encoding is the
//! step after extraction; it is the only place past decode that reports an
//! error, and only for malformed buffers or encoder failures.

mod jpeg;

pub use jpeg::{encode_jpeg, encode_raster_jpeg, flatten_rgba, EncodeError, DEFAULT_JPEG_QUALITY};
