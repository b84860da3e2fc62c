//! Brightness measurement.

use serde::{Deserialize, Serialize};

use super::{derive_filter_triple, FilterTriple};
use crate::config::ToneConfig;
use crate::decode::{decode_image, downsample_for_analysis, LoadError, Raster, CHANNELS};
use crate::luminance::luma_milli;

/// Mean perceived brightness of an image, on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Brightness(u8);

impl Brightness {
    pub const BLACK: Brightness = Brightness(0);
    pub const WHITE: Brightness = Brightness(255);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<Brightness> for f32 {
    fn from(b: Brightness) -> f32 {
        b.0 as f32
    }
}

/// Average luminance over every pixel of `raster`, rounded down.
///
/// Alpha is ignored. An empty raster measures as black.
pub fn mean_brightness(raster: &Raster) -> Brightness {
    let count = (raster.pixels.len() / CHANNELS) as u64;
    if count == 0 {
        return Brightness::BLACK;
    }

    let sum: u64 = raster
        .pixels
        .chunks_exact(CHANNELS)
        .map(|px| luma_milli(px[0], px[1], px[2]) as u64)
        .sum();

    let mean = sum / (count * 1000);
    Brightness(mean.min(255) as u8)
}

/// Measure the brightness of `raster` on its sampling grid.
///
/// The grid is `config.sample_width` wide and holds at least
/// `config.min_samples` pixels (or the whole raster if it is smaller).
pub fn measure_brightness(raster: &Raster, config: &ToneConfig) -> Brightness {
    let sample = downsample_for_analysis(raster, config.sample_width, config.min_samples);
    mean_brightness(&sample)
}

/// Decode an uploaded photo and derive its display filter.
///
/// This is the lightweight upload path: the photo itself is left as is and
/// only the filter triple is handed back to the card renderer.
pub fn analyze_upload(bytes: &[u8], config: &ToneConfig) -> Result<FilterTriple, LoadError> {
    let raster = decode_image(bytes).inspect_err(|e| {
        log::warn!("photo analysis failed: {e}");
    })?;
    let brightness = measure_brightness(&raster, config);
    let triple = derive_filter_triple(brightness, config);
    log::debug!(
        "analyzed {}x{} upload: brightness {}, filter {}",
        raster.width,
        raster.height,
        brightness.value(),
        triple.to_css()
    );
    Ok(triple)
}
