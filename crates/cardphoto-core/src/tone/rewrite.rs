//! Destructive brightness + contrast rewrite.
//!
//! Used by the editor's auto toggle. Each of R, G and B goes through the same
//! two steps: add the brightness offset (saturating at 255), then stretch
//! contrast around 128 and clamp. Alpha is left alone. Because both steps
//! clamp, the rewrite cannot be inverted.

use super::{measure_brightness, Brightness};
use crate::config::ToneConfig;
use crate::decode::{Raster, CHANNELS};

/// Offset added to every channel: `max(0, target - b)`.
pub fn rewrite_offset(measured: Brightness, config: &ToneConfig) -> u8 {
    config.rewrite_target.saturating_sub(measured.value())
}

/// Lookup table mapping an input channel value to its corrected value.
pub fn correction_lut(offset: u8, contrast: f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, out) in lut.iter_mut().enumerate() {
        let lifted = (i as u32 + offset as u32).min(255) as f32;
        let stretched = contrast * (lifted - 128.0) + 128.0;
        *out = stretched.clamp(0.0, 255.0).round() as u8;
    }
    lut
}

/// Measure `raster` and rewrite its pixels in place.
///
/// Returns the brightness measured before the rewrite.
pub fn auto_correct(raster: &mut Raster, config: &ToneConfig) -> Brightness {
    let measured = measure_brightness(raster, config);
    let offset = rewrite_offset(measured, config);
    let lut = correction_lut(offset, config.rewrite_contrast);

    for px in raster.pixels.chunks_exact_mut(CHANNELS) {
        px[0] = lut[px[0] as usize];
        px[1] = lut[px[1] as usize];
        px[2] = lut[px[2] as usize];
    }

    log::debug!(
        "auto correction: brightness {} -> offset {offset}, contrast {}",
        measured.value(),
        config.rewrite_contrast
    );
    measured
}
