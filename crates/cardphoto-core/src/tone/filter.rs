//! Non-destructive display filter.
//!
//! The filter triple is what the card renderer attaches to the photo: a
//! brightness, a contrast and a saturation multiplier composed in that order.
//! The raster stays untouched, so switching the filter off restores the
//! original appearance exactly.

use serde::{Deserialize, Serialize};

use super::Brightness;
use crate::config::ToneConfig;
use crate::decode::{Raster, CHANNELS};

/// Brightness, contrast and saturation multipliers (1.0 = unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterTriple {
    pub brightness: f32,
    pub contrast: f32,
    pub saturate: f32,
}

impl Default for FilterTriple {
    fn default() -> Self {
        Self::identity()
    }
}

impl FilterTriple {
    pub const fn identity() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturate: 1.0,
        }
    }

    /// Generic boost used when the auto filter is re-enabled but analysis
    /// produced nothing.
    pub const fn fallback() -> Self {
        Self {
            brightness: 1.1,
            contrast: 1.1,
            saturate: 1.0,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Render as a CSS `filter` value, e.g.
    /// `brightness(1.60) contrast(1.15) saturate(1.1)`.
    pub fn to_css(&self) -> String {
        format!(
            "brightness({:.2}) contrast({:.2}) saturate({})",
            self.brightness, self.contrast, self.saturate
        )
    }
}

/// Derive the display filter for a measured brightness.
///
/// `brightness = clamp(target / max(b, floor), min, max)`; contrast is raised
/// more when the image needed a strong lift (flat "grey fog" look) and a
/// little when it was dimmed; saturation gets a constant boost.
pub fn derive_filter_triple(measured: Brightness, config: &ToneConfig) -> FilterTriple {
    let b = measured.value().max(config.preview_floor) as f32;
    let brightness =
        (config.preview_target / b).clamp(config.preview_min_mul, config.preview_max_mul);

    let contrast = if brightness > 1.2 {
        config.contrast_boosted
    } else if brightness < 0.9 {
        config.contrast_dimmed
    } else {
        config.contrast_base
    };

    FilterTriple {
        brightness,
        contrast,
        saturate: config.saturate_mul,
    }
}

/// Apply a filter triple in software, returning a new raster.
///
/// Follows the filter-effects definitions: brightness scales each channel,
/// contrast scales around 0.5, saturation uses the luminance-preserving
/// matrix. Each stage clamps to [0, 1]. Alpha is copied through.
pub fn apply_filter_triple(raster: &Raster, triple: &FilterTriple) -> Raster {
    if triple.is_identity() {
        return raster.clone();
    }

    let s = triple.saturate;
    let matrix = [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ];

    let mut out = raster.clone();
    for px in out.pixels.chunks_exact_mut(CHANNELS) {
        let mut rgb = [0.0f32; 3];
        for (c, v) in rgb.iter_mut().enumerate() {
            let x = px[c] as f32 / 255.0;
            let x = (x * triple.brightness).clamp(0.0, 1.0);
            *v = ((x - 0.5) * triple.contrast + 0.5).clamp(0.0, 1.0);
        }

        for (c, row) in matrix.iter().enumerate() {
            let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
            px[c] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
    out
}
