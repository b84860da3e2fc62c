//! Editor configuration.
//!
//! Every constant of the crop tool and the tone normalization lives here so
//! that hosts can tune them (e.g. from a JS settings object) without touching
//! the algorithms. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::encode::DEFAULT_JPEG_QUALITY;

/// Smallest crop edge, in image pixels.
pub const MIN_CROP_SIZE: u32 = 50;

/// Share of the shorter raster side covered by the initial crop square.
pub const INITIAL_CROP_FRACTION: f64 = 0.8;

/// Tone normalization parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Brightness the preview filter aims for (0-255 scale).
    pub preview_target: f32,
    /// Measured brightness is raised to this floor before dividing.
    pub preview_floor: u8,
    /// Lower clamp for the brightness multiplier.
    pub preview_min_mul: f32,
    /// Upper clamp for the brightness multiplier.
    pub preview_max_mul: f32,
    /// Constant saturation multiplier.
    pub saturate_mul: f32,
    /// Contrast when the image had to be brightened strongly.
    pub contrast_boosted: f32,
    /// Contrast when the image had to be dimmed.
    pub contrast_dimmed: f32,
    /// Contrast otherwise.
    pub contrast_base: f32,
    /// Brightness the destructive rewrite lifts dark images towards.
    pub rewrite_target: u8,
    /// Contrast factor of the destructive rewrite.
    pub rewrite_contrast: f32,
    /// Width of the analysis grid.
    pub sample_width: u32,
    /// Lower bound on the number of sampled pixels.
    pub min_samples: u32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            preview_target: 135.0,
            preview_floor: 10,
            preview_min_mul: 0.8,
            preview_max_mul: 1.6,
            saturate_mul: 1.10,
            contrast_boosted: 1.15,
            contrast_dimmed: 1.10,
            contrast_base: 1.05,
            rewrite_target: 130,
            rewrite_contrast: 1.2,
            sample_width: 200,
            min_samples: 10_000,
        }
    }
}

/// Crop editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Smallest crop edge in image pixels.
    pub min_crop_size: u32,
    /// Initial crop square as a fraction of the shorter side, in (0, 1].
    pub initial_crop_fraction: f64,
    /// JPEG quality of the confirmed photo (1-100).
    pub jpeg_quality: u8,
    /// Tone normalization parameters.
    pub tone: ToneConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_crop_size: MIN_CROP_SIZE,
            initial_crop_fraction: INITIAL_CROP_FRACTION,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            tone: ToneConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull out-of-range values back into their valid ranges.
    pub fn validate(mut self) -> Self {
        self.min_crop_size = self.min_crop_size.max(1);
        if !(self.initial_crop_fraction > 0.0 && self.initial_crop_fraction <= 1.0) {
            self.initial_crop_fraction = INITIAL_CROP_FRACTION;
        }
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);

        let defaults = ToneConfig::default();
        let tone = &mut self.tone;
        for (value, default) in [
            (&mut tone.preview_target, defaults.preview_target),
            (&mut tone.preview_min_mul, defaults.preview_min_mul),
            (&mut tone.preview_max_mul, defaults.preview_max_mul),
            (&mut tone.saturate_mul, defaults.saturate_mul),
            (&mut tone.contrast_boosted, defaults.contrast_boosted),
            (&mut tone.contrast_dimmed, defaults.contrast_dimmed),
            (&mut tone.contrast_base, defaults.contrast_base),
            (&mut tone.rewrite_contrast, defaults.rewrite_contrast),
        ] {
            if !value.is_finite() {
                *value = default;
            }
        }
        tone.preview_floor = tone.preview_floor.max(1);
        if tone.preview_min_mul > tone.preview_max_mul {
            std::mem::swap(&mut tone.preview_min_mul, &mut tone.preview_max_mul);
        }
        tone.sample_width = tone.sample_width.max(1);
        self
    }
}
