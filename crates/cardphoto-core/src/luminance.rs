//! Perceived luminance using ITU-R BT.601 coefficients.
//!
//! Both tone normalization paths measure brightness with the same weights.
//! The weights are kept as integers in thousandths so that sums over whole
//! rasters are exact: a gray pixel of value `v` weighs exactly `1000 * v`.

/// BT.601 weight of the red channel, in thousandths.
pub const LUMA_R_MILLI: u32 = 299;

/// BT.601 weight of the green channel, in thousandths.
pub const LUMA_G_MILLI: u32 = 587;

/// BT.601 weight of the blue channel, in thousandths.
pub const LUMA_B_MILLI: u32 = 114;

/// Luminance of one pixel, scaled by 1000 (0 to 255_000).
#[inline]
pub fn luma_milli(r: u8, g: u8, b: u8) -> u32 {
    LUMA_R_MILLI * r as u32 + LUMA_G_MILLI * g as u32 + LUMA_B_MILLI * b as u32
}
