//! Screen-to-image scale.
//!
//! The photo is drawn smaller than its pixel size, so one screen pixel of
//! pointer travel covers `raster width / displayed width` image pixels. The
//! controller only asks for the current factor; who measures the displayed
//! width is up to the host.

use serde::{Deserialize, Serialize};

/// A 2D position or delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Capability: "image pixels per screen pixel, right now".
pub trait DisplayScale {
    fn current_scale(&self) -> f64;
}

/// A constant scale, for tests and headless use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScale(pub f64);

impl DisplayScale for FixedScale {
    fn current_scale(&self) -> f64 {
        self.0
    }
}

/// Scale derived from the raster width and the width it is displayed at.
///
/// Until a displayed width is known the scale is 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportScale {
    raster_width: u32,
    displayed_width: Option<f64>,
}

impl ViewportScale {
    pub fn new(raster_width: u32) -> Self {
        Self {
            raster_width,
            displayed_width: None,
        }
    }

    /// Record a new displayed width (e.g. after a viewport resize).
    ///
    /// Non-positive or non-finite widths are ignored, since they mean layout
    /// has not happened yet. Returns whether the width was accepted.
    pub fn set_displayed_width(&mut self, width: f64) -> bool {
        if !(width.is_finite() && width > 0.0) {
            return false;
        }
        self.displayed_width = Some(width);
        true
    }

    pub fn displayed_width(&self) -> Option<f64> {
        self.displayed_width
    }

    /// Convert a point relative to the displayed image's top-left corner into
    /// image pixels.
    pub fn screen_to_image(&self, point: Point) -> Point {
        let s = self.current_scale();
        Point::new(point.x * s, point.y * s)
    }
}

impl DisplayScale for ViewportScale {
    fn current_scale(&self) -> f64 {
        match self.displayed_width {
            Some(w) => self.raster_width as f64 / w,
            None => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_scale() {
        assert_eq!(FixedScale(2.5).current_scale(), 2.5);
    }

    #[test]
    fn test_viewport_scale_default() {
        let s = ViewportScale::new(4000);
        assert_eq!(s.current_scale(), 1.0);
        assert_eq!(s.displayed_width(), None);
    }

    #[test]
    fn test_viewport_scale_after_layout() {
        let mut s = ViewportScale::new(4000);
        assert!(s.set_displayed_width(800.0));
        assert_eq!(s.current_scale(), 5.0);

        // Viewport resize recomputes the factor
        assert!(s.set_displayed_width(1000.0));
        assert_eq!(s.current_scale(), 4.0);
    }

    #[test]
    fn test_viewport_scale_ignores_unlaid_out_width() {
        let mut s = ViewportScale::new(4000);
        s.set_displayed_width(800.0);
        assert!(!s.set_displayed_width(0.0));
        assert!(!s.set_displayed_width(f64::NAN));
        assert_eq!(s.current_scale(), 5.0);
    }

    #[test]
    fn test_screen_to_image() {
        let mut s = ViewportScale::new(2000);
        s.set_displayed_width(500.0);
        assert_eq!(s.screen_to_image(Point::new(10.0, 20.0)), Point::new(40.0, 80.0));
    }
}
