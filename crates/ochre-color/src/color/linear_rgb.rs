//! Linear RGB color type
//!
//! Linear RGB is sRGB with the transfer function removed. It is the only
//! space where the XYZ matrices apply.

use super::gamma::{delinearize, linearize};
use super::rgb::Rgb;

/// A color in linear RGB color space.
///
/// Values are in 0.0..=1.0 for in-gamut colors but may leave that range when
/// produced from XYZ coordinates that fall outside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Remove the sRGB transfer function from each channel.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: linearize(rgb.red),
            g: linearize(rgb.green),
            b: linearize(rgb.blue),
        }
    }
}

impl From<LinearRgb> for Rgb {
    /// Apply the sRGB transfer function and clamp each channel to 0.0..=1.0.
    ///
    /// The clamp absorbs floating-point overshoot and out-of-gamut values
    /// coming back from XYZ; NaN channels collapse to 0.0.
    fn from(linear: LinearRgb) -> Self {
        Rgb::new(
            clamp_unit(delinearize(linear.r)),
            clamp_unit(delinearize(linear.g)),
            clamp_unit(delinearize(linear.b)),
        )
    }
}

#[inline]
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
