//! CIE L\*u\*v\* color space
//!
//! LUV is computed from XYZ relative to the D65 2° reference white. Lightness
//! follows the piecewise CIE curve: a cube root above `(6/29)^3` and a linear
//! segment below it, which avoids the vertical tangent at black.
//!
//! Unlike the CIE convention (L in 0..=100) all three components are divided
//! by 100 here, so lightness runs from 0.0 (black) to 1.0 (white).

use std::sync::LazyLock;

use super::rgb::Rgb;
use super::xyz::Xyz;

/// D65 2° reference white.
pub const WHITE_POINT: Xyz = Xyz::new(0.95047, 1.0, 1.08883);

/// `(6/29)^3`, luminance below which lightness is linear.
pub const EPSILON: f64 = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);

/// `(29/3)^3`, slope of the linear lightness segment.
pub const KAPPA: f64 = (29.0 / 3.0) * (29.0 / 3.0) * (29.0 / 3.0);

/// Chromaticity `(u', v')` of [`WHITE_POINT`], computed once.
static WHITE_UV: LazyLock<(f64, f64)> = LazyLock::new(|| uv_from_xyz(WHITE_POINT));

/// Chromaticity coordinates `(u', v')` of an XYZ color.
///
/// Returns `(0.0, 0.0)` when both `x` and `y` are zero so black does not
/// divide by zero.
pub fn uv_from_xyz(xyz: Xyz) -> (f64, f64) {
    if xyz.x == 0.0 && xyz.y == 0.0 {
        return (0.0, 0.0);
    }
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    (4.0 * xyz.x / d, 9.0 * xyz.y / d)
}

/// A color in CIE LUV space, scaled to the library's 0..=1 lightness.
///
/// At `l == 0.0` the `u`/`v` direction carries no information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Green-red chromatic axis
    pub u: f64,
    /// Blue-yellow chromatic axis
    pub v: f64,
}

impl Luv {
    /// Create a new LUV color.
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }
}

impl From<Xyz> for Luv {
    fn from(xyz: Xyz) -> Self {
        let (u, v) = uv_from_xyz(xyz);
        let (u0, v0) = *WHITE_UV;

        let l = if xyz.y > EPSILON {
            116.0 * xyz.y.cbrt() - 16.0
        } else {
            KAPPA * xyz.y
        };

        Self {
            l: l / 100.0,
            u: 13.0 * l * (u - u0) / 100.0,
            v: 13.0 * l * (v - v0) / 100.0,
        }
    }
}

impl From<Luv> for Xyz {
    /// Inverse of the LUV transform.
    ///
    /// Zero lightness returns [`Xyz::BLACK`] exactly. A degenerate `v'` of
    /// zero (only reachable from hand-made, out-of-gamut LUV values) also
    /// maps to black rather than producing infinities.
    fn from(luv: Luv) -> Self {
        if luv.l == 0.0 {
            return Xyz::BLACK;
        }

        let (u0, v0) = *WHITE_UV;
        let l = luv.l * 100.0;
        let u = luv.u * 100.0;
        let v = luv.v * 100.0;

        let up = u / (13.0 * l) + u0;
        let vp = v / (13.0 * l) + v0;
        if vp == 0.0 {
            return Xyz::BLACK;
        }

        let y = if l > 8.0 {
            let t = (l + 16.0) / 116.0;
            t * t * t
        } else {
            l / KAPPA
        };

        Xyz {
            x: y * 9.0 * up / (4.0 * vp),
            y,
            z: y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp),
        }
    }
}

impl From<Rgb> for Luv {
    fn from(rgb: Rgb) -> Self {
        Luv::from(Xyz::from(rgb))
    }
}

impl From<Luv> for Rgb {
    fn from(luv: Luv) -> Self {
        Rgb::from(Xyz::from(luv))
    }
}
