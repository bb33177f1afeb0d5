//! HCL: the polar form of CIE LUV
//!
//! - **H** (Hue): angle in the u–v plane, radians in `0..2π`
//! - **C** (Chroma): distance from the neutral axis
//! - **L** (Luminance): same as LUV lightness, 0.0..=1.0
//!
//! Polar and Cartesian forms are exact inverses; nothing is clamped here.

use std::f64::consts::TAU;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::luv::Luv;
use super::rgb::Rgb;

/// A color in HCL (CIE LCh(uv)) space.
///
/// For achromatic colors the hue carries no information but is always a
/// finite value in `0..2π`; pure black comes out at π because the u/v
/// offsets from the white point are negative zeros.
///
/// Equality and hashing go through the RGB projection, like every other
/// color type.
#[derive(Debug, Clone, Copy)]
pub struct Hcl {
    /// Hue angle in radians, 0.0..2π
    pub hue: f64,
    /// Chroma: distance from the neutral axis (0.0 = gray)
    pub chroma: f64,
    /// Luminance: 0.0 (black) to 1.0 (white)
    pub luminance: f64,
}

impl Hcl {
    /// Create a new HCL color.
    #[inline]
    pub const fn new(hue: f64, chroma: f64, luminance: f64) -> Self {
        Self {
            hue,
            chroma,
            luminance,
        }
    }

    /// Hexadecimal projection of the RGB conversion.
    #[inline]
    pub fn index(self) -> u32 {
        Rgb::from(self).index()
    }

    /// Distance to another HCL color.
    ///
    /// Euclidean over (hue, chroma, luminance), with the hue difference taken
    /// along the shorter arc so 0.1 and 2π − 0.1 are close.
    pub fn distance(self, other: Hcl) -> f64 {
        let dh = hue_difference(self.hue, other.hue);
        let dc = self.chroma - other.chroma;
        let dl = self.luminance - other.luminance;
        (dh * dh + dc * dc + dl * dl).sqrt()
    }
}

/// Wrap an angle into `0..2π`.
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    let h = hue % TAU;
    if h < 0.0 {
        wrap_shifted(h + TAU)
    } else {
        h
    }
}

/// A tiny negative angle plus 2π rounds up to exactly 2π.
#[inline]
fn wrap_shifted(hue: f64) -> f64 {
    if hue >= TAU {
        0.0
    } else {
        hue
    }
}

/// Absolute angular difference along the shorter arc, in `0..=π`.
#[inline]
fn hue_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % TAU;
    d.min(TAU - d)
}

impl From<Luv> for Hcl {
    /// Cartesian to polar. Negative `atan2` results are shifted by 2π.
    fn from(luv: Luv) -> Self {
        let chroma = luv.u.hypot(luv.v);
        let mut hue = luv.v.atan2(luv.u);
        if hue < 0.0 {
            hue = wrap_shifted(hue + TAU);
        }
        Self {
            hue,
            chroma,
            luminance: luv.l,
        }
    }
}

impl From<Hcl> for Luv {
    fn from(hcl: Hcl) -> Self {
        Luv::new(
            hcl.luminance,
            hcl.chroma * hcl.hue.cos(),
            hcl.chroma * hcl.hue.sin(),
        )
    }
}

impl From<Rgb> for Hcl {
    fn from(rgb: Rgb) -> Self {
        Hcl::from(Luv::from(rgb))
    }
}

impl From<Hcl> for Rgb {
    fn from(hcl: Hcl) -> Self {
        Rgb::from(Luv::from(hcl))
    }
}

impl PartialEq for Hcl {
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index()
    }
}

impl Eq for Hcl {}

impl Hash for Hcl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index().hash(state);
    }
}

impl fmt::Display for Hcl {
    /// Renders as `hcl(h, c, l)`, which [`Color`](crate::Color) parses back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hcl({}, {}, {})", self.hue, self.chroma, self.luminance)
    }
}
