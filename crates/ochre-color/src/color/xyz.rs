//! CIE 1931 XYZ tristimulus space (D65)
//!
//! Intermediate step between linear RGB and CIE LUV. The forward matrix uses
//! the four-digit sRGB coefficients; the inverse is the exact inverse of that
//! matrix so `Rgb -> Xyz -> Rgb` is lossless to floating-point precision.

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;

/// Linear sRGB to XYZ (D65).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// XYZ (D65) to linear sRGB, inverse of [`RGB_TO_XYZ`].
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2406254773, -1.5372079722, -0.4986285987],
    [-0.9689307147, 1.8757560609, 0.0415175238],
    [0.0557101204, -0.2040210506, 1.0569959423],
];

/// A color in CIE XYZ space.
///
/// `y` is relative luminance, 0.0..=1.0 for in-gamut colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// The origin, produced for pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new XYZ color.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul(&RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
        Self { x, y, z }
    }
}

impl From<Xyz> for LinearRgb {
    /// The result is not clamped; out-of-gamut XYZ colors produce channels
    /// outside 0.0..=1.0.
    fn from(xyz: Xyz) -> Self {
        let [r, g, b] = mul(&XYZ_TO_RGB, [xyz.x, xyz.y, xyz.z]);
        Self { r, g, b }
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        Xyz::from(LinearRgb::from(rgb))
    }
}

impl From<Xyz> for Rgb {
    /// Goes through linear RGB and clamps each channel to 0.0..=1.0.
    fn from(xyz: Xyz) -> Self {
        Rgb::from(LinearRgb::from(xyz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_inverse_matches_nalgebra() {
        use nalgebra::Matrix3;

        let forward = Matrix3::from_fn(|r, c| RGB_TO_XYZ[r][c]);
        let inverse = forward.try_inverse().expect("matrix is invertible");
        for r in 0..3 {
            for c in 0..3 {
                assert!(
                    (inverse[(r, c)] - XYZ_TO_RGB[r][c]).abs() < 1e-9,
                    "inverse[{r}][{c}]: ours={}, nalgebra={}",
                    XYZ_TO_RGB[r][c],
                    inverse[(r, c)]
                );
            }
        }
    }

    #[test]
    fn test_white_is_d65() {
        let white = Xyz::from(Rgb::WHITE);
        assert!(approx_eq(white.x, 0.9505));
        assert!(approx_eq(white.y, 1.0));
        assert!(approx_eq(white.z, 1.089));
    }

    #[test]
    fn test_black_is_origin() {
        assert_eq!(Xyz::from(Rgb::BLACK), Xyz::BLACK);
        assert_eq!(Rgb::from(Xyz::BLACK), Rgb::BLACK);
    }

    #[test]
    fn test_round_trip_primaries() {
        let colors = [
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
            Rgb::new(0.2, 0.4, 0.4),
            Rgb::new(0.5, 0.5, 0.5),
            Rgb::WHITE,
        ];

        for original in colors {
            let back = Rgb::from(Xyz::from(original));
            assert!(
                approx_eq(back.red, original.red)
                    && approx_eq(back.green, original.green)
                    && approx_eq(back.blue, original.blue),
                "round trip failed for {original:?}: got {back:?}"
            );
        }
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        let rgb = Rgb::from(Xyz::new(2.0, 0.1, -1.0));
        for channel in rgb.channels() {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}
