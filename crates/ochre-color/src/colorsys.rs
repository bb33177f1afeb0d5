//! Tuple-based conversion functions.
//!
//! Thin wrappers over the typed [`From`] chain for callers that work with
//! plain `(f64, f64, f64)` triples. RGB triples are gamma-encoded and in
//! `[0, 1]`; LUV and HCL lightness is scaled to `[0, 1]`.

use crate::color::{luv, Hcl, Hex, Luv, Rgb, Xyz};
use crate::error::ColorError;
use crate::palette::{Ansi256, WebColor};

pub type Triple = (f64, f64, f64);

#[inline]
fn rgb((r, g, b): Triple) -> Rgb {
    Rgb::new(r, g, b)
}

#[inline]
fn triple(rgb: Rgb) -> Triple {
    (rgb.red, rgb.green, rgb.blue)
}

pub fn rgb_to_xyz(r: f64, g: f64, b: f64) -> Triple {
    let xyz = Xyz::from(rgb((r, g, b)));
    (xyz.x, xyz.y, xyz.z)
}

/// Out-of-gamut results are clamped to `[0, 1]`.
pub fn xyz_to_rgb(x: f64, y: f64, z: f64) -> Triple {
    triple(Rgb::from(Xyz::new(x, y, z)))
}

/// Chromaticity coordinates `(u', v')`.
pub fn uv_from_xyz(x: f64, y: f64, z: f64) -> (f64, f64) {
    luv::uv_from_xyz(Xyz::new(x, y, z))
}

pub fn xyz_to_luv(x: f64, y: f64, z: f64) -> Triple {
    let luv = Luv::from(Xyz::new(x, y, z));
    (luv.l, luv.u, luv.v)
}

pub fn luv_to_xyz(l: f64, u: f64, v: f64) -> Triple {
    let xyz = Xyz::from(Luv::new(l, u, v));
    (xyz.x, xyz.y, xyz.z)
}

/// Returns `(l, c, h)` with `h` in `[0, 2π)`.
pub fn luv_to_lch(l: f64, u: f64, v: f64) -> Triple {
    let hcl = Hcl::from(Luv::new(l, u, v));
    (hcl.luminance, hcl.chroma, hcl.hue)
}

pub fn lch_to_luv(l: f64, c: f64, h: f64) -> Triple {
    let luv = Luv::from(Hcl::new(h, c, l));
    (luv.l, luv.u, luv.v)
}

pub fn rgb_to_luv(r: f64, g: f64, b: f64) -> Triple {
    let luv = Luv::from(rgb((r, g, b)));
    (luv.l, luv.u, luv.v)
}

pub fn luv_to_rgb(l: f64, u: f64, v: f64) -> Triple {
    triple(Rgb::from(Luv::new(l, u, v)))
}

/// Returns `(h, c, l)`.
pub fn rgb_to_hcl(r: f64, g: f64, b: f64) -> Triple {
    let hcl = Hcl::from(rgb((r, g, b)));
    (hcl.hue, hcl.chroma, hcl.luminance)
}

pub fn hcl_to_rgb(h: f64, c: f64, l: f64) -> Triple {
    triple(Rgb::from(Hcl::new(h, c, l)))
}

/// Packed `0xRRGGBB`, truncating each channel to a byte.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> u32 {
    Hex::from(rgb((r, g, b))).code()
}

/// # Errors
///
/// Returns [`ColorError::HexOutOfRange`] for codes wider than 24 bits.
pub fn hex_to_rgb(code: u32) -> Result<Triple, ColorError> {
    Hex::new(code).map(|hex| triple(Rgb::from(hex)))
}

/// # Errors
///
/// Returns [`ColorError::InvalidAnsiCode`] outside 0..=255.
pub fn ansi256_to_hex(code: i32) -> Result<u32, ColorError> {
    Ansi256::new(code).to_hex().map(Hex::code)
}

/// # Errors
///
/// Returns [`ColorError::UnknownColorName`] for names not in the table.
pub fn web_color_to_hex(name: &str) -> Result<u32, ColorError> {
    WebColor::new(name).map(WebColor::index)
}
