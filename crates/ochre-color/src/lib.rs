//! ochre-color: color spaces and conversions
//!
//! This library converts between gamma-encoded sRGB, hex codes, named web
//! colors, ANSI 256 terminal codes and CIE HCL, and finds the closest color
//! in a discrete palette.
//!
//! # Quick Start
//!
//! ```
//! use ochre_color::{Color, ColorSpace};
//!
//! let color: Color = "#6495ED".parse().unwrap();
//! assert_eq!(color.to_web_color().unwrap().name(), "cornflowerblue");
//! assert_eq!(color.to_ansi256().unwrap().code(), 69);
//! ```
//!
//! # Color Spaces
//!
//! - [`Rgb`]: gamma-encoded sRGB, channels in `[0, 1]`; the pivot every
//!   other space converts through
//! - [`Hex`]: a 24-bit `0xRRGGBB` code
//! - [`WebColor`]: one of the 148 CSS color names
//! - [`Ansi256`]: an xterm 256-color code
//! - [`Hcl`]: the polar form of CIE LUV, for perceptual adjustments
//!
//! [`LinearRgb`], [`Xyz`] and [`Luv`] are the intermediate steps of the
//! RGB to HCL chain:
//!
//! ```text
//! Rgb -> LinearRgb -> Xyz -> Luv -> Hcl
//! ```
//!
//! Each step is an exact inverse of its reverse step up to floating point,
//! except that `Xyz -> LinearRgb -> Rgb` clamps out-of-gamut channels.
//!
//! # Equality
//!
//! Two colors are equal when their hex-integer projections
//! ([`ColorSpace::index`]) are equal, whatever their space. This relation is
//! transitive, so every color type is `Eq + Hash`. Perceptual closeness is a
//! separate, explicitly named check, [`ColorSpace::is_close`].
//!
//! # Byte Conversion
//!
//! Float-to-byte conversion truncates (`(255 * c) as u8`) while
//! byte-to-float divides by 255. Round trips through [`Hex`] are therefore
//! off by at most one step per channel, which [`EQUALITY_THRESHOLD`]
//! covers.

pub mod adjust;
pub mod color;
pub mod colorsys;
pub mod error;
mod pair;
pub mod palette;
mod space;

#[cfg(test)]
mod domain_tests;

pub use color::{Hcl, Hex, LinearRgb, Luv, Rgb, Xyz};
pub use error::{ColorError, ParseColorError};
pub use pair::ColorPair;
pub use palette::{closest, Ansi256, DistanceMetric, Palette, WebColor, EQUALITY_THRESHOLD};
pub use space::{Color, ColorSpace};
