//! Color types and conversion utilities
//!
//! Conversions follow a single pivot chain:
//!
//! ```text
//! Hex <-> Rgb <-> LinearRgb <-> Xyz <-> Luv <-> Hcl
//! ```
//!
//! Each step is a `From` impl, and `Rgb` additionally converts directly to
//! and from every later space by composing the steps.
//!
//! # Example
//!
//! ```
//! use ochre_color::{Hcl, Rgb};
//!
//! let rgb = Rgb::new(0.2, 0.4, 0.4);
//! let hcl = Hcl::from(rgb);
//! let back = Rgb::from(hcl);
//! assert!(rgb.distance(back) < 1e-6);
//! ```

pub mod gamma;
mod hcl;
mod hex;
mod linear_rgb;
pub mod luv;
mod rgb;
mod xyz;

pub use hcl::{normalize_hue, Hcl};
pub use hex::{Hex, MAX_CODE};
pub use linear_rgb::LinearRgb;
pub use luv::Luv;
pub use rgb::Rgb;
pub use xyz::Xyz;
