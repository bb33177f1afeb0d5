//! Discrete palettes and nearest-color matching
//!
//! This module provides the two built-in palettes (named web colors and the
//! ANSI 256 terminal palette), the [`Palette`] type for custom ones, and the
//! generic [`closest`] search.

pub mod ansi;
mod nearest;
#[allow(clippy::module_inception)]
mod palette;
pub mod web;

pub use ansi::Ansi256;
pub use nearest::{closest, DistanceMetric, EQUALITY_THRESHOLD};
pub use palette::Palette;
pub use web::WebColor;
