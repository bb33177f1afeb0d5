//! Palette with precomputed color spaces and nearest-color matching.
//!
//! The generic [`closest`](super::closest) converts every candidate on each
//! call. A [`Palette`] does those conversions once, at construction, which is
//! what the built-in web and ANSI 256 projections use.

use std::str::FromStr;
use std::sync::LazyLock;

use super::ansi::{self, Ansi256};
use super::nearest::DistanceMetric;
use super::web::WebColor;
use crate::color::{Hcl, Rgb};
use crate::error::ColorError;
use crate::space::{Color, ColorSpace};

static WEB_PALETTE: LazyLock<Palette> = LazyLock::new(|| {
    Palette::from_entries(
        WebColor::all().map(|c| (Color::Web(c), Rgb::from(c))),
    )
});

static ANSI_PALETTE: LazyLock<Palette> = LazyLock::new(|| {
    Palette::from_entries(
        (0..=255u8).map(|code| (Color::Ansi256(Ansi256::from(code)), Rgb::from(ansi::decode(code)))),
    )
});

/// An ordered, non-empty list of colors with their RGB and HCL projections.
///
/// # Example
///
/// ```
/// use ochre_color::{DistanceMetric, Palette, Rgb};
///
/// let palette = Palette::from_specs(&["#000000", "#FFFFFF", "red"]).unwrap();
/// let (idx, _) = palette.find_nearest(Rgb::new(0.9, 0.1, 0.1), DistanceMetric::Rgb);
/// assert_eq!(idx, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    rgb: Vec<Rgb>,
    hcl: Vec<Hcl>,
}

impl Palette {
    /// Create a palette from colors.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyCandidates`] if `colors` is empty, or the
    /// projection error of the first color that has no RGB value.
    pub fn new(colors: Vec<Color>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyCandidates);
        }
        let rgb = colors
            .iter()
            .map(ColorSpace::to_rgb)
            .collect::<Result<Vec<_>, _>>()?;
        let hcl = rgb.iter().map(|&c| Hcl::from(c)).collect();
        Ok(Self { colors, rgb, hcl })
    }

    /// Create a palette from textual colors, see [`Color`]'s `FromStr`.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, ColorError> {
        let colors = specs
            .iter()
            .map(|s| Color::from_str(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    fn from_entries(entries: impl Iterator<Item = (Color, Rgb)>) -> Self {
        let (colors, rgb): (Vec<Color>, Vec<Rgb>) = entries.unzip();
        let hcl = rgb.iter().map(|&c| Hcl::from(c)).collect();
        Self { colors, rgb, hcl }
    }

    /// The 148 named web colors, in table order.
    pub fn web() -> &'static Palette {
        &WEB_PALETTE
    }

    /// ANSI codes 0 through 255, in order.
    pub fn ansi256() -> &'static Palette {
        &ANSI_PALETTE
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors, in order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The color at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Color> {
        self.colors.get(idx)
    }

    /// RGB projection of the color at `idx`.
    #[inline]
    pub fn rgb(&self, idx: usize) -> Rgb {
        self.rgb[idx]
    }

    /// Find the nearest palette entry to an RGB color.
    ///
    /// Returns `(index, distance)`. The first of several equally distant
    /// entries wins.
    pub fn find_nearest(&self, color: Rgb, metric: DistanceMetric) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        match metric {
            DistanceMetric::Rgb => {
                for (i, &entry) in self.rgb.iter().enumerate() {
                    let dist = color.distance(entry);
                    if dist < best_dist {
                        best_dist = dist;
                        best_idx = i;
                    }
                }
            }
            DistanceMetric::Hcl => {
                // Convert the query once instead of per entry.
                let query = Hcl::from(color);
                for (i, &entry) in self.hcl.iter().enumerate() {
                    let dist = query.distance(entry);
                    if dist < best_dist {
                        best_dist = dist;
                        best_idx = i;
                    }
                }
            }
        }

        (best_idx, best_dist)
    }

    /// The palette color nearest to any color.
    ///
    /// # Errors
    ///
    /// Propagates the projection error of `color`.
    pub fn nearest<C: ColorSpace + ?Sized>(
        &self,
        color: &C,
        metric: DistanceMetric,
    ) -> Result<&Color, ColorError> {
        let (idx, _) = self.find_nearest(color.to_rgb()?, metric);
        Ok(&self.colors[idx])
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hex;

    #[test]
    fn test_palette_basic_construction() {
        let palette = Palette::from_specs(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.rgb(2), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_palette_empty_error() {
        assert!(matches!(
            Palette::new(Vec::new()),
            Err(ColorError::EmptyCandidates)
        ));
    }

    #[test]
    fn test_palette_rejects_unprojectable_colors() {
        let result = Palette::new(vec![Color::Ansi256(Ansi256::new(300))]);
        assert!(matches!(result, Err(ColorError::InvalidAnsiCode(300))));
    }

    #[test]
    fn test_palette_rejects_bad_specs() {
        assert!(matches!(
            Palette::from_specs(&["#000000", "notacolor"]),
            Err(ColorError::UnknownColorName(_))
        ));
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = Palette::from_specs(&["#000000", "#FFFFFF"]).unwrap();
        let (idx, dist) = palette.find_nearest(Rgb::BLACK, DistanceMetric::Rgb);
        assert_eq!(idx, 0);
        assert_eq!(dist, 0.0);

        let (idx, _) = palette.find_nearest(Rgb::WHITE, DistanceMetric::Hcl);
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_find_nearest_ties_go_first() {
        let palette = Palette::from_specs(&["#000000", "#FFFFFF"]).unwrap();
        let (idx, _) = palette.find_nearest(Rgb::new(0.5, 0.5, 0.5), DistanceMetric::Rgb);
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_builtin_palettes() {
        assert_eq!(Palette::web().len(), 148);
        assert_eq!(Palette::ansi256().len(), 256);
        assert_eq!(
            Palette::ansi256().get(50).map(|c| c.to_hex().unwrap()),
            Some(Hex::from_u8(0x00, 0xFF, 0xD7))
        );
    }

    #[test]
    fn test_nearest_returns_color() {
        let found = Palette::web()
            .nearest(&Rgb::new(1.0, 0.0, 0.0), DistanceMetric::Rgb)
            .unwrap();
        assert_eq!(found.to_string(), "red");
    }

    #[test]
    fn test_iterates_in_order() {
        let palette = Palette::from_specs(&["red", "lime", "blue"]).unwrap();
        let names: Vec<String> = palette.into_iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["red", "lime", "blue"]);
    }
}
