//! Distance metrics and closest-color search.

use crate::color::{Hcl, Rgb};
use crate::error::ColorError;
use crate::space::ColorSpace;

/// RGB distance below which two colors count as perceptually equal in
/// [`ColorSpace::is_close`].
///
/// Slightly above `sqrt(3) / 255`, the largest error a truncating
/// `Rgb -> Hex -> Rgb` round trip can introduce.
pub const EQUALITY_THRESHOLD: f64 = 7e-3;

/// Distance metric for color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Euclidean distance of the gamma-encoded RGB channels.
    #[default]
    Rgb,

    /// Euclidean distance over (hue, chroma, luminance) in HCL space, with
    /// the hue difference measured along the shorter arc.
    Hcl,
}

impl DistanceMetric {
    /// Distance between two RGB colors under this metric.
    #[inline]
    pub fn distance(self, a: Rgb, b: Rgb) -> f64 {
        match self {
            DistanceMetric::Rgb => a.distance(b),
            DistanceMetric::Hcl => Hcl::from(a).distance(Hcl::from(b)),
        }
    }
}

/// Find the candidate closest to `query`.
///
/// Ties go to the first candidate encountered, so the result is
/// deterministic for a given iteration order.
///
/// # Errors
///
/// Returns [`ColorError::EmptyCandidates`] if `candidates` yields nothing,
/// and propagates any candidate that cannot be projected to RGB.
///
/// # Example
///
/// ```
/// use ochre_color::{closest, DistanceMetric, Rgb, WebColor};
///
/// let candidates = ["black", "white", "red"].map(|n| WebColor::new(n).unwrap());
/// let best = closest(&Rgb::new(0.9, 0.1, 0.1), candidates, DistanceMetric::Rgb).unwrap();
/// assert_eq!(best.name(), "red");
/// ```
pub fn closest<Q, C, I>(query: &Q, candidates: I, metric: DistanceMetric) -> Result<C, ColorError>
where
    Q: ColorSpace + ?Sized,
    C: ColorSpace,
    I: IntoIterator<Item = C>,
{
    let target = query.to_rgb()?;

    let mut best: Option<(C, f64)> = None;
    for candidate in candidates {
        let dist = metric.distance(target, candidate.to_rgb()?);
        match &best {
            Some((_, best_dist)) if dist >= *best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    best.map(|(color, _)| color)
        .ok_or(ColorError::EmptyCandidates)
}
