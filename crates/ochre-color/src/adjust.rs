//! Perceptual adjustments computed in LUV/HCL.
//!
//! Every function returns a new [`Rgb`]; results that fall outside the RGB
//! gamut are clamped channel-wise on the way back.

use crate::color::{Hcl, Luv, Rgb};

/// Luminance or chroma change per unit of `amount` in [`lighten`],
/// [`darken`], [`saturate`] and [`desaturate`].
pub const STEP: f64 = 0.18;

/// Perceptual lightness in `[0, 1]`.
#[inline]
pub fn lightness(rgb: Rgb) -> f64 {
    Luv::from(rgb).l
}

/// Chroma (colorfulness).
#[inline]
pub fn chroma(rgb: Rgb) -> f64 {
    Hcl::from(rgb).chroma
}

/// Hue in radians, in `[0, 2π)`.
#[inline]
pub fn hue(rgb: Rgb) -> f64 {
    Hcl::from(rgb).hue
}

/// Replace the lightness, keeping the LUV chromaticity `(u, v)`.
pub fn with_lightness(rgb: Rgb, lightness: f64) -> Rgb {
    let luv = Luv::from(rgb);
    Rgb::from(Luv::new(lightness, luv.u, luv.v))
}

/// Replace the chroma, keeping hue and luminance.
pub fn with_chroma(rgb: Rgb, chroma: f64) -> Rgb {
    let hcl = Hcl::from(rgb);
    Rgb::from(Hcl::new(hcl.hue, chroma, hcl.luminance))
}

/// Replace the hue, keeping chroma and luminance.
pub fn with_hue(rgb: Rgb, hue: f64) -> Rgb {
    let hcl = Hcl::from(rgb);
    Rgb::from(Hcl::new(hue, hcl.chroma, hcl.luminance))
}

/// Raise lightness by `STEP * amount`, clamped to `[0, 1]`.
///
/// ```
/// use ochre_color::Rgb;
/// let gray = Rgb::new(0.5, 0.5, 0.5);
/// assert!(gray.lighten(1.0).lightness() > gray.lightness());
/// ```
pub fn lighten(rgb: Rgb, amount: f64) -> Rgb {
    with_lightness(rgb, (lightness(rgb) + STEP * amount).clamp(0.0, 1.0))
}

/// Lower lightness by `STEP * amount`, clamped to `[0, 1]`.
pub fn darken(rgb: Rgb, amount: f64) -> Rgb {
    lighten(rgb, -amount)
}

/// Raise chroma by `STEP * amount`; chroma never drops below zero.
pub fn saturate(rgb: Rgb, amount: f64) -> Rgb {
    with_chroma(rgb, (chroma(rgb) + STEP * amount).max(0.0))
}

/// Lower chroma by `STEP * amount`; chroma never drops below zero.
pub fn desaturate(rgb: Rgb, amount: f64) -> Rgb {
    saturate(rgb, -amount)
}

/// Lightness above one half.
#[inline]
pub fn is_light(rgb: Rgb) -> bool {
    lightness(rgb) > 0.5
}

#[inline]
pub fn is_dark(rgb: Rgb) -> bool {
    !is_light(rgb)
}

impl Rgb {
    /// See [`lightness`].
    #[inline]
    pub fn lightness(self) -> f64 {
        lightness(self)
    }

    /// See [`chroma`].
    #[inline]
    pub fn chroma(self) -> f64 {
        chroma(self)
    }

    /// See [`hue`].
    #[inline]
    pub fn hue(self) -> f64 {
        hue(self)
    }

    /// See [`with_lightness`].
    pub fn with_lightness(self, lightness: f64) -> Rgb {
        with_lightness(self, lightness)
    }

    /// See [`with_chroma`].
    pub fn with_chroma(self, chroma: f64) -> Rgb {
        with_chroma(self, chroma)
    }

    /// See [`with_hue`].
    pub fn with_hue(self, hue: f64) -> Rgb {
        with_hue(self, hue)
    }

    /// See [`lighten`].
    pub fn lighten(self, amount: f64) -> Rgb {
        lighten(self, amount)
    }

    /// See [`darken`].
    pub fn darken(self, amount: f64) -> Rgb {
        darken(self, amount)
    }

    /// See [`saturate`].
    pub fn saturate(self, amount: f64) -> Rgb {
        saturate(self, amount)
    }

    /// See [`desaturate`].
    pub fn desaturate(self, amount: f64) -> Rgb {
        desaturate(self, amount)
    }

    #[inline]
    pub fn is_light(self) -> bool {
        is_light(self)
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        is_dark(self)
    }
}
