//! The color-space capability and the closed set of color values.
//!
//! Every color type implements [`ColorSpace`], whose only required method is
//! the RGB projection. Everything else (hex, HCL, nearest web name, nearest
//! ANSI code, distances) is derived from it, with overrides where a type can
//! answer without the round trip.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::color::{Hcl, Hex, Rgb};
use crate::error::{ColorError, ParseColorError};
use crate::palette::{closest, Ansi256, DistanceMetric, Palette, WebColor, EQUALITY_THRESHOLD};

/// A value that can be projected to RGB, and from there to any other space.
pub trait ColorSpace {
    /// Project to gamma-encoded RGB.
    ///
    /// # Errors
    ///
    /// Only [`Ansi256`] with an out-of-range code fails.
    fn to_rgb(&self) -> Result<Rgb, ColorError>;

    /// Project to hex, truncating each channel to a byte.
    fn to_hex(&self) -> Result<Hex, ColorError> {
        self.to_rgb().map(Hex::from)
    }

    /// Project to HCL.
    fn to_hcl(&self) -> Result<Hcl, ColorError> {
        self.to_rgb().map(Hcl::from)
    }

    /// Nearest named web color by RGB distance.
    fn to_web_color(&self) -> Result<WebColor, ColorError> {
        let (idx, _) = Palette::web().find_nearest(self.to_rgb()?, DistanceMetric::Rgb);
        Ok(WebColor::from_index(idx))
    }

    /// Nearest ANSI 256 code by RGB distance. Duplicated entries resolve to
    /// the lower code, so pure red is 9 rather than 196.
    fn to_ansi256(&self) -> Result<Ansi256, ColorError> {
        let (idx, _) = Palette::ansi256().find_nearest(self.to_rgb()?, DistanceMetric::Rgb);
        // The ANSI palette has exactly 256 entries.
        Ok(Ansi256::new(idx as i32))
    }

    /// Hex-integer projection used for equality and hashing.
    fn index(&self) -> Result<u32, ColorError> {
        self.to_rgb().map(Rgb::index)
    }

    /// Distance to another color under `metric`.
    fn distance<C: ColorSpace + ?Sized>(
        &self,
        other: &C,
        metric: DistanceMetric,
    ) -> Result<f64, ColorError> {
        Ok(metric.distance(self.to_rgb()?, other.to_rgb()?))
    }

    /// The candidate closest to this color, see [`closest`].
    fn closest<C, I>(&self, candidates: I, metric: DistanceMetric) -> Result<C, ColorError>
    where
        C: ColorSpace,
        I: IntoIterator<Item = C>,
    {
        closest(self, candidates, metric)
    }

    /// Perceptual closeness: RGB distance below [`EQUALITY_THRESHOLD`].
    ///
    /// Not transitive, which is why it is not `PartialEq`.
    fn is_close<C: ColorSpace + ?Sized>(&self, other: &C) -> Result<bool, ColorError> {
        Ok(self.distance(other, DistanceMetric::Rgb)? < EQUALITY_THRESHOLD)
    }
}

impl ColorSpace for Rgb {
    fn to_rgb(&self) -> Result<Rgb, ColorError> {
        Ok(*self)
    }

    fn index(&self) -> Result<u32, ColorError> {
        Ok(Rgb::index(*self))
    }
}

impl ColorSpace for Hex {
    fn to_rgb(&self) -> Result<Rgb, ColorError> {
        Ok(Rgb::from(*self))
    }

    fn to_hex(&self) -> Result<Hex, ColorError> {
        Ok(*self)
    }

    fn index(&self) -> Result<u32, ColorError> {
        Ok(self.code())
    }
}

impl ColorSpace for WebColor {
    fn to_rgb(&self) -> Result<Rgb, ColorError> {
        Ok(Rgb::from(*self))
    }

    fn to_hex(&self) -> Result<Hex, ColorError> {
        Ok(self.hex())
    }

    fn to_web_color(&self) -> Result<WebColor, ColorError> {
        Ok(*self)
    }

    fn index(&self) -> Result<u32, ColorError> {
        Ok(WebColor::index(*self))
    }
}

impl ColorSpace for Ansi256 {
    fn to_rgb(&self) -> Result<Rgb, ColorError> {
        Ansi256::to_rgb(*self)
    }

    fn to_hex(&self) -> Result<Hex, ColorError> {
        Ansi256::to_hex(*self)
    }

    fn to_ansi256(&self) -> Result<Ansi256, ColorError> {
        Ansi256::to_hex(*self).map(|_| *self)
    }

    fn index(&self) -> Result<u32, ColorError> {
        Ansi256::to_hex(*self).map(Hex::code)
    }
}

impl ColorSpace for Hcl {
    fn to_rgb(&self) -> Result<Rgb, ColorError> {
        Ok(Rgb::from(*self))
    }

    fn to_hcl(&self) -> Result<Hcl, ColorError> {
        Ok(*self)
    }

    fn index(&self) -> Result<u32, ColorError> {
        Ok(Hcl::index(*self))
    }
}

impl<T: ColorSpace + ?Sized> ColorSpace for &T {
    fn to_rgb(&self) -> Result<Rgb, ColorError> {
        (**self).to_rgb()
    }
}

/// Any supported color value.
///
/// Parses from text:
///
/// ```
/// use ochre_color::{Color, ColorSpace, Hex};
///
/// for spec in ["#FF0000", "ff0000", "0xFF0000", "red", "ansi256:9", "rgb(1, 0, 0)"] {
///     let color: Color = spec.parse().unwrap();
///     assert_eq!(color.to_hex().unwrap(), Hex::from_u8(0xFF, 0, 0));
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Rgb(Rgb),
    Hex(Hex),
    Web(WebColor),
    Ansi256(Ansi256),
    Hcl(Hcl),
}

impl Color {
    /// Short name of the variant's color space.
    pub fn space_name(&self) -> &'static str {
        match self {
            Color::Rgb(_) => "rgb",
            Color::Hex(_) => "hex",
            Color::Web(_) => "web",
            Color::Ansi256(_) => "ansi256",
            Color::Hcl(_) => "hcl",
        }
    }

    /// Equality key: the index, or the raw code of an invalid ANSI color.
    fn key(&self) -> Result<u32, i32> {
        match self {
            Color::Rgb(c) => Ok(Rgb::index(*c)),
            Color::Hex(c) => Ok(c.code()),
            Color::Web(c) => Ok(WebColor::index(*c)),
            Color::Ansi256(c) => c.key(),
            Color::Hcl(c) => Ok(Hcl::index(*c)),
        }
    }
}

impl ColorSpace for Color {
    fn to_rgb(&self) -> Result<Rgb, ColorError> {
        match self {
            Color::Rgb(c) => c.to_rgb(),
            Color::Hex(c) => c.to_rgb(),
            Color::Web(c) => c.to_rgb(),
            Color::Ansi256(c) => ColorSpace::to_rgb(c),
            Color::Hcl(c) => c.to_rgb(),
        }
    }

    fn to_hex(&self) -> Result<Hex, ColorError> {
        match self {
            Color::Hex(c) => Ok(*c),
            Color::Web(c) => Ok(c.hex()),
            Color::Ansi256(c) => c.to_hex(),
            other => other.to_rgb().map(Hex::from),
        }
    }

    fn to_hcl(&self) -> Result<Hcl, ColorError> {
        match self {
            Color::Hcl(c) => Ok(*c),
            other => other.to_rgb().map(Hcl::from),
        }
    }

    fn to_web_color(&self) -> Result<WebColor, ColorError> {
        match self {
            Color::Web(c) => Ok(*c),
            other => {
                let (idx, _) = Palette::web().find_nearest(other.to_rgb()?, DistanceMetric::Rgb);
                Ok(WebColor::from_index(idx))
            }
        }
    }

    fn to_ansi256(&self) -> Result<Ansi256, ColorError> {
        match self {
            Color::Ansi256(c) => ColorSpace::to_ansi256(c),
            other => {
                let (idx, _) =
                    Palette::ansi256().find_nearest(other.to_rgb()?, DistanceMetric::Rgb);
                Ok(Ansi256::new(idx as i32))
            }
        }
    }

    fn index(&self) -> Result<u32, ColorError> {
        self.key().map_err(ColorError::InvalidAnsiCode)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c)
    }
}

impl From<Hex> for Color {
    fn from(c: Hex) -> Self {
        Color::Hex(c)
    }
}

impl From<WebColor> for Color {
    fn from(c: WebColor) -> Self {
        Color::Web(c)
    }
}

impl From<Ansi256> for Color {
    fn from(c: Ansi256) -> Self {
        Color::Ansi256(c)
    }
}

impl From<Hcl> for Color {
    fn from(c: Hcl) -> Self {
        Color::Hcl(c)
    }
}

/// Parse the three comma-separated floats of `rgb(...)` or `hcl(...)`.
fn parse_triplet(input: &str, body: &str) -> Result<[f64; 3], ParseColorError> {
    let invalid = |component: &str| ParseColorError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    };

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(invalid(body));
    };

    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip([a, b, c]) {
        *slot = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| invalid(part))?;
    }
    Ok(out)
}

/// Strip a case-insensitive `name(` prefix and the closing `)`.
fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let prefix = s.get(..name.len() + 1)?;
    if !prefix.eq_ignore_ascii_case(&format!("{name}(")) {
        return None;
    }
    s[prefix.len()..].strip_suffix(')')
}

/// Strip a case-insensitive `name:` prefix.
fn strip_label<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let prefix = s.get(..name.len() + 1)?;
    if !prefix.eq_ignore_ascii_case(&format!("{name}:")) {
        return None;
    }
    Some(&s[prefix.len()..])
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse a color.
    ///
    /// Accepted forms, tried in order:
    /// - `ansi256:N` or `ansi:N`
    /// - `rgb(r, g, b)` with channels in `[0, 1]`
    /// - `hcl(h, c, l)` with the hue in radians
    /// - `#RRGGBB`, `0xRRGGBB` or a bare hex integer of up to six digits
    /// - a web color name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty.into());
        }

        if let Some(code) = strip_label(s, "ansi256").or_else(|| strip_label(s, "ansi")) {
            let code = code.trim().parse::<i32>().map_err(ParseColorError::from)?;
            return Ok(Color::Ansi256(Ansi256::new(code)));
        }
        if let Some(body) = strip_function(s, "rgb") {
            let [r, g, b] = parse_triplet(s, body)?;
            return Ok(Color::Rgb(Rgb::new(r, g, b)));
        }
        if let Some(body) = strip_function(s, "hcl") {
            let [h, c, l] = parse_triplet(s, body)?;
            return Ok(Color::Hcl(Hcl::new(h, c, l)));
        }

        let is_bare_hex = s.len() <= 6 && s.chars().all(|c| c.is_ascii_hexdigit());
        if s.starts_with('#') || s.starts_with("0x") || s.starts_with("0X") || is_bare_hex {
            return Ok(Color::Hex(s.parse()?));
        }

        WebColor::new(s).map(Color::Web)
    }
}

impl fmt::Display for Color {
    /// Renders a form that [`Color::from_str`] parses back to an equal color.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(c) => c.fmt(f),
            Color::Hex(c) => write!(f, "#{c}"),
            Color::Web(c) => c.fmt(f),
            Color::Ansi256(c) => c.fmt(f),
            Color::Hcl(c) => c.fmt(f),
        }
    }
}
