//! Foreground/background color pairs.

use crate::error::ColorError;
use crate::space::{Color, ColorSpace};

/// An optional foreground and an optional background color.
///
/// Equality and hashing follow [`Color`], so pairs work as map keys:
///
/// ```
/// use std::collections::HashMap;
/// use ochre_color::{Color, ColorPair, Hex, Rgb};
///
/// let pair = ColorPair::new(Some(Rgb::WHITE.into()), Some(Rgb::BLACK.into()));
/// let mut styles = HashMap::new();
/// styles.insert(pair, "inverted");
///
/// let same = ColorPair::new(
///     Some(Hex::from_u8(255, 255, 255).into()),
///     Some("black".parse::<Color>().unwrap()),
/// );
/// assert_eq!(styles.get(&same), Some(&"inverted"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorPair {
    foreground: Option<Color>,
    background: Option<Color>,
}

impl ColorPair {
    #[inline]
    pub const fn new(foreground: Option<Color>, background: Option<Color>) -> Self {
        Self {
            foreground,
            background,
        }
    }

    #[inline]
    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    #[inline]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// A copy with the foreground replaced.
    pub fn with_foreground(self, foreground: Option<Color>) -> Self {
        Self { foreground, ..self }
    }

    /// A copy with the background replaced.
    pub fn with_background(self, background: Option<Color>) -> Self {
        Self { background, ..self }
    }

    /// Hex renderings of both sides, for use as a plain string key.
    ///
    /// # Errors
    ///
    /// Fails if either color cannot be projected to hex.
    pub fn encode(&self) -> Result<(Option<String>, Option<String>), ColorError> {
        let encode_one = |color: Option<Color>| -> Result<Option<String>, ColorError> {
            color.map(|c| c.to_hex().map(|h| h.to_string())).transpose()
        };
        Ok((encode_one(self.foreground)?, encode_one(self.background)?))
    }
}
