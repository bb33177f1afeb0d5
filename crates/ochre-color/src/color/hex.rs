//! Hexadecimal color type
//!
//! A [`Hex`] is a packed 24-bit `0xRRGGBB` value. Converting to [`Rgb`]
//! divides each byte by 255; converting from [`Rgb`] truncates `255 * c`.
//! The asymmetry means `Rgb -> Hex -> Rgb` can lose just under one byte step
//! per channel.

use std::fmt;
use std::str::FromStr;

use super::rgb::Rgb;
use crate::error::{ColorError, ParseColorError};

/// Largest representable code.
pub const MAX_CODE: u32 = 0xFF_FF_FF;

/// A color represented by a 24-bit hexadecimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex {
    code: u32,
}

impl Hex {
    /// Create a hex color from a packed `0xRRGGBB` integer.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::HexOutOfRange`] if `code` does not fit in 24 bits.
    ///
    /// # Example
    /// ```
    /// use ochre_color::Hex;
    /// let gold = Hex::new(0xFFD700).unwrap();
    /// assert_eq!(gold.to_string(), "FFD700");
    /// assert!(Hex::new(0x1000000).is_err());
    /// ```
    pub fn new(code: u32) -> Result<Self, ColorError> {
        if code > MAX_CODE {
            return Err(ColorError::HexOutOfRange(code));
        }
        Ok(Self { code })
    }

    /// Create a hex color from its three bytes.
    #[inline]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            code: u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue),
        }
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    pub fn code(self) -> u32 {
        self.code
    }

    /// Same as [`Hex::code`]; named for symmetry with the other color types.
    #[inline]
    pub fn index(self) -> u32 {
        self.code
    }

    /// The bytes [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.code >> 16) as u8,
            (self.code >> 8) as u8,
            self.code as u8,
        ]
    }
}

impl From<Hex> for Rgb {
    fn from(hex: Hex) -> Self {
        Rgb::from_bytes(hex.to_bytes())
    }
}

impl From<Rgb> for Hex {
    /// Truncates each channel, see [`Rgb::to_bytes`].
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_bytes();
        Hex::from_u8(r, g, b)
    }
}

impl FromStr for Hex {
    type Err = ParseColorError;

    /// Parse a hex color.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `0xRRGGBB` and shorter bare hex integers
    /// (`"ff"` is blue, `"0"` is black). Parsing is case-insensitive and
    /// surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ochre_color::Hex;
    ///
    /// let swatch: Hex = "#D4F880".parse().unwrap();
    /// assert_eq!(swatch.code(), 0xD4F880);
    ///
    /// let blue: Hex = "ff".parse().unwrap();
    /// assert_eq!(blue.code(), 0x0000FF);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if s.len() > 6 {
            return Err(ParseColorError::InvalidLength(s.len()));
        }
        // from_str_radix would also accept a leading sign.
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }
        let code = u32::from_str_radix(s, 16)?;
        Ok(Self { code })
    }
}

impl fmt::Display for Hex {
    /// Six uppercase hex digits, no `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.code)
    }
}

impl fmt::UpperHex for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.code, f)
    }
}

impl fmt::LowerHex for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.code, f)
    }
}
