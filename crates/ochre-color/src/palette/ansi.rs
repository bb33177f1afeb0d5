//! The 256-color ANSI terminal palette
//!
//! Codes fall into three disjoint ranges:
//!
//! - `0..=15`: the 16 base colors ([`BASE_16`])
//! - `16..=231`: a 6×6×6 color cube
//! - `232..=255`: a 24-step grayscale ramp
//!
//! Decoding is a pure formula lookup; encoding an arbitrary color picks the
//! nearest code, see [`ColorSpace::to_ansi256`](crate::ColorSpace::to_ansi256).

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color::{Hex, Rgb};
use crate::error::ColorError;

/// Codes 0..=15: black, maroon, green, olive, navy, purple, teal, silver,
/// grey, red, lime, yellow, blue, fuchsia, aqua, white.
pub const BASE_16: [u32; 16] = [
    0x000000, 0x800000, 0x008000, 0x808000, 0x000080, 0x800080, 0x008080, 0xC0C0C0,
    0x808080, 0xFF0000, 0x00FF00, 0xFFFF00, 0x0000FF, 0xFF00FF, 0x00FFFF, 0xFFFFFF,
];

/// First code of the color cube.
const CUBE_START: i32 = 16;

/// First code of the grayscale ramp.
const GRAY_START: i32 = 232;

/// Channel value for a cube coordinate in 0..=5.
#[inline]
fn cube_level(index: i32) -> u8 {
    if index == 0 {
        0
    } else {
        (55 + index * 40) as u8
    }
}

/// Decode a code that is known to be in range.
pub(crate) fn decode(code: u8) -> Hex {
    let code = i32::from(code);
    match code {
        0..=15 => {
            let [_, r, g, b] = BASE_16[code as usize].to_be_bytes();
            Hex::from_u8(r, g, b)
        }
        CUBE_START..GRAY_START => {
            let i = code - CUBE_START;
            Hex::from_u8(cube_level(i / 36), cube_level(i % 36 / 6), cube_level(i % 6))
        }
        _ => {
            let level = ((code - GRAY_START) * 10 + 8) as u8;
            Hex::from_u8(level, level, level)
        }
    }
}

/// A color represented by an ANSI 256 code.
///
/// Any integer can be stored; codes outside 0..=255 fail when projected to
/// RGB or hex with [`ColorError::InvalidAnsiCode`].
///
/// Equality goes through the hex projection, so codes 0 and 16 (both black)
/// are equal. Invalid codes are equal only to the same invalid code.
#[derive(Debug, Clone, Copy)]
pub struct Ansi256 {
    code: i32,
}

impl Ansi256 {
    /// Create an ANSI 256 color. Never fails; see [`Ansi256::to_hex`].
    #[inline]
    pub const fn new(code: i32) -> Self {
        Self { code }
    }

    /// Every valid code, 0 through 255, in order.
    pub fn all() -> impl Iterator<Item = Ansi256> {
        (0..=255).map(Self::new)
    }

    /// The stored code.
    #[inline]
    pub fn code(self) -> i32 {
        self.code
    }

    /// Decode the code to its hex value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidAnsiCode`] for codes outside 0..=255.
    ///
    /// # Example
    /// ```
    /// use ochre_color::Ansi256;
    /// assert_eq!(Ansi256::new(50).to_hex().unwrap().to_string(), "00FFD7");
    /// assert!(Ansi256::new(256).to_hex().is_err());
    /// ```
    pub fn to_hex(self) -> Result<Hex, ColorError> {
        u8::try_from(self.code)
            .map(decode)
            .map_err(|_| ColorError::InvalidAnsiCode(self.code))
    }

    /// Decode the code to RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidAnsiCode`] for codes outside 0..=255.
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        self.to_hex().map(Rgb::from)
    }

    /// Equality key: the hex projection, or the raw code when invalid.
    #[inline]
    pub(crate) fn key(self) -> Result<u32, i32> {
        self.to_hex().map(Hex::code).map_err(|_| self.code)
    }
}

impl TryFrom<Ansi256> for Hex {
    type Error = ColorError;

    fn try_from(color: Ansi256) -> Result<Self, Self::Error> {
        color.to_hex()
    }
}

impl TryFrom<Ansi256> for Rgb {
    type Error = ColorError;

    fn try_from(color: Ansi256) -> Result<Self, Self::Error> {
        color.to_rgb()
    }
}

impl From<u8> for Ansi256 {
    fn from(code: u8) -> Self {
        Self::new(i32::from(code))
    }
}

impl PartialEq for Ansi256 {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ansi256 {}

impl Hash for Ansi256 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Ansi256 {
    /// Renders as `ansi256:N`, which [`Color`](crate::Color) parses back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ansi256:{}", self.code)
    }
}
