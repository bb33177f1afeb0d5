//! RGB color type
//!
//! [`Rgb`] is the pivot of the library: every other representation knows how
//! to produce one, and every cross-space conversion goes through it.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A color in gamma-encoded sRGB space.
///
/// Channels are in the range 0.0..=1.0 (mapping to 0..=255 for 8-bit).
///
/// Equality and hashing use the hexadecimal projection returned by
/// [`Rgb::index`], so two colors are equal exactly when they land on the same
/// 24-bit value. Use [`ColorSpace::is_close`](crate::ColorSpace::is_close) for
/// a perceptual tolerance instead.
#[derive(Debug, Clone, Copy)]
pub struct Rgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub red: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub green: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub blue: f64,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new Rgb color from float values.
    ///
    /// # Arguments
    /// * `red` - Red channel (0.0..=1.0)
    /// * `green` - Green channel (0.0..=1.0)
    /// * `blue` - Blue channel (0.0..=1.0)
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Create an Rgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use ochre_color::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.red, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
        }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Each channel is multiplied by 255 and truncated, not rounded, so
    /// `Rgb -> bytes -> Rgb` may lose up to one step per channel. Values
    /// outside 0.0..=1.0 saturate at the byte bounds.
    ///
    /// # Example
    /// ```
    /// use ochre_color::Rgb;
    /// assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_bytes(), [255, 127, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.red * 255.0) as u8,
            (self.green * 255.0) as u8,
            (self.blue * 255.0) as u8,
        ]
    }

    /// The three channels in red, green, blue order.
    #[inline]
    pub fn channels(self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Hexadecimal-integer projection used for keying and equality.
    ///
    /// Computed as `round(255 * (0x10000 * r + 0x100 * g + b))`, which equals
    /// the packed `0xRRGGBB` value for byte-exact colors.
    ///
    /// ```
    /// use ochre_color::Rgb;
    /// assert_eq!(Rgb::new(0.0, 0.0, 1.0).index(), 0x0000FF);
    /// assert_eq!(Rgb::WHITE.index(), 0xFFFFFF);
    /// ```
    #[inline]
    pub fn index(self) -> u32 {
        let packed = 0x10000 as f64 * self.red + 0x100 as f64 * self.green + self.blue;
        (255.0 * packed).round() as u32
    }

    /// Euclidean distance between the gamma-encoded channels.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.red - other.red;
        let dg = self.green - other.green;
        let db = self.blue - other.blue;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index()
    }
}

impl Eq for Rgb {}

impl Hash for Rgb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index().hash(state);
    }
}

impl IntoIterator for Rgb {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels().into_iter()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    /// Renders as `rgb(r, g, b)`, which [`Color`](crate::Color) parses back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
