//! Command results, rendered as text or serialized to JSON.

use serde::Serialize;
use std::fmt;

use super::config::Metric;

/// Every projection of one color
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorReport {
    /// The color as given
    pub input: String,
    /// Color space the input was parsed as
    pub space: &'static str,
    pub rgb: [f64; 3],
    pub bytes: [u8; 3],
    pub hex: String,
    pub hcl: HclReport,
    /// Nearest web color name
    pub web: &'static str,
    /// Nearest ANSI 256 code
    pub ansi256: i32,
    pub index: u32,
    pub is_light: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HclReport {
    pub hue: f64,
    pub chroma: f64,
    pub luminance: f64,
}

/// Result of a closest-color search
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClosestReport {
    pub query: String,
    pub palette: String,
    pub metric: Metric,
    /// Position of the match in the palette
    pub position: usize,
    pub color: String,
    pub hex: String,
    pub distance: f64,
}

/// Result of a perceptual adjustment
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdjustReport {
    pub input: String,
    pub operation: &'static str,
    pub amount: f64,
    pub result: ColorReport,
}

/// Entries of a palette
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaletteReport {
    pub name: String,
    pub entries: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaletteEntry {
    pub position: usize,
    pub color: String,
    pub hex: String,
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        let [rb, gb, bb] = self.bytes;
        writeln!(f, "input:    {} ({})", self.input, self.space)?;
        writeln!(f, "rgb:      {r:.6}, {g:.6}, {b:.6}")?;
        writeln!(f, "bytes:    {rb}, {gb}, {bb}")?;
        writeln!(f, "hex:      #{}", self.hex)?;
        writeln!(
            f,
            "hcl:      {:.6}, {:.6}, {:.6}",
            self.hcl.hue, self.hcl.chroma, self.hcl.luminance
        )?;
        writeln!(f, "web:      {}", self.web)?;
        writeln!(f, "ansi256:  {}", self.ansi256)?;
        writeln!(f, "index:    {:#08X}", self.index)?;
        write!(
            f,
            "tone:     {}",
            if self.is_light { "light" } else { "dark" }
        )
    }
}

impl fmt::Display for ClosestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}) at position {} in {}, distance {:.6}",
            self.color, self.hex, self.position, self.palette, self.distance
        )
    }
}

impl fmt::Display for AdjustReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} by {}", self.operation, self.input, self.amount)?;
        write!(f, "{}", self.result)
    }
}

impl fmt::Display for PaletteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} colors)", self.name, self.entries.len())?;
        for entry in &self.entries {
            write!(f, "\n{:>4}  #{}  {}", entry.position, entry.hex, entry.color)?;
        }
        Ok(())
    }
}
