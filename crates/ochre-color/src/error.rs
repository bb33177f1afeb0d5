//! Error types for the ochre-color public API.
//!
//! [`ParseColorError`] covers textual color forms; [`ColorError`] wraps it
//! together with the contract violations of the value types so application
//! code can propagate everything with `?`.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing textual colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing left to parse after trimming whitespace and prefixes
    #[error("empty color string")]
    Empty,

    /// Character that is not a hexadecimal digit
    #[error("invalid hex character {0:?}")]
    InvalidDigit(char),

    /// Integer component (hex value or ANSI code) failed to parse
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    /// More than six hex digits
    #[error("invalid hex color length (expected at most 6 digits, got {0})")]
    InvalidLength(usize),

    /// A functional form such as `rgb(...)` with a malformed component
    #[error("invalid component {component:?} in {input:?}")]
    InvalidComponent {
        /// The full input string
        input: String,
        /// The offending component
        component: String,
    },
}

/// Unified error type for color construction and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Name not present in the web color table
    #[error("{0:?} is not a valid color name")]
    UnknownColorName(String),

    /// ANSI 256 code outside 0..=255, reported when it is projected to RGB
    #[error("ANSI 256 code {0} is outside 0..=255")]
    InvalidAnsiCode(i32),

    /// Hex code wider than 24 bits
    #[error("hex code {0:#X} does not fit in 24 bits")]
    HexOutOfRange(u32),

    /// Closest-color search over an empty candidate set
    #[error("cannot pick the closest color from an empty candidate set")]
    EmptyCandidates,

    /// Textual color could not be parsed
    #[error("invalid color: {0}")]
    Parse(#[from] ParseColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_message() {
        let error = ColorError::UnknownColorName("foo".to_string());
        assert_eq!(error.to_string(), "\"foo\" is not a valid color name");
    }

    #[test]
    fn test_invalid_ansi_message() {
        let error = ColorError::InvalidAnsiCode(256);
        assert_eq!(error.to_string(), "ANSI 256 code 256 is outside 0..=255");
    }

    #[test]
    fn test_hex_out_of_range_message() {
        let error = ColorError::HexOutOfRange(0x1000000);
        assert_eq!(error.to_string(), "hex code 0x1000000 does not fit in 24 bits");
    }

    #[test]
    fn test_invalid_digit_message() {
        let error = ParseColorError::InvalidDigit('g');
        assert_eq!(error.to_string(), "invalid hex character 'g'");
    }

    #[test]
    fn test_parse_error_converts() {
        let error: ColorError = ParseColorError::Empty.into();
        assert!(matches!(error, ColorError::Parse(ParseColorError::Empty)));
        assert_eq!(error.to_string(), "invalid color: empty color string");
    }

    #[test]
    fn test_parse_int_error_converts() {
        let err = "zz".parse::<i32>().unwrap_err();
        let error: ParseColorError = err.into();
        assert!(matches!(error, ParseColorError::InvalidInteger(_)));
    }
}
