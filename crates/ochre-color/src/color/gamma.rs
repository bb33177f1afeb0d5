//! sRGB transfer function
//!
//! Piecewise IEC 61966-2-1 curve between gamma-encoded sRGB channels and
//! linear light. The breakpoints must stay exactly as written: both branches
//! meet at them and the XYZ round trip depends on it.

/// Encoded-side breakpoint of the sRGB curve.
pub const SRGB_THRESHOLD: f64 = 0.04045;

/// Linear-side breakpoint of the sRGB curve.
pub const LINEAR_THRESHOLD: f64 = 0.0031308;

/// Convert a gamma-encoded sRGB channel to linear light.
#[inline]
pub fn linearize(channel: f64) -> f64 {
    if channel > SRGB_THRESHOLD {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

/// Convert a linear light channel to gamma-encoded sRGB.
#[inline]
pub fn delinearize(channel: f64) -> f64 {
    if channel > LINEAR_THRESHOLD {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert!(linearize(0.0).abs() < 1e-12);
        assert!((linearize(1.0) - 1.0).abs() < 1e-12);
        assert!(delinearize(0.0).abs() < 1e-12);
        assert!((delinearize(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_values() {
        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!((linearize(0.5) - 0.214_041_140_5).abs() < 1e-9);
        // 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        assert!((delinearize(0.5) - 0.735_356_983).abs() < 1e-6);
    }

    #[test]
    fn test_linear_segment() {
        assert_eq!(linearize(SRGB_THRESHOLD), SRGB_THRESHOLD / 12.92);
        assert_eq!(delinearize(LINEAR_THRESHOLD), 12.92 * LINEAR_THRESHOLD);
    }

    #[test]
    fn test_branches_meet_at_breakpoints() {
        let below = linearize(SRGB_THRESHOLD);
        let above = ((SRGB_THRESHOLD + 0.055) / 1.055).powf(2.4);
        assert!((below - above).abs() < 1e-6);

        let below = delinearize(LINEAR_THRESHOLD);
        let above = 1.055 * LINEAR_THRESHOLD.powf(1.0 / 2.4) - 0.055;
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev_lin = linearize(0.0);
        let mut prev_enc = delinearize(0.0);
        for i in 1..=1000 {
            let x = i as f64 / 1000.0;
            let lin = linearize(x);
            let enc = delinearize(x);
            assert!(lin >= prev_lin, "linearize not monotonic at {i}");
            assert!(enc >= prev_enc, "delinearize not monotonic at {i}");
            prev_lin = lin;
            prev_enc = enc;
        }
    }

    #[test]
    fn test_round_trip() {
        for i in 0..=255 {
            let c = i as f64 / 255.0;
            assert!(
                (delinearize(linearize(c)) - c).abs() < 1e-12,
                "round trip drifted for {i}"
            );
        }
    }
}
