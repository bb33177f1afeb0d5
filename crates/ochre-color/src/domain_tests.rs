//! Domain-critical regression tests for ochre-color.
//!
//! Each test pins a concrete conversion or law that downstream users rely
//! on, so a failure points at the broken step of the pivot chain.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::color::gamma::{delinearize, linearize};
use crate::{
    closest, Ansi256, Color, ColorSpace, DistanceMetric, Hcl, Hex, Luv, Palette, Rgb, WebColor,
    Xyz,
};

const BASIC_NAMES: [&str; 16] = [
    "black", "maroon", "green", "olive", "navy", "purple", "teal", "silver", "grey", "red",
    "lime", "yellow", "blue", "fuchsia", "aqua", "white",
];

fn web(name: &str) -> WebColor {
    WebColor::new(name).unwrap()
}

// ========================================================================
// Gamma breakpoints
// ========================================================================

/// If this breaks, the two transfer-function branches no longer meet at
/// the sRGB breakpoints and every dark color drifts on a round trip.
#[test]
fn test_gamma_breakpoints_are_continuous() {
    let below = 0.04045 / 12.92;
    let above = ((0.04045_f64 + 0.055) / 1.055).powf(2.4);
    assert!((below - above).abs() < 1e-6);
    assert!((linearize(0.04045) - below).abs() < 1e-15);
    assert!((delinearize(0.0031308) - 12.92 * 0.0031308).abs() < 1e-15);
}

// ========================================================================
// Hex and index projection
// ========================================================================

#[test]
fn test_hex_swatch_to_rgb() {
    let rgb = Rgb::from("#D4F880".parse::<Hex>().unwrap());
    assert_eq!(rgb.channels(), [212.0 / 255.0, 248.0 / 255.0, 128.0 / 255.0]);
}

#[test]
fn test_index_of_primaries() {
    assert_eq!(Rgb::new(0.0, 0.0, 0.0).index(), 0);
    assert_eq!(Rgb::new(1.0, 1.0, 1.0).index(), 0xFFFFFF);
    assert_eq!(Rgb::new(0.0, 0.0, 1.0).index(), 0x0000FF);
}

/// If this breaks, float-to-byte conversion started rounding instead of
/// truncating.
#[test]
fn test_byte_conversion_truncates() {
    assert_eq!(Hex::from(Rgb::new(0.999, 0.5, 0.0021)).to_string(), "FE7F00");
}

// ========================================================================
// Named colors
// ========================================================================

#[test]
fn test_named_primaries() {
    assert_eq!(Rgb::from(web("red")).channels(), [1.0, 0.0, 0.0]);
    assert!(Rgb::from(web("maroon")).is_close(&Rgb::new(0.5, 0.0, 0.0)).unwrap());
    assert_eq!(Rgb::from(web("Cornflower Blue")).to_bytes(), [100, 149, 237]);
}

#[test]
fn test_unknown_name_fails_loudly() {
    assert!(WebColor::new("foo").is_err());
    assert!("foo".parse::<Color>().is_err());
}

/// If this breaks, the nearest-name search no longer finds exact matches,
/// for example because a conversion step lost precision.
#[test]
fn test_basic_names_survive_every_space() {
    for name in BASIC_NAMES {
        let color = web(name);
        let rgb = Rgb::from(color);
        assert_eq!(rgb.to_web_color().unwrap(), color, "{name} via rgb");
        assert_eq!(Hex::from(color).to_web_color().unwrap(), color, "{name} via hex");
        assert_eq!(Hcl::from(rgb).to_web_color().unwrap(), color, "{name} via hcl");
    }
}

// ========================================================================
// ANSI 256
// ========================================================================

#[test]
fn test_ansi_base_matches_basic_names() {
    for (code, name) in BASIC_NAMES.iter().enumerate() {
        let ansi = Ansi256::new(code as i32);
        assert_eq!(Color::from(ansi), Color::from(web(name)), "code {code}");
    }
}

#[test]
fn test_ansi_cube_and_ramp() {
    assert_eq!(Ansi256::new(50).to_hex().unwrap(), "#00FFD7".parse().unwrap());
    assert_eq!(Ansi256::new(100).to_hex().unwrap(), "#878700".parse().unwrap());
    assert_eq!(Ansi256::new(232).to_rgb().unwrap().channels(), [8.0 / 255.0; 3]);
    assert_eq!(Ansi256::new(255).to_rgb().unwrap().channels(), [238.0 / 255.0; 3]);
}

#[test]
fn test_rgb_to_ansi_prefers_base_palette() {
    assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_ansi256().unwrap().code(), 9);
    assert_eq!(Rgb::BLACK.to_ansi256().unwrap().code(), 0);
    assert_eq!(Rgb::WHITE.to_ansi256().unwrap().code(), 15);
}

#[test]
fn test_ansi_projection_round_trips() {
    for ansi in Ansi256::all() {
        let nearest = ansi.to_rgb().unwrap().to_ansi256().unwrap();
        assert_eq!(nearest, ansi, "code {}", ansi.code());
    }
}

// ========================================================================
// Achromatic colors
// ========================================================================

/// If this breaks, black produces NaN somewhere in the LUV/HCL chain.
#[test]
fn test_black_is_stable() {
    let hcl = Hcl::from(Rgb::BLACK);
    assert_eq!(hcl.luminance, 0.0);
    assert_eq!(hcl.chroma, 0.0);
    assert_eq!(hcl.hue, std::f64::consts::PI);
    assert_eq!(Rgb::from(hcl), Rgb::BLACK);

    let luv = Luv::from(Xyz::BLACK);
    assert_eq!(Xyz::from(luv), Xyz::BLACK);
}

// ========================================================================
// Closest-color search
// ========================================================================

#[test]
fn test_closest_is_deterministic() {
    let candidates: Vec<Color> = ["navy", "blue", "teal", "purple"]
        .iter()
        .map(|n| n.parse().unwrap())
        .collect();
    let query = Rgb::new(0.1, 0.1, 0.6);
    let first = closest(&query, candidates.iter(), DistanceMetric::Hcl).unwrap();
    for _ in 0..10 {
        let again = closest(&query, candidates.iter(), DistanceMetric::Hcl).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_closest_empty_fails() {
    let none: Vec<Rgb> = Vec::new();
    assert!(closest(&Rgb::WHITE, none, DistanceMetric::Rgb).is_err());
}

/// The generic search and the precomputed palette must agree.
#[test]
fn test_palette_matches_generic_closest() {
    let queries = [
        Rgb::new(0.12, 0.34, 0.56),
        Rgb::new(0.9, 0.8, 0.1),
        Rgb::new(0.5, 0.5, 0.5),
    ];
    for query in queries {
        for metric in [DistanceMetric::Rgb, DistanceMetric::Hcl] {
            let generic = closest(&query, WebColor::all(), metric).unwrap();
            let fast = Palette::web().nearest(&query, metric).unwrap();
            assert_eq!(Color::from(generic), *fast);
        }
    }
}

// ========================================================================
// Equality
// ========================================================================

#[test]
fn test_colors_key_maps_across_spaces() {
    let mut names: HashMap<Color, &str> = HashMap::new();
    names.insert(Color::from(web("red")), "red");
    assert_eq!(names.get(&Color::from(Ansi256::new(196))), Some(&"red"));
    assert_eq!(names.get(&"#ff0000".parse::<Color>().unwrap()), Some(&"red"));
}

proptest! {
    #[test]
    fn hex_round_trip_is_close(r in 0.0_f64..=1.0, g in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
        let rgb = Rgb::new(r, g, b);
        prop_assert!(Rgb::from(Hex::from(rgb)).is_close(&rgb).unwrap());
    }

    #[test]
    fn hcl_round_trip_keeps_index(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::from_u8(r, g, b);
        prop_assert_eq!(Rgb::from(Hcl::from(rgb)), rgb);
    }

    #[test]
    fn hue_is_wrapped(r in 0.0_f64..=1.0, g in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
        let hue = Hcl::from(Rgb::new(r, g, b)).hue;
        prop_assert!((0.0..std::f64::consts::TAU).contains(&hue));
    }

    #[test]
    fn closest_returns_a_candidate(r in 0.0_f64..=1.0, g in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
        let candidates = [Hex::from_u8(0, 0, 0), Hex::from_u8(128, 128, 128), Hex::from_u8(255, 255, 255)];
        let best = closest(&Rgb::new(r, g, b), candidates, DistanceMetric::Rgb).unwrap();
        prop_assert!(candidates.contains(&best));
    }
}
