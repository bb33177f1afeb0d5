//! Test fixtures and constants.

/// Config with custom palettes, HCL metric and JSON output
pub const FULL_CONFIG: &str = r##"
metric: hcl
format: json
palettes:
  mono:
    - "#000000"
    - "#808080"
    - "#FFFFFF"
  brand:
    - "#D4F880"
    - cornflowerblue
    - ansi256:42
"##;

/// Config whose palettes are all unusable
pub const BAD_PALETTES_CONFIG: &str = r##"
palettes:
  web:
    - "#123456"
  typo:
    - blurple
  empty: []
"##;

/// Not valid YAML at all
pub const BROKEN_CONFIG: &str = "palettes: [unclosed";

/// Color specs and the hex value each must resolve to
pub const SPECS: &[(&str, &str)] = &[
    ("#D4F880", "D4F880"),
    ("d4f880", "D4F880"),
    ("0xD4F880", "D4F880"),
    ("ff", "0000FF"),
    ("cornflower blue", "6495ED"),
    ("Dark-Slate_Gray", "2F4F4F"),
    ("ansi256:50", "00FFD7"),
    ("ansi:232", "080808"),
    ("rgb(1, 0.5, 0)", "FF7F00"),
];
