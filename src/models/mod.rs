pub mod config;
pub mod report;

pub use config::{AppConfig, Metric, OutputFormat, CONFIG_ENV};
pub use report::{AdjustReport, ClosestReport, ColorReport, HclReport, PaletteEntry, PaletteReport};
