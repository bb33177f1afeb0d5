use crate::error::AppError;
use crate::models::{
    AdjustReport, AppConfig, ClosestReport, ColorReport, HclReport, Metric, PaletteEntry,
    PaletteReport,
};
use crate::services::PaletteRegistry;
use ochre_color::{Color, ColorSpace};

/// A perceptual adjustment requested on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Lighten(f64),
    Darken(f64),
    Saturate(f64),
    Desaturate(f64),
}

impl Adjustment {
    pub fn name(self) -> &'static str {
        match self {
            Adjustment::Lighten(_) => "lighten",
            Adjustment::Darken(_) => "darken",
            Adjustment::Saturate(_) => "saturate",
            Adjustment::Desaturate(_) => "desaturate",
        }
    }

    pub fn amount(self) -> f64 {
        match self {
            Adjustment::Lighten(a)
            | Adjustment::Darken(a)
            | Adjustment::Saturate(a)
            | Adjustment::Desaturate(a) => a,
        }
    }
}

/// Runs the CLI commands against the configured palettes
pub struct Converter {
    registry: PaletteRegistry,
    default_metric: Metric,
}

impl Converter {
    pub fn new(registry: PaletteRegistry, default_metric: Metric) -> Self {
        Self {
            registry,
            default_metric,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(PaletteRegistry::from_config(config), config.metric)
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    /// Project a color into every space
    pub fn describe(&self, color: &Color) -> Result<ColorReport, AppError> {
        let rgb = color.to_rgb()?;
        let hcl = color.to_hcl()?;
        Ok(ColorReport {
            input: color.to_string(),
            space: color.space_name(),
            rgb: rgb.channels(),
            bytes: rgb.to_bytes(),
            hex: color.to_hex()?.to_string(),
            hcl: HclReport {
                hue: hcl.hue,
                chroma: hcl.chroma,
                luminance: hcl.luminance,
            },
            web: color.to_web_color()?.name(),
            ansi256: color.to_ansi256()?.code(),
            index: color.index()?,
            is_light: rgb.is_light(),
        })
    }

    /// Find the closest entry of a named palette
    pub fn closest(
        &self,
        color: &Color,
        palette_name: &str,
        metric: Option<Metric>,
    ) -> Result<ClosestReport, AppError> {
        let metric = metric.unwrap_or(self.default_metric);
        let palette = self.registry.get(palette_name)?;
        tracing::debug!(palette = palette_name, ?metric, "Searching closest color");

        let (position, distance) = palette.find_nearest(color.to_rgb()?, metric.into());
        let found = &palette.colors()[position];

        Ok(ClosestReport {
            query: color.to_string(),
            palette: palette_name.to_string(),
            metric,
            position,
            color: found.to_string(),
            hex: found.to_hex()?.to_string(),
            distance,
        })
    }

    /// Apply an adjustment and describe the result
    pub fn adjust(&self, color: &Color, adjustment: Adjustment) -> Result<AdjustReport, AppError> {
        let rgb = color.to_rgb()?;
        let adjusted = match adjustment {
            Adjustment::Lighten(amount) => rgb.lighten(amount),
            Adjustment::Darken(amount) => rgb.darken(amount),
            Adjustment::Saturate(amount) => rgb.saturate(amount),
            Adjustment::Desaturate(amount) => rgb.desaturate(amount),
        };
        tracing::debug!(
            operation = adjustment.name(),
            amount = adjustment.amount(),
            "Adjusted color"
        );

        Ok(AdjustReport {
            input: color.to_string(),
            operation: adjustment.name(),
            amount: adjustment.amount(),
            result: self.describe(&Color::Hex(adjusted.to_hex()?))?,
        })
    }

    /// List a palette's entries
    pub fn palette(&self, name: &str) -> Result<PaletteReport, AppError> {
        let palette = self.registry.get(name)?;
        let entries = palette
            .colors()
            .iter()
            .enumerate()
            .map(|(position, color)| {
                Ok(PaletteEntry {
                    position,
                    color: color.to_string(),
                    hex: color.to_hex()?.to_string(),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(PaletteReport {
            name: name.to_string(),
            entries,
        })
    }
}
