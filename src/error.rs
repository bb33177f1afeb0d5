use std::path::PathBuf;

use ochre_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Palette name is reserved: {0}")]
    ReservedPalette(String),

    #[error("Invalid palette {name}: {source}")]
    InvalidPalette {
        name: String,
        #[source]
        source: ColorError,
    },

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
