pub mod converter;
pub mod palette_registry;

pub use converter::{Adjustment, Converter};
pub use palette_registry::PaletteRegistry;
