use crate::error::AppError;
use crate::models::AppConfig;
use ochre_color::Palette;
use std::collections::BTreeMap;

/// Name of the built-in web color palette
pub const WEB: &str = "web";

/// Name of the built-in ANSI 256 palette
pub const ANSI256: &str = "ansi256";

/// Built-in palettes plus the ones defined in the config
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    custom: BTreeMap<String, Palette>,
}

impl PaletteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from config, skipping palettes that cannot be used
    pub fn from_config(config: &AppConfig) -> Self {
        let mut registry = Self::new();
        for (name, specs) in &config.palettes {
            if let Err(e) = registry.register(name, specs) {
                tracing::warn!(palette = %name, %e, "Skipping palette");
            }
        }
        tracing::debug!(custom = registry.custom.len(), "Palette registry ready");
        registry
    }

    /// Add a palette from color specs
    pub fn register<S: AsRef<str>>(&mut self, name: &str, specs: &[S]) -> Result<(), AppError> {
        if Self::is_builtin(name) {
            return Err(AppError::ReservedPalette(name.to_string()));
        }
        let palette = Palette::from_specs(specs).map_err(|source| AppError::InvalidPalette {
            name: name.to_string(),
            source,
        })?;
        self.custom.insert(name.to_string(), palette);
        Ok(())
    }

    pub fn is_builtin(name: &str) -> bool {
        name == WEB || name == ANSI256
    }

    /// Look up a palette by name
    pub fn get(&self, name: &str) -> Result<&Palette, AppError> {
        match name {
            WEB => Ok(Palette::web()),
            ANSI256 => Ok(Palette::ansi256()),
            _ => self
                .custom
                .get(name)
                .ok_or_else(|| AppError::UnknownPalette(name.to_string())),
        }
    }

    /// All palette names, built-ins first, then custom ones sorted
    pub fn names(&self) -> Vec<&str> {
        [WEB, ANSI256]
            .into_iter()
            .chain(self.custom.keys().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builtins_always_present() {
        let registry = PaletteRegistry::new();
        assert_eq!(registry.get(WEB).unwrap().len(), 148);
        assert_eq!(registry.get(ANSI256).unwrap().len(), 256);
        assert_eq!(registry.names(), vec!["web", "ansi256"]);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = PaletteRegistry::new();
        registry.register("mono", &["black", "white"]).unwrap();

        assert_eq!(registry.get("mono").unwrap().len(), 2);
        assert_eq!(registry.names(), vec!["web", "ansi256", "mono"]);
    }

    #[test]
    fn test_unknown_palette() {
        let registry = PaletteRegistry::new();
        assert!(matches!(
            registry.get("solarized"),
            Err(AppError::UnknownPalette(name)) if name == "solarized"
        ));
    }

    #[test]
    fn test_builtins_cannot_be_shadowed() {
        let mut registry = PaletteRegistry::new();
        let result = registry.register("web", &["black"]);
        assert!(matches!(result, Err(AppError::ReservedPalette(_))));
        assert_eq!(registry.get(WEB).unwrap().len(), 148);
    }

    #[test]
    fn test_invalid_specs_rejected() {
        let mut registry = PaletteRegistry::new();
        let result = registry.register("bad", &["black", "blurple"]);
        assert!(matches!(result, Err(AppError::InvalidPalette { .. })));

        let empty: [&str; 0] = [];
        let result = registry.register("empty", &empty);
        assert!(matches!(result, Err(AppError::InvalidPalette { .. })));
    }

    #[test]
    fn test_from_config_skips_bad_palettes() {
        let mut palettes = HashMap::new();
        palettes.insert("good".to_string(), vec!["#000000".to_string()]);
        palettes.insert("bad".to_string(), vec!["nope".to_string()]);
        palettes.insert("ansi256".to_string(), vec!["#FFFFFF".to_string()]);
        let config = AppConfig {
            palettes,
            ..Default::default()
        };

        let registry = PaletteRegistry::from_config(&config);
        assert_eq!(registry.names(), vec!["web", "ansi256", "good"]);
        assert_eq!(registry.get(ANSI256).unwrap().len(), 256);
    }
}
