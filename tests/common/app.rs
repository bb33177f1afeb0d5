//! Test application factory for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use ochre::models::AppConfig;
use ochre::services::Converter;
use tempfile::TempDir;

/// Converter built from a config file on disk, the way the binary builds it
pub struct TestApp {
    pub converter: Converter,
    pub config: AppConfig,
    config_path: Option<PathBuf>,
    _dir: Option<TempDir>,
}

impl TestApp {
    /// App with built-in defaults only
    pub fn new() -> Self {
        let config = AppConfig::load(None);
        Self {
            converter: Converter::from_config(&config),
            config,
            config_path: None,
            _dir: None,
        }
    }

    /// App loading the given YAML from a temporary config file
    pub fn with_config(yaml: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("ochre.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");

        let config = AppConfig::load(Some(&path));
        Self {
            converter: Converter::from_config(&config),
            config,
            config_path: Some(path),
            _dir: Some(dir),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Run the `ochre` binary with this app's config file
    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_ochre"));
        command.env_remove("OCHRE_CONFIG").env_remove("RUST_LOG");
        if let Some(path) = &self.config_path {
            command.arg("--config").arg(path);
        }
        command
            .args(args)
            .output()
            .expect("Failed to run ochre binary")
    }

    /// Run the binary and return stdout, asserting success
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "ochre {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}
