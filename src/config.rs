// src/config.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{DEFAULT_MAP_NAME, MAX_GRID_SIZE};
use crate::editor::{GeneratorConfig, InvalidConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Generator(#[from] InvalidConfig),
}

/// Editor settings. Every key is optional in the config file; missing keys
/// keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side length of new and cleared maps.
    pub grid_size: usize,
    /// On-screen size of a cell, in points.
    pub cell_size: f32,
    pub default_map_name: String,
    /// Directory exports are written to.
    pub export_dir: PathBuf,
    /// Fixed generator seed. A fresh seed is drawn for every run when unset.
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            cell_size: 40.0,
            default_map_name: DEFAULT_MAP_NAME.to_string(),
            export_dir: PathBuf::from("."),
            seed: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be within 1..={MAX_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        self.generator.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.default_map_name, "My Game Map");
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = EditorConfig::from_json(
            r#"{ "grid_size": 32, "seed": 7, "generator": { "objects": { "min": 1, "max": 2 } } }"#,
        )
        .unwrap();
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.generator.objects.max, 2);
        assert_eq!(config.generator.water_radius, GeneratorConfig::default().water_radius);
        assert_eq!(config.cell_size, 40.0);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "grid_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "grid_size": 4294967296 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "grid_size": 1025 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(EditorConfig::from_json(r#"{ "grid_size": 1024 }"#).is_ok());
        assert!(matches!(
            EditorConfig::from_json(r#"{ "generator": { "mountain_jitter": 9223372036854775808 } }"#),
            Err(ConfigError::Generator(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "generator": { "water_probability": -0.1 } }"#),
            Err(ConfigError::Generator(_))
        ));
        assert!(matches!(
            EditorConfig::from_json("grid_size = 3"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_map_name": "Isle", "export_dir": "maps" }}"#).unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.default_map_name, "Isle");
        assert_eq!(config.export_dir, PathBuf::from("maps"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
