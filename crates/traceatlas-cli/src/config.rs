//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use traceatlas_extractor::{ExtractorConfig, SheetNames};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Workbook to convert
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory the six JSON documents are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Sheet names read from the workbook
    #[serde(default)]
    pub sheets: SheetNames,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".traceatlas").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::path() {
            Ok(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }

    /// Extractor settings carried by this configuration.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            sheets: self.sheets.clone(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.extractor_config().validate().map_err(CliError::Config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            sheets: SheetNames::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("Global_Church_History_Doctrine_Traceability_Atlas_v4.xlsx")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("src/content")
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("src/content"));
        assert_eq!(config.sheets.doctrines, "Doctrines");
        assert!(config.settings.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            output_dir = "public/data"

            [sheets]
            positions = "Positions"
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("public/data"));
        assert_eq!(config.input, default_input());
        assert_eq!(config.sheets.positions, "Positions");
        assert_eq!(config.sheets.traditions, "Traditions");
        assert!(config.settings.color);
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("atlas.xlsx")), None);
        assert_eq!(config.input, PathBuf::from("atlas.xlsx"));
        assert_eq!(config.output_dir, default_output_dir());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/traceatlas.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_duplicate_sheet_names_rejected() {
        let mut config = Config::default();
        config.sheets.sources = "Doctrines".to_string();
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }
}
