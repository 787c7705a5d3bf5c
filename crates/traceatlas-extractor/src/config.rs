//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Names of the sheets read from the workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetNames {
    /// Doctrine catalogue
    pub doctrines: String,

    /// Per-doctrine scoring
    pub doctrine_scoring: String,

    /// Traditions
    pub traditions: String,

    /// Sources
    pub sources: String,

    /// Timeline events
    pub timeline_events: String,

    /// Key documents
    pub key_documents: String,

    /// Church fathers index
    pub church_fathers: String,

    /// Tradition positions, one row per (doctrine, tradition)
    pub positions: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            doctrines: "Doctrines".to_string(),
            doctrine_scoring: "Doctrine_Scoring".to_string(),
            traditions: "Traditions".to_string(),
            sources: "Sources".to_string(),
            timeline_events: "Timeline_Events".to_string(),
            key_documents: "Key_Documents".to_string(),
            church_fathers: "Church_Fathers_Index".to_string(),
            positions: "Positions_Long".to_string(),
        }
    }
}

impl SheetNames {
    /// Every configured sheet name paired with its setting key
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("doctrines", self.doctrines.as_str()),
            ("doctrine_scoring", self.doctrine_scoring.as_str()),
            ("traditions", self.traditions.as_str()),
            ("sources", self.sources.as_str()),
            ("timeline_events", self.timeline_events.as_str()),
            ("key_documents", self.key_documents.as_str()),
            ("church_fathers", self.church_fathers.as_str()),
            ("positions", self.positions.as_str()),
        ]
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Sheet names to read
    #[serde(default)]
    pub sheets: SheetNames,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let entries = self.sheets.entries();
        for (key, name) in entries {
            if name.trim().is_empty() {
                return Err(format!("sheets.{} must not be blank", key));
            }
        }
        for (i, (key, name)) in entries.iter().enumerate() {
            if let Some((other, _)) = entries[..i].iter().find(|(_, n)| n == name) {
                return Err(format!(
                    "sheets.{} and sheets.{} both name sheet '{}'",
                    other, key, name
                ));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sheets.positions, "Positions_Long");
    }

    #[test]
    fn test_blank_sheet_name_rejected() {
        let mut config = ExtractorConfig::default();
        config.sheets.sources = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("sheets.sources"));
    }

    #[test]
    fn test_duplicate_sheet_name_rejected() {
        let mut config = ExtractorConfig::default();
        config.sheets.key_documents = "Doctrines".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("sheets.doctrines"));
        assert!(err.contains("sheets.key_documents"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractorConfig::from_toml("[sheets]\ntraditions = \"Traditions_v5\"\n").unwrap();
        assert_eq!(config.sheets.traditions, "Traditions_v5");
        assert_eq!(config.sheets.doctrines, "Doctrines");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
