//! Configuration structures for the document pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the autodoc pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutodocConfig {
    /// Ingestion limits.
    pub ingestion: IngestionConfig,

    /// Classification settings.
    pub classification: ClassificationConfig,

    /// Persistence settings.
    pub storage: StorageConfig,
}

impl Default for AutodocConfig {
    fn default() -> Self {
        Self {
            ingestion: IngestionConfig::default(),
            classification: ClassificationConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// Limits applied to incoming document files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,

    /// Accepted file extensions, lower-case with leading dot.
    pub allowed_extensions: Vec<String>,

    /// Maximum extracted text length in characters; longer text is truncated.
    pub max_text_length: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            allowed_extensions: vec![
                ".pdf".to_string(),
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".png".to_string(),
            ],
            max_text_length: 1_000_000,
        }
    }
}

/// Classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Confidence below this threshold is flagged to the user.
    pub confidence_threshold: f32,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.7,
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite connection URL. `mode=rwc` creates the file on first use.
    pub database_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:documents.db?mode=rwc".to_string(),
        }
    }
}

impl AutodocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AutodocConfig::default();
        assert_eq!(config.ingestion.max_file_size, 10 * 1024 * 1024);
        assert!(config.ingestion.allowed_extensions.contains(&".pdf".to_string()));
        assert_eq!(config.classification.confidence_threshold, 0.7);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AutodocConfig =
            serde_json::from_str(r#"{"classification": {"confidence_threshold": 0.5}}"#).unwrap();
        assert_eq!(config.classification.confidence_threshold, 0.5);
        assert_eq!(config.ingestion.max_text_length, 1_000_000);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AutodocConfig::default();
        config.save(&path).unwrap();

        let loaded = AutodocConfig::from_file(&path).unwrap();
        assert_eq!(loaded.storage.database_url, config.storage.database_url);
    }
}
