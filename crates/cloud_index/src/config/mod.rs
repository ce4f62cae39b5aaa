//! Configuration system
//!
//! File-backed configuration for the indexing pipeline. Config types are
//! serializable, support TOML and RON files by extension, and validate
//! themselves before a run starts.

use crate::spatial::SplitPolicy;
pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// # Indexer Configuration
///
/// Everything one indexing run needs: the input file, the coordinate
/// interpretation, the octree split policy, and the reporting and
/// persistence switches of the command-line front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Path of the LAS file to index
    pub input_file: String,
    /// Use georeferenced (scaled) coordinates instead of raw grid values
    pub use_scaled_data: bool,
    /// Octree subdivision policy
    pub split_policy: SplitPolicy,
    /// Show a progress bar while inserting points
    pub progress_bar: bool,
    /// Where to persist the leaf records, None to skip persistence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

impl IndexerConfig {
    /// Create a configuration with default behavior for an input file
    pub fn new(input_file: impl Into<String>) -> Self {
        Self {
            input_file: input_file.into(),
            use_scaled_data: false,
            split_policy: SplitPolicy::MaxPointsPerLeaf(100),
            progress_bar: true,
            output_file: None,
        }
    }

    /// Use scaled or raw coordinates
    pub fn with_scaled_data(mut self, scaled: bool) -> Self {
        self.use_scaled_data = scaled;
        self
    }

    /// Set the split policy
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress_bar(mut self, enabled: bool) -> Self {
        self.progress_bar = enabled;
        self
    }

    /// Set the output file for leaf records
    pub fn with_output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_file.is_empty() {
            return Err("Input file cannot be empty".to_string());
        }

        match self.split_policy {
            SplitPolicy::MaxPointsPerLeaf(0) => {
                Err("Max points per leaf must be at least 1".to_string())
            }
            SplitPolicy::MaxDepth(depth) if depth > 64 => {
                Err("Max depth beyond 64 subdivides past f64 resolution".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl Config for IndexerConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_needs_an_input() {
        assert!(IndexerConfig::default().validate().is_err());
        assert!(IndexerConfig::new("tile.las").validate().is_ok());
    }

    #[test]
    fn test_zero_point_limit_is_rejected() {
        let config = IndexerConfig::new("tile.las")
            .with_split_policy(SplitPolicy::MaxPointsPerLeaf(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let path = std::env::temp_dir().join("cloud_index_config_test.toml");
        let path = path.to_string_lossy().into_owned();

        let config = IndexerConfig::new("tile.las")
            .with_split_policy(SplitPolicy::MaxDepth(6))
            .with_progress_bar(false);
        config.save_to_file(&path).unwrap();

        let loaded = IndexerConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.input_file, config.input_file);
        assert_eq!(loaded.split_policy, config.split_policy);
        assert!(!loaded.progress_bar);
        assert!(loaded.output_file.is_none());
    }

    #[test]
    fn test_excessive_depth_limit_is_rejected() {
        let config = IndexerConfig::new("tile.las").with_split_policy(SplitPolicy::MaxDepth(65));
        assert!(config.validate().is_err());

        let config = IndexerConfig::new("tile.las").with_split_policy(SplitPolicy::MaxDepth(12));
        assert!(config.validate().is_ok());
    }
}
