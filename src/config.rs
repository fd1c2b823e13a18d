//! Detector configuration.
//!
//! The engine needs exactly two values for its lifetime: the similarity
//! threshold and the stopword list. Both are carried in an explicit,
//! immutable `DetectorConfig` that is passed into the constructor, so the
//! engine has no hidden global state and is trivially testable with
//! different thresholds.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! similarity_threshold: 0.8
//! stopwords: "this,is,a,the,it"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating a detector configuration.
/// Any of these is fatal for engine construction; there is no default
/// fallback.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration for the spam detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Similarity value that must be strictly exceeded for a document to be
    /// flagged as spam or for two documents to land in one cluster.
    pub similarity_threshold: f64,

    /// Comma-delimited stopword list, e.g. `"this,is,a,the,it"`. Entries are
    /// lowercased when the set is built; surrounding whitespace is ignored.
    #[serde(default)]
    pub stopwords: String,
}

impl DetectorConfig {
    pub fn new(similarity_threshold: f64, stopwords: impl Into<String>) -> Self {
        Self {
            similarity_threshold,
            stopwords: stopwords.into(),
        }
    }

    /// Load a YAML configuration file from the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration. The threshold must be a finite value in
    /// `[0, 1]`; cosine similarity never leaves that range, so anything else
    /// is a configuration mistake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.similarity_threshold.is_finite() {
            return Err(ConfigError::Validation(format!(
                "similarity_threshold must be finite, got {}",
                self.similarity_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::Validation(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }

    /// Build the stopword set from the comma-delimited list. Empty segments
    /// (e.g. from a trailing comma) are dropped.
    pub fn stopword_set(&self) -> HashSet<String> {
        self.stopwords
            .split(',')
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn stopword_set_splits_trims_and_lowercases() {
        let config = DetectorConfig::new(0.5, "This, is ,a,,the,it,");
        let set = config.stopword_set();
        assert_eq!(set.len(), 5);
        assert!(set.contains("this"));
        assert!(set.contains("is"));
        assert!(set.contains("a"));
        assert!(set.contains("the"));
        assert!(set.contains("it"));
    }

    #[test]
    fn empty_stopword_list_yields_empty_set() {
        let config = DetectorConfig::new(0.5, "");
        assert!(config.stopword_set().is_empty());
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        assert!(DetectorConfig::new(1.5, "").validate().is_err());
        assert!(DetectorConfig::new(-0.1, "").validate().is_err());
        assert!(DetectorConfig::new(f64::NAN, "").validate().is_err());
        assert!(DetectorConfig::new(0.0, "").validate().is_ok());
        assert!(DetectorConfig::new(1.0, "").validate().is_ok());
    }

    #[test]
    fn load_reads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "similarity_threshold: 0.8").unwrap();
        writeln!(file, "stopwords: \"this,is,a\"").unwrap();

        let config = DetectorConfig::load(file.path()).unwrap();
        assert_eq!(config.similarity_threshold, 0.8);
        assert_eq!(config.stopword_set().len(), 3);
    }

    #[test]
    fn load_fails_on_missing_file() {
        let err = DetectorConfig::load("/nonexistent/config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }

    #[test]
    fn load_fails_on_invalid_threshold() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "similarity_threshold: 2.0").unwrap();

        let err = DetectorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
