//! Configuration for distractor selection.
//!
//! The policy constants of the selector (how many distractors to produce,
//! how close two words may be, how short a stem may get) are plain
//! configuration values with the defaults below. A configuration can be
//! loaded from a JSON file; missing fields take their defaults.
//!
//! ```json
//! {
//!   "selector": {
//!     "target_count": 3,
//!     "similarity_threshold": 0.8,
//!     "min_stem_len": 2,
//!     "match_inflected_forms": true,
//!     "stemmer": "suffix"
//!   },
//!   "top_k": 30
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::{IdentityStemmer, Stemmer, SuffixStemmer};
use crate::error::{DistractorError, Result};

/// Default number of distractors per exercise.
pub const DEFAULT_TARGET_COUNT: usize = 3;

/// Default fuzzy-ratio threshold; ratios strictly above it mean "similar".
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Default number of ranked predictions requested from the model.
pub const DEFAULT_TOP_K: usize = 30;

/// Which stemmer the similarity policy uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Strip one ending from the ordered Kazakh suffix list.
    #[default]
    Suffix,
    /// Compare surface forms only.
    Identity,
}

impl StemmerKind {
    /// Build the stemmer this kind names.
    pub fn build(self, min_stem_len: usize) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Suffix => Arc::new(SuffixStemmer::new().with_min_stem_len(min_stem_len)),
            StemmerKind::Identity => Arc::new(IdentityStemmer::new()),
        }
    }
}

/// Configuration for the distractor selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Number of distractors a successful selection returns.
    pub target_count: usize,

    /// Stems with a sequence ratio strictly above this are similar.
    pub similarity_threshold: f64,

    /// Minimum characters a stem keeps after suffix stripping.
    pub min_stem_len: usize,

    /// Treat a word as similar to another when its stem is that other word.
    pub match_inflected_forms: bool,

    /// Stemmer used before comparison.
    pub stemmer: StemmerKind,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_stem_len: 2,
            match_inflected_forms: true,
            stemmer: StemmerKind::Suffix,
        }
    }
}

impl SelectorConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.target_count == 0 {
            return Err(DistractorError::invalid_config(
                "target_count must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(DistractorError::invalid_config(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.min_stem_len == 0 {
            return Err(DistractorError::invalid_config(
                "min_stem_len must be at least 1",
            ));
        }
        Ok(())
    }

    /// Set the number of distractors to produce.
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    /// Set the similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }
}

/// Top-level configuration: selector policy plus candidate retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistractorConfig {
    /// Selector policy.
    pub selector: SelectorConfig,

    /// Number of ranked predictions requested from the candidate source.
    pub top_k: usize,
}

impl Default for DistractorConfig {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::default(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl DistractorConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: DistractorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        self.selector.validate()?;
        if self.top_k < self.selector.target_count {
            return Err(DistractorError::invalid_config(format!(
                "top_k ({}) must be at least target_count ({})",
                self.top_k, self.selector.target_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DistractorConfig::default();

        assert_eq!(config.selector.target_count, 3);
        assert_eq!(config.selector.similarity_threshold, 0.8);
        assert_eq!(config.selector.min_stem_len, 2);
        assert!(config.selector.match_inflected_forms);
        assert_eq!(config.selector.stemmer, StemmerKind::Suffix);
        assert_eq!(config.top_k, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let zero_target = SelectorConfig::default().with_target_count(0);
        assert!(matches!(
            zero_target.validate(),
            Err(DistractorError::InvalidConfig(_))
        ));

        let bad_threshold = SelectorConfig::default().with_similarity_threshold(1.5);
        assert!(bad_threshold.validate().is_err());

        let small_top_k = DistractorConfig {
            top_k: 2,
            ..DistractorConfig::default()
        };
        assert!(small_top_k.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DistractorConfig =
            serde_json::from_str(r#"{"selector": {"target_count": 4, "stemmer": "identity"}}"#)
                .unwrap();

        assert_eq!(config.selector.target_count, 4);
        assert_eq!(config.selector.stemmer, StemmerKind::Identity);
        assert_eq!(config.selector.similarity_threshold, 0.8);
        assert_eq!(config.top_k, 30);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_k": 10, "selector": {{"similarity_threshold": 0.7}}}}"#).unwrap();

        let config = DistractorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.top_k, 10);
        assert_eq!(config.selector.similarity_threshold, 0.7);
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"selector": {{"min_stem_len": 0}}}}"#).unwrap();

        assert!(matches!(
            DistractorConfig::from_file(file.path()),
            Err(DistractorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_stemmer_kind_build() {
        assert_eq!(StemmerKind::Suffix.build(2).stem("үйлер"), "үй");
        assert_eq!(StemmerKind::Identity.build(2).stem("үйлер"), "үйлер");
        assert_eq!(StemmerKind::Suffix.build(3).stem("үйлер"), "үйлер");
    }
}
