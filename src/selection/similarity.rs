//! Similarity policy between candidate words.
//!
//! Two words are similar when any of these holds for their stems:
//!
//! 1. the stems are equal;
//! 2. one word's stem is the other word itself (an inflected form), when
//!    `match_inflected_forms` is enabled;
//! 3. the matching-block ratio of the stems is strictly above the threshold.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::analysis::token_filter::stem::{Stemmer, SuffixStemmer};
use crate::config::{DEFAULT_SIMILARITY_THRESHOLD, SelectorConfig};
use crate::util::sequence_matcher::sequence_ratio;

/// Why two words were judged similar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityReason {
    /// Both words reduce to the same stem.
    StemEquality,
    /// One word is the other plus a recognized suffix.
    InflectedForm,
    /// The stems' sequence ratio exceeds the threshold.
    Ratio,
}

impl fmt::Display for SimilarityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SimilarityReason::StemEquality => "stem equality",
            SimilarityReason::InflectedForm => "inflected form",
            SimilarityReason::Ratio => "ratio",
        };
        write!(f, "{label}")
    }
}

/// A word together with its stem, so the stem is computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemmedWord {
    pub word: String,
    pub stem: String,
}

/// Full comparison of two words, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub left: String,
    pub right: String,
    pub left_stem: String,
    pub right_stem: String,
    pub ratio: f64,
    pub reason: Option<SimilarityReason>,
}

impl SimilarityReport {
    /// Whether the two words are similar.
    pub fn is_similar(&self) -> bool {
        self.reason.is_some()
    }
}

/// Decides whether two words are too close to coexist in one exercise.
#[derive(Clone)]
pub struct SimilarityPolicy {
    stemmer: Arc<dyn Stemmer>,
    threshold: f64,
    match_inflected_forms: bool,
}

impl SimilarityPolicy {
    /// Suffix stemmer, threshold 0.8, inflected-form matching on.
    pub fn new() -> Self {
        SimilarityPolicy {
            stemmer: Arc::new(SuffixStemmer::new()),
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            match_inflected_forms: true,
        }
    }

    /// Build a policy from selector configuration.
    pub fn from_config(config: &SelectorConfig) -> Self {
        SimilarityPolicy {
            stemmer: config.stemmer.build(config.min_stem_len),
            threshold: config.similarity_threshold,
            match_inflected_forms: config.match_inflected_forms,
        }
    }

    /// Use a different stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Set the ratio threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable inflected-form matching.
    pub fn with_inflected_forms(mut self, enabled: bool) -> Self {
        self.match_inflected_forms = enabled;
        self
    }

    /// The ratio threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Stem a word with the configured stemmer.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Pair a word with its stem.
    pub fn prepare(&self, word: &str) -> StemmedWord {
        StemmedWord {
            word: word.to_string(),
            stem: self.stem(word),
        }
    }

    /// Reason two prepared words are similar, if they are.
    pub fn similarity(&self, left: &StemmedWord, right: &StemmedWord) -> Option<SimilarityReason> {
        if left.stem == right.stem {
            return Some(SimilarityReason::StemEquality);
        }
        if self.match_inflected_forms && (left.stem == right.word || right.stem == left.word) {
            return Some(SimilarityReason::InflectedForm);
        }
        if sequence_ratio(&left.stem, &right.stem) > self.threshold {
            return Some(SimilarityReason::Ratio);
        }
        None
    }

    /// Whether two words are similar.
    pub fn is_similar(&self, left: &str, right: &str) -> bool {
        self.similarity(&self.prepare(left), &self.prepare(right))
            .is_some()
    }

    /// Compare two words and report stems, ratio and verdict.
    pub fn compare(&self, left: &str, right: &str) -> SimilarityReport {
        let left = self.prepare(left);
        let right = self.prepare(right);
        let reason = self.similarity(&left, &right);
        let ratio = sequence_ratio(&left.stem, &right.stem);

        SimilarityReport {
            left: left.word,
            right: right.word,
            left_stem: left.stem,
            right_stem: right.stem,
            ratio,
            reason,
        }
    }
}

impl Default for SimilarityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SimilarityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimilarityPolicy")
            .field("stemmer", &self.stemmer.name())
            .field("threshold", &self.threshold)
            .field("match_inflected_forms", &self.match_inflected_forms)
            .finish()
    }
}
