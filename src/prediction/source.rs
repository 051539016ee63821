//! Candidate sources and the prediction format they produce.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One ranked suggestion from a fill-mask model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The proposed token text, as emitted by the model.
    pub token_str: String,
    /// Model confidence.
    #[serde(default)]
    pub score: f64,
}

impl Prediction {
    /// Create a new prediction.
    pub fn new<S: Into<String>>(token_str: S, score: f64) -> Self {
        Prediction {
            token_str: token_str.into(),
            score,
        }
    }
}

/// A candidate given either as a bare word or as a scored prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateEntry {
    Word(String),
    Prediction(Prediction),
}

impl CandidateEntry {
    /// The candidate text.
    pub fn token(&self) -> &str {
        match self {
            CandidateEntry::Word(word) => word,
            CandidateEntry::Prediction(prediction) => &prediction.token_str,
        }
    }
}

impl From<Prediction> for CandidateEntry {
    fn from(prediction: Prediction) -> Self {
        CandidateEntry::Prediction(prediction)
    }
}

/// Read a JSON array of candidates (words or predictions) from a file.
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<CandidateEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

/// Produces ranked fill-word predictions for a masked text.
///
/// Implementations wrap a model client. Predictions must be ordered best
/// first; at most `top_k` are returned.
pub trait CandidateSource: Send + Sync {
    /// Predict candidates for the masked position in `masked_text`.
    fn predict(&self, masked_text: &str, top_k: usize) -> anyhow::Result<Vec<Prediction>>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &'static str;
}

impl<S: CandidateSource + ?Sized> CandidateSource for Arc<S> {
    fn predict(&self, masked_text: &str, top_k: usize) -> anyhow::Result<Vec<Prediction>> {
        (**self).predict(masked_text, top_k)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A source that returns the same ranked predictions for every text.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidateSource {
    predictions: Vec<Prediction>,
}

impl StaticCandidateSource {
    /// Create a source from ranked predictions.
    pub fn new(predictions: Vec<Prediction>) -> Self {
        StaticCandidateSource { predictions }
    }

    /// Create a source from ranked words; scores decrease with rank.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let total = words.len().max(1) as f64;
        let predictions = words
            .iter()
            .enumerate()
            .map(|(rank, word)| Prediction::new(word.as_ref(), 1.0 - rank as f64 / total))
            .collect();
        StaticCandidateSource { predictions }
    }

    /// Load ranked candidates from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let entries = load_candidates(path)
            .with_context(|| format!("failed to load candidates from {}", path.display()))?;
        let predictions = entries
            .into_iter()
            .map(|entry| match entry {
                CandidateEntry::Word(word) => Prediction::new(word, 0.0),
                CandidateEntry::Prediction(prediction) => prediction,
            })
            .collect();
        Ok(StaticCandidateSource { predictions })
    }

    /// The stored predictions.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }
}

impl CandidateSource for StaticCandidateSource {
    fn predict(&self, _masked_text: &str, top_k: usize) -> anyhow::Result<Vec<Prediction>> {
        Ok(self.predictions.iter().take(top_k).cloned().collect())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
