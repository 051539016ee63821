//! Rank-ordered distractor selection.
//!
//! The selector makes a single pass over the normalized candidates:
//!
//! ```text
//! accepted = []
//! for word in candidates (rank order):
//!     skip if similar to the correct answer
//!     skip if similar to any accepted word
//!     accept; stop once target_count words are accepted
//! ```
//!
//! Running out of candidates before reaching the target count is an error;
//! a partial result is never returned.
//!
//! # Examples
//!
//! ```
//! use distractor::selection::select_distractors;
//!
//! let candidates = ["кітап", "кітаптар", "дәптер", "дәптерлер", "қалам"];
//! let distractors = select_distractors(&candidates, "оқушы").unwrap();
//!
//! assert_eq!(distractors.words(), ["кітап", "дәптер", "қалам"]);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::CandidateNormalizer;
use crate::config::{DEFAULT_TARGET_COUNT, SelectorConfig};
use crate::error::{DistractorError, Result};
use crate::selection::similarity::{SimilarityPolicy, StemmedWord};

/// An accepted set of distractors, in acceptance (rank) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distractors {
    words: Vec<String>,
}

impl Distractors {
    /// The accepted words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume and return the accepted words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of accepted words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word was accepted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the accepted words.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl IntoIterator for Distractors {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Selects a fixed number of mutually distinct distractors.
///
/// The selector holds only immutable configuration and can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct DistractorSelector {
    normalizer: CandidateNormalizer,
    policy: SimilarityPolicy,
    target_count: usize,
}

impl DistractorSelector {
    /// Create a selector with default configuration.
    pub fn new() -> Self {
        DistractorSelector {
            normalizer: CandidateNormalizer::new(),
            policy: SimilarityPolicy::new(),
            target_count: DEFAULT_TARGET_COUNT,
        }
    }

    /// Create a selector from validated configuration.
    pub fn from_config(config: &SelectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(DistractorSelector {
            normalizer: CandidateNormalizer::new(),
            policy: SimilarityPolicy::from_config(config),
            target_count: config.target_count,
        })
    }

    /// Replace the similarity policy.
    pub fn with_policy(mut self, policy: SimilarityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the candidate normalizer.
    pub fn with_normalizer(mut self, normalizer: CandidateNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Set the number of distractors to produce.
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count.max(1);
        self
    }

    /// Number of distractors a successful selection returns.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// The similarity policy in use.
    pub fn policy(&self) -> &SimilarityPolicy {
        &self.policy
    }

    /// Select distractors from ranked raw candidates.
    ///
    /// `candidates` are raw model suggestions, best first. `correct` is the
    /// exercise answer; it is trimmed and lowercased before comparison and
    /// must not be empty.
    pub fn select<S: AsRef<str>>(&self, candidates: &[S], correct: &str) -> Result<Distractors> {
        let correct = normalize_answer(correct)?;
        let correct = self.policy.prepare(&correct);
        let mut accepted: Vec<StemmedWord> = Vec::with_capacity(self.target_count);

        for token in self.normalizer.normalize(candidates)? {
            let candidate = self.policy.prepare(&token.text);

            if let Some(reason) = self.policy.similarity(&candidate, &correct) {
                debug!(
                    "skip '{}' (rank {}): {} with correct answer '{}'",
                    candidate.word, token.rank, reason, correct.word
                );
                continue;
            }

            let clash = accepted.iter().find_map(|kept| {
                self.policy
                    .similarity(&candidate, kept)
                    .map(|reason| (kept, reason))
            });
            if let Some((kept, reason)) = clash {
                debug!(
                    "skip '{}' (rank {}): {} with accepted '{}'",
                    candidate.word, token.rank, reason, kept.word
                );
                continue;
            }

            debug!("accept '{}' (rank {})", candidate.word, token.rank);
            accepted.push(candidate);
            if accepted.len() == self.target_count {
                break;
            }
        }

        if accepted.len() < self.target_count {
            debug!(
                "only {} of {} distractors found for '{}'",
                accepted.len(),
                self.target_count,
                correct.word
            );
            return Err(DistractorError::insufficient(
                accepted.len(),
                self.target_count,
            ));
        }

        Ok(Distractors {
            words: accepted.into_iter().map(|kept| kept.word).collect(),
        })
    }
}

impl Default for DistractorSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Select distractors with the default configuration.
pub fn select_distractors<S: AsRef<str>>(candidates: &[S], correct: &str) -> Result<Distractors> {
    DistractorSelector::new().select(candidates, correct)
}

fn normalize_answer(correct: &str) -> Result<String> {
    let trimmed = correct.trim();
    if trimmed.is_empty() {
        return Err(DistractorError::invalid_argument(
            "correct answer must not be empty",
        ));
    }
    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(result: Result<Distractors>) -> Vec<String> {
        result.unwrap().into_words()
    }

    fn assert_insufficient(result: Result<Distractors>, expected_found: usize) {
        match result {
            Err(DistractorError::InsufficientDistinctWords { found, required }) => {
                assert_eq!(found, expected_found);
                assert_eq!(required, 3);
            }
            other => panic!("expected InsufficientDistinctWords, got {other:?}"),
        }
    }

    #[test]
    fn test_plural_forms_collapse() {
        let candidates = ["лар", "бала", "балалар", "үй", "үйлер", "тау"];

        assert_eq!(
            words(select_distractors(&candidates, "бала")),
            vec!["лар", "үй", "тау"]
        );
    }

    #[test]
    fn test_punctuation_only_is_insufficient() {
        assert_insufficient(select_distractors(&[".", ",", "123", "әке"], "ана"), 1);
    }

    #[test]
    fn test_inflected_duplicates_skipped() {
        let candidates = ["кітап", "кітаптар", "дәптер", "дәптерлер", "қалам"];

        assert_eq!(
            words(select_distractors(&candidates, "оқушы")),
            vec!["кітап", "дәптер", "қалам"]
        );
    }

    #[test]
    fn test_empty_candidates() {
        let candidates: [&str; 0] = [];
        assert_insufficient(select_distractors(&candidates, "бала"), 0);
    }

    #[test]
    fn test_repeated_word() {
        assert_insufficient(select_distractors(&["бала", "бала", "бала"], "оқушы"), 1);
    }

    #[test]
    fn test_correct_answer_is_case_insensitive() {
        let candidates = ["Бала", "үй", "тау", "көл"];

        assert_eq!(
            words(select_distractors(&candidates, "  БАЛА ")),
            vec!["үй", "тау", "көл"]
        );
    }

    #[test]
    fn test_empty_correct_answer_rejected() {
        let result = select_distractors(&["үй", "тау", "көл"], "   ");
        assert!(matches!(result, Err(DistractorError::InvalidArgument(_))));
    }

    #[test]
    fn test_stops_at_target_count() {
        let candidates = ["үй", "тау", "көл", "қалам", "кітап"];
        let selector = DistractorSelector::new().with_target_count(2);

        assert_eq!(words(selector.select(&candidates, "бала")), vec!["үй", "тау"]);
    }

    #[test]
    fn test_from_config() {
        let config = SelectorConfig::default().with_target_count(4);
        let selector = DistractorSelector::from_config(&config).unwrap();

        assert_eq!(selector.target_count(), 4);
        assert!(DistractorSelector::from_config(&config.with_target_count(0)).is_err());
    }

    #[test]
    fn test_distractors_accessors() {
        let distractors = select_distractors(&["үй", "тау", "көл"], "бала").unwrap();

        assert_eq!(distractors.len(), 3);
        assert!(!distractors.is_empty());
        assert_eq!(distractors.iter().next().map(String::as_str), Some("үй"));
        assert_eq!(
            serde_json::to_string(&distractors).unwrap(),
            r#"{"words":["үй","тау","көл"]}"#
        );
    }
}
