//! Request-level composition of a candidate source and the selector.

use log::{debug, warn};

use crate::config::DistractorConfig;
use crate::error::{DistractorError, Result};
use crate::prediction::source::CandidateSource;
use crate::selection::exercise::{Exercise, ExerciseBuilder};
use crate::selection::selector::{DistractorSelector, Distractors};

/// Asks a candidate source for ranked predictions and selects distractors.
///
/// Source failures surface as [`DistractorError::Prediction`]; a shortage of
/// usable candidates surfaces as
/// [`DistractorError::InsufficientDistinctWords`]. Nothing is retried.
#[derive(Debug)]
pub struct DistractorService<S: CandidateSource> {
    source: S,
    selector: DistractorSelector,
    top_k: usize,
}

impl<S: CandidateSource> DistractorService<S> {
    /// Create a service with default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            selector: DistractorSelector::new(),
            top_k: crate::config::DEFAULT_TOP_K,
        }
    }

    /// Create a service from validated configuration.
    pub fn with_config(source: S, config: &DistractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            selector: DistractorSelector::from_config(&config.selector)?,
            top_k: config.top_k,
        })
    }

    /// The selector in use.
    pub fn selector(&self) -> &DistractorSelector {
        &self.selector
    }

    /// Generate distractors for a masked text.
    pub fn generate(&self, masked_text: &str, correct: &str) -> Result<Distractors> {
        if correct.trim().is_empty() {
            return Err(DistractorError::invalid_argument(
                "correct answer must not be empty",
            ));
        }

        let predictions = self
            .source
            .predict(masked_text, self.top_k)
            .map_err(|e| {
                warn!("candidate source '{}' failed: {e:#}", self.source.name());
                DistractorError::prediction(e)
            })?;
        debug!(
            "candidate source '{}' returned {} predictions",
            self.source.name(),
            predictions.len()
        );

        let tokens: Vec<&str> = predictions
            .iter()
            .take(self.top_k)
            .map(|p| p.token_str.as_str())
            .collect();
        self.selector.select(&tokens, correct)
    }

    /// Generate distractors and assemble a multiple-choice exercise.
    pub fn generate_exercise(
        &self,
        masked_text: &str,
        correct: &str,
        builder: &ExerciseBuilder,
    ) -> Result<Exercise> {
        let distractors = self.generate(masked_text, correct)?;
        builder.build(masked_text, correct, &distractors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::source::{Prediction, StaticCandidateSource};

    struct FailingSource;

    impl CandidateSource for FailingSource {
        fn predict(&self, _masked_text: &str, _top_k: usize) -> anyhow::Result<Vec<Prediction>> {
            Err(anyhow::anyhow!("model not loaded"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_generate() {
        let source = StaticCandidateSource::from_words(&[".", "үй", "үйлер", "тау", "көл"]);
        let service = DistractorService::new(source);

        let distractors = service.generate("<mask> үлкен", "бала").unwrap();
        assert_eq!(distractors.words(), ["үй", "тау", "көл"]);
    }

    #[test]
    fn test_top_k_limits_candidates() {
        let source = StaticCandidateSource::from_words(&["үй", "тау", "көл", "қалам"]);
        let config = DistractorConfig {
            top_k: 3,
            ..DistractorConfig::default()
        };
        let service = DistractorService::with_config(source, &config).unwrap();

        assert!(service.generate("<mask>", "үй").is_err());
    }

    #[test]
    fn test_source_failure_is_server_side() {
        let service = DistractorService::new(FailingSource);
        let err = service.generate("<mask>", "бала").unwrap_err();

        assert!(matches!(err, DistractorError::Prediction(_)));
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Prediction error: model not loaded");
    }

    #[test]
    fn test_empty_correct_rejected_before_prediction() {
        let service = DistractorService::new(FailingSource);
        let err = service.generate("<mask>", " ").unwrap_err();

        assert!(err.is_client_error());
    }

    #[test]
    fn test_generate_exercise() {
        let source = StaticCandidateSource::from_words(&["үй", "тау", "көл"]);
        let service = DistractorService::new(source);
        let exercise = service
            .generate_exercise("Бұл <mask>.", "бала", &ExerciseBuilder::new().with_seed(1))
            .unwrap();

        assert_eq!(exercise.sentence, "Бұл ___.");
        assert_eq!(exercise.options.len(), 4);
        assert!(exercise.options.contains(&"бала".to_string()));
    }
}
