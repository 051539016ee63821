//! Parallel selection over many independent requests.
//!
//! Requests share nothing, so a batch is mapped across the rayon thread pool.
//! Outcomes come back in request order.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::prediction::source::CandidateEntry;
use crate::selection::selector::DistractorSelector;

/// One selection request: ranked candidates and the correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Ranked model output, either bare words or predictions with scores.
    pub candidates: Vec<CandidateEntry>,
    /// The exercise answer.
    pub correct: String,
}

impl SelectionRequest {
    /// Build a request from bare candidate words.
    pub fn new<S: Into<String>>(candidates: Vec<S>, correct: S) -> Self {
        SelectionRequest {
            candidates: candidates
                .into_iter()
                .map(|word| CandidateEntry::Word(word.into()))
                .collect(),
            correct: correct.into(),
        }
    }
}

/// The result of one request in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SelectionOutcome {
    /// Whether the request produced distractors.
    pub fn is_success(&self) -> bool {
        self.words.is_some()
    }
}

/// Run every request through the selector in parallel.
pub fn select_batch(
    selector: &DistractorSelector,
    requests: &[SelectionRequest],
) -> Vec<SelectionOutcome> {
    let outcomes: Vec<SelectionOutcome> = requests
        .par_iter()
        .map(|request| {
            let tokens: Vec<&str> = request.candidates.iter().map(CandidateEntry::token).collect();
            match selector.select(&tokens, &request.correct) {
                Ok(distractors) => SelectionOutcome {
                    words: Some(distractors.into_words()),
                    error: None,
                },
                Err(e) => SelectionOutcome {
                    words: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    info!(
        "Selected distractors for {succeeded} of {} requests",
        outcomes.len()
    );

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let selector = DistractorSelector::new();
        let requests = vec![
            SelectionRequest::new(vec!["үй", "тау", "көл"], "бала"),
            SelectionRequest::new(vec![".", "әке"], "ана"),
            SelectionRequest::new(vec!["кітап", "кітаптар", "дәптер", "дәптерлер", "қалам"], "оқушы"),
        ];

        let outcomes = select_batch(&selector, &requests);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes[0].words.as_deref(),
            Some(&["үй".to_string(), "тау".to_string(), "көл".to_string()][..])
        );
        assert!(!outcomes[1].is_success());
        assert!(
            outcomes[1]
                .error
                .as_deref()
                .unwrap()
                .starts_with("Insufficient distinct words")
        );
        assert!(outcomes[2].is_success());
    }

    #[test]
    fn test_request_accepts_predictions() {
        let request: SelectionRequest = serde_json::from_str(
            r#"{"candidates": [{"token_str": " үй", "score": 0.4}, "тау", "көл"], "correct": "бала"}"#,
        )
        .unwrap();

        let outcomes = select_batch(&DistractorSelector::new(), &[request]);
        assert_eq!(
            outcomes[0],
            SelectionOutcome {
                words: Some(vec!["үй".into(), "тау".into(), "көл".into()]),
                error: None,
            }
        );
    }

    #[test]
    fn test_outcome_serialization_skips_missing_fields() {
        let outcome = SelectionOutcome {
            words: None,
            error: Some("boom".into()),
        };
        assert_eq!(serde_json::to_string(&outcome).unwrap(), r#"{"error":"boom"}"#);
    }
}
