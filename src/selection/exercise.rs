//! Multiple-choice exercise assembly.
//!
//! A fill-in-the-blank exercise shows the sentence with its blank and a
//! shuffled list of options: the distractors plus the correct answer.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{DistractorError, Result};
use crate::selection::selector::Distractors;

/// Marker the fill-mask model expects in place of the hidden word.
pub const MASK_MARKER: &str = "<mask>";

/// Blank shown to the learner.
pub const BLANK: &str = "___";

/// A ready-to-present exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Sentence with the blank in place of the hidden word.
    pub sentence: String,
    /// The correct answer as supplied.
    pub correct: String,
    /// Distractors and the correct answer, shuffled.
    pub options: Vec<String>,
}

impl Exercise {
    /// Check a learner's choice, ignoring case and surrounding whitespace.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice.trim().to_lowercase() == self.correct.to_lowercase()
    }
}

/// Builds exercises from a masked sentence and selected distractors.
#[derive(Debug, Clone)]
pub struct ExerciseBuilder {
    mask_marker: String,
    blank: String,
    seed: Option<u64>,
}

impl ExerciseBuilder {
    /// Create a builder using `<mask>` and `___`.
    pub fn new() -> Self {
        ExerciseBuilder {
            mask_marker: MASK_MARKER.to_string(),
            blank: BLANK.to_string(),
            seed: None,
        }
    }

    /// Use a different mask marker.
    pub fn with_mask_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.mask_marker = marker.into();
        self
    }

    /// Use a different blank.
    pub fn with_blank<S: Into<String>>(mut self, blank: S) -> Self {
        self.blank = blank.into();
        self
    }

    /// Shuffle deterministically from a seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assemble an exercise.
    ///
    /// Only the first mask marker is replaced. A sentence without a marker is
    /// rejected.
    pub fn build(
        &self,
        masked_sentence: &str,
        correct: &str,
        distractors: &Distractors,
    ) -> Result<Exercise> {
        if !masked_sentence.contains(&self.mask_marker) {
            return Err(DistractorError::invalid_argument(format!(
                "sentence does not contain the mask marker '{}'",
                self.mask_marker
            )));
        }
        let correct = correct.trim();
        if correct.is_empty() {
            return Err(DistractorError::invalid_argument(
                "correct answer must not be empty",
            ));
        }

        let mut options: Vec<String> = distractors.iter().cloned().collect();
        options.push(correct.to_string());

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        options.shuffle(&mut rng);

        Ok(Exercise {
            sentence: masked_sentence.replacen(&self.mask_marker, &self.blank, 1),
            correct: correct.to_string(),
            options,
        })
    }
}

impl Default for ExerciseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::selector::select_distractors;

    fn sample_distractors() -> Distractors {
        select_distractors(&["үй", "тау", "көл"], "бала").unwrap()
    }

    #[test]
    fn test_build_exercise() {
        let exercise = ExerciseBuilder::new()
            .with_seed(7)
            .build("Бұл <mask> кітап.", "Бала", &sample_distractors())
            .unwrap();

        assert_eq!(exercise.sentence, "Бұл ___ кітап.");
        assert_eq!(exercise.correct, "Бала");
        assert_eq!(exercise.options.len(), 4);

        let mut sorted = exercise.options.clone();
        sorted.sort();
        let mut expected = vec!["Бала", "көл", "тау", "үй"];
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let builder = ExerciseBuilder::new().with_seed(42);
        let first = builder.build("<mask> келді", "бала", &sample_distractors()).unwrap();
        let second = builder.build("<mask> келді", "бала", &sample_distractors()).unwrap();

        assert_eq!(first.options, second.options);
    }

    #[test]
    fn test_only_first_marker_replaced() {
        let exercise = ExerciseBuilder::new()
            .build("<mask> және <mask>", "бала", &sample_distractors())
            .unwrap();

        assert_eq!(exercise.sentence, "___ және <mask>");
    }

    #[test]
    fn test_missing_marker_rejected() {
        let result = ExerciseBuilder::new().build("no blank here", "бала", &sample_distractors());
        assert!(matches!(result, Err(DistractorError::InvalidArgument(_))));
    }

    #[test]
    fn test_is_correct() {
        let exercise = ExerciseBuilder::new()
            .with_mask_marker("[MASK]")
            .with_blank("…")
            .build("[MASK] ойнайды", "Бала", &sample_distractors())
            .unwrap();

        assert_eq!(exercise.sentence, "… ойнайды");
        assert!(exercise.is_correct(" бала "));
        assert!(!exercise.is_correct("үй"));
    }
}
