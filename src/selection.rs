//! Distractor selection.
//!
//! This module decides which ranked candidates become distractors. A
//! [`SimilarityPolicy`] says when two words are too close to both appear in an
//! exercise, and the [`DistractorSelector`] walks the normalized candidates in
//! rank order, keeping the first ones that are neither close to the correct
//! answer nor to each other.

pub mod batch;
pub mod exercise;
pub mod selector;
pub mod similarity;

pub use batch::{SelectionOutcome, SelectionRequest, select_batch};
pub use exercise::{Exercise, ExerciseBuilder};
pub use selector::{DistractorSelector, Distractors, select_distractors};
pub use similarity::{SimilarityPolicy, SimilarityReason, SimilarityReport, StemmedWord};
