//! # Distractor
//!
//! Selection of wrong-answer options ("distractors") for fill-in-the-blank
//! language exercises.
//!
//! A masked-language model proposes ranked candidate words for a blank. This
//! crate filters those candidates and keeps a fixed number that are real
//! words, differ from the correct answer and differ from each other, where
//! "differ" means neither sharing a stem nor being close in spelling.
//!
//! ## Features
//!
//! - Lazy normalization pipeline (strip, lowercase, punctuation, alphabetic)
//! - Kazakh suffix-stripping stemmer
//! - Ratcliff/Obershelp sequence similarity
//! - Rank-preserving single-pass selection
//! - Pluggable candidate sources and exercise assembly
//! - Parallel batch selection
//!
//! ## Example
//!
//! ```
//! use distractor::select_distractors;
//!
//! let candidates = ["үй", "тау", "көл"];
//! let distractors = select_distractors(&candidates, "бала").unwrap();
//!
//! assert_eq!(distractors.words(), ["үй", "тау", "көл"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod prediction;
pub mod selection;
pub mod util;

pub use error::{DistractorError, Result};
pub use selection::{DistractorSelector, Distractors, select_distractors};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
