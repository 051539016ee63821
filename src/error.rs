//! Error types for the distractor library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`DistractorError`] enum.
//!
//! # Examples
//!
//! ```
//! use distractor::error::{DistractorError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DistractorError::invalid_argument("correct answer is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for distractor operations.
#[derive(Error, Debug)]
pub enum DistractorError {
    /// Fewer qualifying distractors than required survived selection.
    #[error("Insufficient distinct words: found {found}, required {required}")]
    InsufficientDistinctWords {
        /// Number of words accepted after the full candidate sequence.
        found: usize,
        /// Number of words the selector was configured to produce.
        required: usize,
    },

    /// Invalid caller input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The candidate source could not produce predictions
    #[error("Prediction error: {0}")]
    Prediction(#[source] anyhow::Error),

    /// I/O errors (config files, candidate files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DistractorError.
pub type Result<T> = std::result::Result<T, DistractorError>;

impl DistractorError {
    /// Create a new insufficient-words error.
    pub fn insufficient(found: usize, required: usize) -> Self {
        DistractorError::InsufficientDistinctWords { found, required }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DistractorError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DistractorError::InvalidConfig(msg.into())
    }

    /// Wrap a failure reported by a candidate source.
    pub fn prediction<E: Into<anyhow::Error>>(err: E) -> Self {
        DistractorError::Prediction(err.into())
    }

    /// Whether the caller caused this error.
    ///
    /// A transport layer maps `true` to a client error response and `false`
    /// to a server error response.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DistractorError::InsufficientDistinctWords { .. }
                | DistractorError::InvalidArgument(_)
        )
    }
}
