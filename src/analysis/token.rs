//! Token types for candidate analysis.
//!
//! A [`Token`] wraps one candidate word proposed by the upstream model. Its
//! `rank` is the position of the candidate in the model output, so earlier
//! tokens carry higher model confidence. Filters never reorder tokens.
//!
//! # Examples
//!
//! ```
//! use distractor::analysis::token::Token;
//!
//! let token = Token::new("бала", 0);
//! assert_eq!(token.text, "бала");
//! assert_eq!(token.rank, 0);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single candidate word flowing through the normalization pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Position of the candidate in the ranked model output (0-based)
    pub rank: usize,

    /// Whether a filter has marked this token for removal
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and rank.
    pub fn new<S: Into<String>>(text: S, rank: usize) -> Self {
        Token {
            text: text.into(),
            rank,
            stopped: false,
        }
    }

    /// Get the length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text, keeping rank and stop state.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A lazily evaluated sequence of tokens in rank order.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream<'a> {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream<'a>;
}

impl<'a> IntoTokenStream<'a> for Vec<Token> {
    fn into_token_stream(self) -> TokenStream<'a> {
        Box::new(self.into_iter())
    }
}

impl<'a, S: AsRef<str>> IntoTokenStream<'a> for &'a [S] {
    fn into_token_stream(self) -> TokenStream<'a> {
        Box::new(
            self.iter()
                .enumerate()
                .map(|(rank, raw)| Token::new(raw.as_ref(), rank)),
        )
    }
}
