//! Token filters that normalize raw model candidates.
//!
//! Filters transform a [`TokenStream`] lazily. A filter that rejects a token
//! marks it as stopped instead of dropping it, and [`RemoveEmptyFilter`] at
//! the end of a chain removes stopped and empty tokens. Rank order is never
//! changed.
//!
//! # Available Filters
//!
//! - [`strip::StripFilter`] - Trims surrounding whitespace
//! - [`lowercase::LowercaseFilter`] - Unicode-aware lowercasing
//! - [`punctuation::PunctuationFilter`] - Stops bare punctuation symbols
//! - [`alphabetic::AlphabeticFilter`] - Stops tokens with non-letters
//! - [`remove_empty::RemoveEmptyFilter`] - Drops stopped and empty tokens
//! - [`stem::StemFilter`] - Replaces tokens with their stems
//!
//! # Examples
//!
//! ```
//! use distractor::analysis::token::Token;
//! use distractor::analysis::token_filter::Filter;
//! use distractor::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Бала", 0), Token::new("ҮЙ", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "бала");
//! assert_eq!(filtered[1].text, "үй");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so a normalizer can be shared between
/// threads.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod lowercase;
pub mod punctuation;
pub mod remove_empty;
pub mod stem;
pub mod strip;

pub use alphabetic::AlphabeticFilter;
pub use lowercase::LowercaseFilter;
pub use punctuation::PunctuationFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use stem::{IdentityStemmer, StemFilter, Stemmer, SuffixStemmer};
pub use strip::StripFilter;
