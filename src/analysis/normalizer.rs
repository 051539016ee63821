//! Candidate normalizer that chains token filters.
//!
//! The default chain applies, in order:
//!
//! ```text
//! Strip → Lowercase → Punctuation → Alphabetic → RemoveEmpty
//! ```
//!
//! Every stage is a lazy iterator adapter, so candidates are normalized one at
//! a time as the selector pulls them and nothing past the last accepted
//! candidate is examined.
//!
//! # Examples
//!
//! ```
//! use distractor::analysis::normalizer::CandidateNormalizer;
//!
//! let normalizer = CandidateNormalizer::new();
//! let words: Vec<String> = normalizer
//!     .normalize(&[" Бала ", ".", "123", "Үй"])
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["бала", "үй"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::{IntoTokenStream, TokenStream};
use crate::analysis::token_filter::{
    AlphabeticFilter, Filter, LowercaseFilter, PunctuationFilter, RemoveEmptyFilter, StripFilter,
};
use crate::error::Result;

/// A chain of filters applied to ranked candidates.
#[derive(Clone)]
pub struct CandidateNormalizer {
    filters: Vec<Arc<dyn Filter>>,
}

impl CandidateNormalizer {
    /// Create a normalizer with the default filter chain.
    pub fn new() -> Self {
        Self::empty()
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
    }

    /// Create a normalizer without any filters.
    pub fn empty() -> Self {
        CandidateNormalizer {
            filters: Vec::new(),
        }
    }

    /// Append a filter to the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the filters in application order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Normalize raw candidates, preserving their rank order.
    pub fn normalize<'a, S: AsRef<str>>(&'a self, candidates: &'a [S]) -> Result<TokenStream<'a>> {
        self.apply(candidates.into_token_stream())
    }

    /// Run an existing token stream through the filter chain.
    pub fn apply<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        let mut tokens = tokens;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }
}

impl Default for CandidateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CandidateNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateNormalizer")
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
