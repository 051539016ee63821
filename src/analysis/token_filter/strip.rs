//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that removes leading and trailing whitespace from tokens.
///
/// Tokens that are only whitespace are stopped.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(|token| {
            if token.is_stopped() {
                return token;
            }
            let trimmed = token.text.trim();
            if trimmed.is_empty() {
                token.stop()
            } else if trimmed.len() == token.text.len() {
                token
            } else {
                let trimmed = trimmed.to_string();
                token.with_text(trimmed)
            }
        })))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
