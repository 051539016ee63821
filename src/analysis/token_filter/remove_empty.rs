//! Remove empty filter implementation.
//!
//! Placed at the end of a chain, this filter drops every token an earlier
//! filter stopped, together with any token whose text is empty.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stopped and empty tokens from the stream.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(
            tokens.filter(|token| !token.is_stopped() && !token.is_empty()),
        ))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
