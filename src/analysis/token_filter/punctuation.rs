//! Punctuation filter implementation.
//!
//! Fill-mask models frequently propose bare punctuation for a blank. This
//! filter stops any token that is exactly one of a fixed set of punctuation,
//! quotation and dash symbols.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Symbols that are never valid candidate words.
pub const PUNCTUATION_SYMBOLS: &[&str] = &[
    ".", ",", "?", "!", ";", ":", "-", "\u{2013}", "\u{2014}", "\"", "'", "\u{201C}", "\u{201D}",
    "\u{2018}", "\u{2019}", "\u{2026}", "\u{00AB}", "\u{00BB}", "(", ")",
];

/// Check whether a token text is one of the listed punctuation symbols.
pub fn is_punctuation_symbol(text: &str) -> bool {
    PUNCTUATION_SYMBOLS.contains(&text)
}

/// A filter that stops tokens consisting of a single listed symbol.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter
    }
}

impl Filter for PunctuationFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(|token| {
            if !token.is_stopped() && is_punctuation_symbol(&token.text) {
                token.stop()
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
