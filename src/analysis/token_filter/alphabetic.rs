//! Alphabetic filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that stops tokens containing anything other than letters.
///
/// Digits, punctuation, whitespace and mixed symbols all disqualify a token.
/// Empty tokens are stopped as well.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    /// Create a new alphabetic filter.
    pub fn new() -> Self {
        AlphabeticFilter
    }

    /// Check whether a word is non-empty and made only of alphabetic characters.
    pub fn is_alphabetic(word: &str) -> bool {
        !word.is_empty() && word.chars().all(char::is_alphabetic)
    }
}

impl Filter for AlphabeticFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(|token| {
            if !token.is_stopped() && !Self::is_alphabetic(&token.text) {
                token.stop()
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_alphabetic_filter() {
        let filter = AlphabeticFilter::new();
        let tokens = vec![
            Token::new("әке", 0),
            Token::new("123", 1),
            Token::new("a1", 2),
            Token::new("бала-шаға", 3),
            Token::new("tree", 4),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert!(!result[0].is_stopped());
        assert!(result[1].is_stopped());
        assert!(result[2].is_stopped());
        assert!(result[3].is_stopped());
        assert!(!result[4].is_stopped());
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(AlphabeticFilter::is_alphabetic("қалам"));
        assert!(!AlphabeticFilter::is_alphabetic(""));
        assert!(!AlphabeticFilter::is_alphabetic("үй "));
    }
}
