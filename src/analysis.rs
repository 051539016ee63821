//! Candidate analysis.
//!
//! Raw fill-mask suggestions are turned into a rank-ordered stream of clean,
//! lowercase words by a chain of token filters. Stemmers used by the
//! similarity policy live here as well.

pub mod normalizer;
pub mod token;
pub mod token_filter;
