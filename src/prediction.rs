//! Candidate retrieval seam.
//!
//! The masked-language model that proposes fill words is an external
//! collaborator. It is injected through the [`CandidateSource`] trait instead
//! of being held as process-wide state, and [`DistractorService`] composes a
//! source with the selector.

pub mod service;
pub mod source;

pub use service::DistractorService;
pub use source::{CandidateEntry, CandidateSource, Prediction, StaticCandidateSource, load_candidates};
