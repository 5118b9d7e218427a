//! DocQA Answer: rule-based extractive answering.
//!
//! A fixed-priority clause pattern cascade runs first; if nothing matches, a
//! keyword-overlap scan over the leading sentences picks the closest one.
//! Every answer leaves through [`sanitize`] as a single bounded line.

pub mod cascade;
pub mod engine;
pub mod overlap;
pub mod sanitize;

pub use engine::{
    extract_answer, find_candidate, AnswerEngine, Candidate, CandidateSource, RuleBasedEngine,
    NOT_FOUND_ANSWER, NO_CONTEXT_ANSWER,
};
pub use sanitize::sanitize;
