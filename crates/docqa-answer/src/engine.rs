//! Answer engine trait and the rule-based implementation.
//!
//! The `AnswerEngine` trait abstracts over how one question is answered from
//! context chunks. Implementations:
//! - `RuleBasedEngine`: clause cascade, keyword-overlap fallback, sanitizer

use docqa_core::Result;
use tracing::debug;

use crate::cascade;
use crate::overlap;
use crate::sanitize::sanitize;

/// Returned when no context chunks are supplied at all.
pub const NO_CONTEXT_ANSWER: &str = "No relevant information found in the document.";
/// Returned when neither the cascade nor the overlap scan finds anything.
pub const NOT_FOUND_ANSWER: &str =
    "Relevant information not clearly specified in the provided document.";

/// Where a candidate answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// Matched a clause pattern.
    Pattern { priority: usize, name: &'static str },
    /// Sentence chosen by keyword overlap.
    KeywordOverlap { score: usize },
}

/// A matched span, before sanitizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub source: CandidateSource,
}

/// Trait for answer engines.
pub trait AnswerEngine: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Answer `question` from `chunks`. The result is a single plain line.
    fn answer(&self, question: &str, chunks: &[String]) -> Result<String>;
}

/// Cascade + overlap engine with a fixed answer length bound.
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedEngine {
    max_len: usize,
}

impl RuleBasedEngine {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for RuleBasedEngine {
    fn default() -> Self {
        Self::new(200)
    }
}

impl AnswerEngine for RuleBasedEngine {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn answer(&self, question: &str, chunks: &[String]) -> Result<String> {
        Ok(extract_answer(question, chunks, self.max_len))
    }
}

/// Find the best candidate span for `question` in `chunks`.
///
/// Chunks are joined with spaces and lower-cased before matching.
pub fn find_candidate<S: AsRef<str>>(question: &str, chunks: &[S]) -> Option<Candidate> {
    let context = chunks
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if let Some((pattern, text)) = cascade::first_match(&context) {
        debug!("Clause pattern '{}' matched", pattern.name);
        return Some(Candidate {
            text: cascade::shape_match(text),
            source: CandidateSource::Pattern {
                priority: pattern.priority,
                name: pattern.name,
            },
        });
    }

    let keywords = overlap::keywords(question);
    overlap::best_sentence(&keywords, &context).map(|(text, score)| {
        debug!("Keyword overlap picked a sentence (score={})", score);
        Candidate {
            text,
            source: CandidateSource::KeywordOverlap { score },
        }
    })
}

/// Answer `question` from `chunks` as one sanitized line of at most `max_len` chars.
pub fn extract_answer<S: AsRef<str>>(question: &str, chunks: &[S], max_len: usize) -> String {
    if chunks.is_empty() {
        return sanitize(NO_CONTEXT_ANSWER, max_len);
    }
    let raw = match find_candidate(question, chunks) {
        Some(candidate) => candidate.text,
        None => NOT_FOUND_ANSWER.to_string(),
    };
    sanitize(&raw, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_scenario() {
        let answer = extract_answer(
            "What does the policy cover?",
            &["Coverage includes inpatient hospitalization expenses."],
            200,
        );
        assert!(answer.starts_with("Coverage includes inpatient hospitalization expenses."));
    }

    #[test]
    fn test_not_found_scenario() {
        let answer = extract_answer(
            "What is the grace period?",
            &["The product helps users manage tasks."],
            200,
        );
        assert_eq!(answer, NOT_FOUND_ANSWER);
    }

    #[test]
    fn test_no_chunks_scenario() {
        let chunks: [&str; 0] = [];
        assert_eq!(extract_answer("anything?", &chunks, 200), NO_CONTEXT_ANSWER);
    }

    #[test]
    fn test_candidate_source_pattern() {
        let candidate = find_candidate("q", &["Benefits include ambulance charges."]).unwrap();
        assert_eq!(
            candidate.source,
            CandidateSource::Pattern {
                priority: 2,
                name: "benefits"
            }
        );
        assert_eq!(candidate.text, "Benefits include ambulance charges.");
    }

    #[test]
    fn test_candidate_source_overlap() {
        let candidate = find_candidate(
            "How long is the waiting period for cataract?",
            &["The waiting period for cataract surgery is two years. Other text follows here"],
        )
        .unwrap();
        assert_eq!(candidate.source, CandidateSource::KeywordOverlap { score: 3 });
        assert_eq!(candidate.text, "The waiting period for cataract surgery is two years.");
    }

    #[test]
    fn test_chunks_are_joined() {
        let chunks = vec!["Coverage".to_string(), "includes day care.".to_string()];
        let candidate = find_candidate("q", &chunks).unwrap();
        assert_eq!(candidate.text, "Coverage includes day care.");
    }

    #[test]
    fn test_answer_is_bounded() {
        let context = format!("Coverage includes {}.", "everything ".repeat(40));
        let answer = extract_answer("q", &[context.as_str()], 60);
        assert!(answer.chars().count() <= 60);
        assert!(!answer.contains('\n'));
    }

    #[test]
    fn test_engine_trait() {
        let engine = RuleBasedEngine::default();
        assert_eq!(engine.max_len(), 200);
        assert_eq!(engine.name(), "rule-based");
        let answer = engine
            .answer("q", &["Hospital means an institution with beds.".to_string()])
            .unwrap();
        assert_eq!(answer, "Means an institution with beds.");
    }
}
