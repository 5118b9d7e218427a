//! Runtime types.

use std::time::Duration;

use docqa_core::DocQaConfig;

/// Why a question did not get an extracted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The question exceeded its time budget.
    Timeout,
    /// The engine returned an error or panicked.
    Error,
    /// The document yielded no text, so nothing was attempted.
    UnreadableDocument,
}

impl FailureKind {
    /// Fixed answer substituted for this failure.
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::Timeout => "Processing timeout - unable to analyze this question.",
            Self::Error => "Processing error occurred for this question.",
            Self::UnreadableDocument => {
                "Unable to process the document content to answer this question."
            }
        }
    }
}

/// Result of one unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOutcome {
    Answered(String),
    Failed(FailureKind),
}

impl QuestionOutcome {
    pub fn into_answer(self) -> String {
        match self {
            Self::Answered(answer) => answer,
            Self::Failed(kind) => kind.sentinel().to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Limits applied to every batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLimits {
    pub max_questions: usize,
    pub context_chars: usize,
    pub worker_limit: usize,
    pub question_timeout: Duration,
    pub answer_max_len: usize,
    pub chunk_words: usize,
}

impl BatchLimits {
    pub fn from_config(config: &DocQaConfig) -> Self {
        Self {
            max_questions: config.max_questions,
            context_chars: config.context_chars,
            worker_limit: config.worker_limit.max(1),
            question_timeout: config.question_timeout,
            answer_max_len: config.answer_max_len,
            chunk_words: config.chunk_words.max(1),
        }
    }
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self::from_config(&DocQaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_distinct() {
        let all = [
            FailureKind::Timeout,
            FailureKind::Error,
            FailureKind::UnreadableDocument,
        ];
        for a in all {
            for b in all {
                assert_eq!(a == b, a.sentinel() == b.sentinel());
            }
        }
    }

    #[test]
    fn test_outcome_into_answer() {
        assert_eq!(QuestionOutcome::Answered("yes".into()).into_answer(), "yes");
        let failed = QuestionOutcome::Failed(FailureKind::Timeout);
        assert!(failed.is_failure());
        assert_eq!(
            failed.into_answer(),
            "Processing timeout - unable to analyze this question."
        );
    }

    #[test]
    fn test_default_limits() {
        let limits = BatchLimits::default();
        assert_eq!(limits.max_questions, 10);
        assert_eq!(limits.context_chars, 3000);
        assert_eq!(limits.worker_limit, 5);
        assert_eq!(limits.question_timeout, Duration::from_secs(5));
        assert_eq!(limits.answer_max_len, 200);
    }
}
