//! Request pipeline: document bytes → text → batch of answers.

use std::sync::Arc;

use docqa_answer::AnswerEngine;
use docqa_core::{DocQaConfig, ExtractionFailure};
use docqa_ingest::ExtractedText;
use tracing::{info, warn};

use crate::coordinator::BatchCoordinator;
use crate::types::{BatchLimits, FailureKind};

/// Per-process answering pipeline. Holds no per-request state.
pub struct Pipeline {
    coordinator: BatchCoordinator,
}

impl Pipeline {
    /// Pipeline over the rule-based engine with limits from `config`.
    pub fn new(config: &DocQaConfig) -> Self {
        Self {
            coordinator: BatchCoordinator::rule_based(BatchLimits::from_config(config)),
        }
    }

    pub fn with_engine(limits: BatchLimits, engine: Arc<dyn AnswerEngine>) -> Self {
        Self {
            coordinator: BatchCoordinator::new(limits, engine),
        }
    }

    pub fn coordinator(&self) -> &BatchCoordinator {
        &self.coordinator
    }

    /// Extract text on a blocking thread. A parser panic is reported as
    /// `Unparseable`.
    pub async fn extract(&self, document: Vec<u8>) -> Result<ExtractedText, ExtractionFailure> {
        tokio::task::spawn_blocking(move || docqa_ingest::extract_text(&document))
            .await
            .unwrap_or_else(|e| {
                Err(ExtractionFailure::Unparseable(format!(
                    "parser aborted: {e}"
                )))
            })
    }

    /// Answer `questions` about `document`.
    ///
    /// Always returns `min(questions.len(), max_questions)` answers. When the
    /// document yields no text, every slot carries the unreadable-document
    /// sentinel.
    pub async fn answer_document(&self, document: Vec<u8>, questions: &[String]) -> Vec<String> {
        let size = document.len();
        match self.extract(document).await {
            Ok(text) => {
                info!(
                    "Extracted {} page(s) from {} byte document",
                    text.page_count(),
                    size
                );
                self.coordinator.answer_all(text.as_str(), questions).await
            }
            Err(failure) => {
                warn!("Document unreadable: {}", failure);
                self.coordinator
                    .fail_all(questions, FailureKind::UnreadableDocument)
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&DocQaConfig::default())
    }
}

/// Answer `questions` about `document` with the default limits.
pub async fn answer_document(document: Vec<u8>, questions: &[String]) -> Vec<String> {
    Pipeline::default().answer_document(document, questions).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_document() {
        let questions = vec!["What is covered?".to_string(), "Grace period?".to_string()];
        let answers = answer_document(b"not a pdf".to_vec(), &questions).await;
        assert_eq!(answers.len(), 2);
        for answer in &answers {
            assert_eq!(answer, FailureKind::UnreadableDocument.sentinel());
        }
    }

    #[tokio::test]
    async fn test_extract_failure_is_value() {
        let pipeline = Pipeline::default();
        let result = pipeline.extract(Vec::new()).await;
        assert!(matches!(result, Err(ExtractionFailure::Unparseable(_))));
    }

    #[tokio::test]
    async fn test_empty_questions_on_garbage() {
        let answers = answer_document(b"junk".to_vec(), &[]).await;
        assert!(answers.is_empty());
    }
}
