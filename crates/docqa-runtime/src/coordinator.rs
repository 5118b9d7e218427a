//! Batch coordinator: bounded fan-out of one request's questions.

use std::sync::Arc;

use docqa_answer::{sanitize, AnswerEngine, RuleBasedEngine};
use docqa_ingest::{should_chunk, Chunker};
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::types::{BatchLimits, FailureKind, QuestionOutcome};

/// Answers a batch of questions against one shared, read-only context.
pub struct BatchCoordinator {
    engine: Arc<dyn AnswerEngine>,
    limits: BatchLimits,
    chunker: Chunker,
}

impl BatchCoordinator {
    pub fn new(limits: BatchLimits, engine: Arc<dyn AnswerEngine>) -> Self {
        let chunker = Chunker::new(limits.chunk_words, docqa_ingest::chunking::DEFAULT_OVERLAP);
        Self {
            engine,
            limits,
            chunker,
        }
    }

    /// Coordinator over the rule-based engine.
    pub fn rule_based(limits: BatchLimits) -> Self {
        let engine = Arc::new(RuleBasedEngine::new(limits.answer_max_len));
        Self::new(limits, engine)
    }

    pub fn limits(&self) -> &BatchLimits {
        &self.limits
    }

    /// The questions that will actually be answered.
    pub fn retained<'q>(&self, questions: &'q [String]) -> &'q [String] {
        &questions[..questions.len().min(self.limits.max_questions)]
    }

    /// Answer every retained question from `text`.
    ///
    /// Returns exactly one sanitized answer per retained question, in input
    /// order. Timeouts and errors are confined to their own slot.
    pub async fn answer_all(&self, text: &str, questions: &[String]) -> Vec<String> {
        let questions = self.retained(questions);
        if questions.is_empty() {
            return Vec::new();
        }

        let context = truncate_context(text, self.limits.context_chars);
        let chunks: Arc<[String]> = self.build_chunks(context).into();
        let semaphore = Arc::new(Semaphore::new(self.limits.worker_limit.max(1)));

        let units = questions.iter().enumerate().map(|(index, question)| {
            let engine = Arc::clone(&self.engine);
            let chunks = Arc::clone(&chunks);
            let semaphore = Arc::clone(&semaphore);
            let question = question.clone();
            let timeout = self.limits.question_timeout;
            async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return QuestionOutcome::Failed(FailureKind::Error),
                };
                answer_one(index, engine, question, chunks, timeout).await
            }
        });

        let outcomes = join_all(units).await;
        let failed = outcomes.iter().filter(|o| o.is_failure()).count();
        info!(
            "Answered {} question(s) with {} ({} failed)",
            outcomes.len(),
            self.engine.name(),
            failed
        );

        outcomes
            .into_iter()
            .map(|outcome| sanitize(&outcome.into_answer(), self.limits.answer_max_len))
            .collect()
    }

    /// One sentinel answer per retained question, without running the engine.
    pub fn fail_all(&self, questions: &[String], kind: FailureKind) -> Vec<String> {
        let answer = sanitize(kind.sentinel(), self.limits.answer_max_len);
        vec![answer; self.retained(questions).len()]
    }

    fn build_chunks(&self, context: &str) -> Vec<String> {
        if context.trim().is_empty() {
            return Vec::new();
        }
        if should_chunk(context, self.chunker.window()) {
            let chunks: Vec<String> = self.chunker.chunks(context).map(|c| c.text).collect();
            debug!("Context split into {} chunk(s)", chunks.len());
            chunks
        } else {
            vec![context.to_string()]
        }
    }
}

async fn answer_one(
    index: usize,
    engine: Arc<dyn AnswerEngine>,
    question: String,
    chunks: Arc<[String]>,
    timeout: std::time::Duration,
) -> QuestionOutcome {
    // A timed-out blocking task is abandoned, not interrupted; its result is dropped.
    let work = tokio::task::spawn_blocking(move || engine.answer(&question, &chunks));

    match tokio::time::timeout(timeout, work).await {
        Ok(Ok(Ok(answer))) => QuestionOutcome::Answered(answer),
        Ok(Ok(Err(e))) => {
            warn!("Question {} failed: {}", index, e);
            QuestionOutcome::Failed(FailureKind::Error)
        }
        Ok(Err(e)) => {
            warn!("Question {} worker aborted: {}", index, e);
            QuestionOutcome::Failed(FailureKind::Error)
        }
        Err(_) => {
            warn!("Question {} timed out after {:?}", index, timeout);
            QuestionOutcome::Failed(FailureKind::Timeout)
        }
    }
}

/// The first `max_chars` characters of `text`.
pub fn truncate_context(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
