//! Configuration from environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level DocQA configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocQaConfig {
    /// HTTP server port.
    pub port: u16,
    /// Questions beyond this many are dropped, not answered.
    pub max_questions: usize,
    /// Character budget of the context handed to each worker.
    pub context_chars: usize,
    /// Concurrent answer workers per request.
    pub worker_limit: usize,
    /// Wall-clock budget for a single question.
    pub question_timeout: Duration,
    /// Upper bound on the length of every returned answer, in characters.
    pub answer_max_len: usize,
    /// Chunk window size, in whitespace-delimited tokens.
    pub chunk_words: usize,
    /// Timeout for downloading the source document.
    pub fetch_timeout: Duration,
}

impl Default for DocQaConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            max_questions: 10,
            context_chars: 3000,
            worker_limit: 5,
            question_timeout: Duration::from_millis(5000),
            answer_max_len: 200,
            chunk_words: 1000,
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl DocQaConfig {
    /// Create configuration from the process environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to the defaults; set-but-invalid keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            max_questions: parse_var(&lookup, "DOCQA_MAX_QUESTIONS")?
                .unwrap_or(defaults.max_questions),
            context_chars: parse_var(&lookup, "DOCQA_CONTEXT_CHARS")?
                .unwrap_or(defaults.context_chars),
            worker_limit: parse_var(&lookup, "DOCQA_WORKER_LIMIT")?
                .unwrap_or(defaults.worker_limit),
            question_timeout: parse_var(&lookup, "DOCQA_QUESTION_TIMEOUT_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.question_timeout),
            answer_max_len: parse_var(&lookup, "DOCQA_ANSWER_MAX_LEN")?
                .unwrap_or(defaults.answer_max_len),
            chunk_words: parse_var(&lookup, "DOCQA_CHUNK_WORDS")?
                .unwrap_or(defaults.chunk_words),
            fetch_timeout: parse_var(&lookup, "DOCQA_FETCH_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.worker_limit == 0 {
            return Err(Error::Config("DOCQA_WORKER_LIMIT must be at least 1".into()));
        }
        if self.chunk_words == 0 {
            return Err(Error::Config("DOCQA_CHUNK_WORDS must be at least 1".into()));
        }
        if self.answer_max_len == 0 {
            return Err(Error::Config("DOCQA_ANSWER_MAX_LEN must be at least 1".into()));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{key}: invalid value {raw:?}"))),
    }
}
