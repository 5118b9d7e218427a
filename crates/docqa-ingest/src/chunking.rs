//! Word-window chunking.
//!
//! Text is split on whitespace and cut into fixed-size token windows that
//! overlap by a fraction of the window. Default overlap is 25%, so each
//! window starts three quarters of a window after the previous one.

use tracing::debug;

/// Default window size, in tokens.
pub const DEFAULT_WINDOW_TOKENS: usize = 1000;
/// Default fraction of a window shared with the next one.
pub const DEFAULT_OVERLAP: f64 = 0.25;

/// A window of whitespace-delimited tokens, re-joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub start_token: usize,
    pub token_count: usize,
    pub text: String,
}

impl Chunk {
    /// One past the last token index covered by this chunk.
    pub fn end_token(&self) -> usize {
        self.start_token + self.token_count
    }
}

/// Overlapping word-window chunker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chunker {
    window: usize,
    step: usize,
}

impl Chunker {
    /// `overlap` is clamped to `[0, 1)`; a zero window is treated as one token.
    pub fn new(window: usize, overlap: f64) -> Self {
        let window = window.max(1);
        let overlap = if overlap.is_finite() {
            overlap.clamp(0.0, 0.99)
        } else {
            0.0
        };
        let overlap_tokens = (window as f64 * overlap).round() as usize;
        let step = window.saturating_sub(overlap_tokens).max(1);
        Self { window, step }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Distance between the starts of consecutive windows.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Lazily iterate the windows of `text`. Calling this again on the same
    /// text yields the same sequence.
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        let tokens: Vec<&'a str> = text.split_whitespace().collect();
        debug!(
            "Chunking {} tokens (window={}, step={})",
            tokens.len(),
            self.window,
            self.step
        );
        Chunks {
            tokens,
            window: self.window,
            step: self.step,
            start: 0,
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_TOKENS, DEFAULT_OVERLAP)
    }
}

/// Iterator over the windows produced by [`Chunker::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    tokens: Vec<&'a str>,
    window: usize,
    step: usize,
    start: usize,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.start >= self.tokens.len() {
            return None;
        }
        let end = (self.start + self.window).min(self.tokens.len());
        let chunk = Chunk {
            start_token: self.start,
            token_count: end - self.start,
            text: self.tokens[self.start..end].join(" "),
        };
        self.start += self.step;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len().saturating_sub(self.start);
        let n = remaining.div_ceil(self.step);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

/// Whether `text` is long enough to need more than one window.
pub fn should_chunk(text: &str, window: usize) -> bool {
    text.split_whitespace().nth(window).is_some()
}
