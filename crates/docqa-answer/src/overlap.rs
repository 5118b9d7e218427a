//! Keyword-overlap sentence fallback.
//!
//! Scores the first sentences of the context by how many question keywords
//! they contain and returns the best one.

use crate::sanitize::{capitalize_first, collapse_line};

/// Sentences examined, counted from the start of the context.
pub const MAX_SENTENCES: usize = 20;
/// Shortest candidate sentence, in characters.
pub const MIN_SENTENCE_CHARS: usize = 20;
/// Longest candidate sentence, in characters.
pub const MAX_SENTENCE_CHARS: usize = 200;
/// Keywords must be longer than this many characters.
const MIN_KEYWORD_CHARS: usize = 3;

/// Lower-cased question tokens long enough to count as keywords.
pub fn keywords(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// Best-scoring sentence of `context` and its score, if any scores above zero.
///
/// Containment is plain substring matching on the lower-cased sentence. Ties
/// go to the earlier sentence.
pub fn best_sentence(keywords: &[String], context: &str) -> Option<(String, usize)> {
    let mut best: Option<(&str, usize)> = None;

    for sentence in context.split('.').take(MAX_SENTENCES) {
        let sentence = sentence.trim();
        let len = sentence.chars().count();
        if !(MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&len) {
            continue;
        }
        let lower = sentence.to_lowercase();
        let score = keywords.iter().filter(|kw| lower.contains(kw.as_str())).count();
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((sentence, score));
        }
    }

    best.map(|(sentence, score)| (shape_sentence(sentence), score))
}

fn shape_sentence(sentence: &str) -> String {
    let mut text = collapse_line(sentence);
    if !text.ends_with('.') {
        text.push('.');
    }
    capitalize_first(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(keywords("What is the grace period?"), vec!["what", "grace", "period"]);
        assert!(keywords("Is it so?").is_empty());
    }

    #[test]
    fn test_best_sentence_scores_overlap() {
        let context = "the policy is issued annually by the insurer. \
                       a grace period of thirty days is allowed for premium payment. \
                       claims are settled within fifteen days";
        let kws = keywords("What is the grace period for premium payment?");
        let (sentence, score) = best_sentence(&kws, context).unwrap();
        assert_eq!(sentence, "A grace period of thirty days is allowed for premium payment.");
        assert_eq!(score, 4);
    }

    #[test]
    fn test_ties_keep_first() {
        let context = "the waiting period applies to all claims. the waiting period is long here";
        let kws = keywords("waiting");
        let (sentence, score) = best_sentence(&kws, context).unwrap();
        assert_eq!(score, 1);
        assert_eq!(sentence, "The waiting period applies to all claims.");
    }

    #[test]
    fn test_zero_score_is_none() {
        let kws = keywords("What is the grace period?");
        assert!(best_sentence(&kws, "the product helps users manage tasks.").is_none());
    }

    #[test]
    fn test_length_window() {
        let kws = keywords("grace");
        // Too short to be a candidate.
        assert!(best_sentence(&kws, "grace is short.").is_none());
        let long = format!("grace {}", "x".repeat(250));
        assert!(best_sentence(&kws, &long).is_none());
    }

    #[test]
    fn test_only_first_twenty_sentences() {
        let mut context = "filler sentence without any match here. ".repeat(MAX_SENTENCES);
        context.push_str("the grace period is thirty days for renewal.");
        let kws = keywords("grace period");
        assert!(best_sentence(&kws, &context).is_none());
    }

    #[test]
    fn test_substring_containment() {
        // "cover" matches inside "coverage"; no word boundaries.
        let kws = keywords("cover");
        let (sentence, _) = best_sentence(&kws, "coverage extends to day care procedures").unwrap();
        assert_eq!(sentence, "Coverage extends to day care procedures.");
    }
}
