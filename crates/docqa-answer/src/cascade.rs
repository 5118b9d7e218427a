//! Clause pattern cascade.
//!
//! An ordered table of regular expressions for common declarative clause
//! shapes in policy and contract text. The first pattern (by priority) with
//! any match wins; later patterns are never consulted once one matches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sanitize::{capitalize_first, collapse_line, truncate_chars};

/// Longest span returned from a pattern match, including the ellipsis.
pub const MAX_MATCH_CHARS: usize = 150;

/// One entry of the cascade.
#[derive(Debug)]
pub struct ClausePattern {
    pub priority: usize,
    pub name: &'static str,
    regex: Regex,
}

impl ClausePattern {
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// The cascade, highest priority first. Matching is case-insensitive and
/// `.` crosses newlines.
pub static CLAUSE_PATTERNS: Lazy<Vec<ClausePattern>> = Lazy::new(|| {
    [
        ("obligation", r"the company.*?shall.*?(?:indemnify|pay|cover).*?(?:\.|;)"),
        ("coverage", r"coverage.*?includes?.*?(?:\.|;)"),
        ("benefits", r"benefits.*?(?:are|include).*?(?:\.|;)"),
        ("means", r"means.*?(?:\.|;)"),
        ("defined_as", r"defined as.*?(?:\.|;)"),
        ("refers_to", r"refers to.*?(?:\.|;)"),
        ("conditional", r"(?:if|when|provided|subject to).*?(?:\.|;)"),
        ("eligibility", r"eligibility.*?(?:\.|;)"),
        ("conditions", r"conditions.*?(?:\.|;)"),
    ]
    .into_iter()
    .enumerate()
    .map(|(priority, (name, pattern))| ClausePattern {
        priority,
        name,
        regex: Regex::new(&format!("(?is){pattern}")).unwrap(),
    })
    .collect()
});

/// Find the first pattern, in priority order, that matches anywhere in
/// `context`, along with that pattern's leftmost match.
pub fn first_match(context: &str) -> Option<(&'static ClausePattern, &str)> {
    CLAUSE_PATTERNS.iter().find_map(|pattern| {
        pattern
            .regex
            .find(context)
            .map(|m| (pattern, m.as_str()))
    })
}

/// Turn a raw match into answer text: whitespace collapsed, bounded to
/// [`MAX_MATCH_CHARS`], first letter capitalized.
pub fn shape_match(raw: &str) -> String {
    let line = collapse_line(raw);
    capitalize_first(&truncate_chars(&line, MAX_MATCH_CHARS))
}
