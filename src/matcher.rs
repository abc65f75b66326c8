//! Candidate-key extraction from source text.
//!
//! Two strategies exist as a runtime choice: a hand-rolled scan for quoted
//! literals immediately followed by a fixed suffix (the `.localized` idiom),
//! and a list of user-supplied regexes whose single capture group is the key.

use anyhow::{Result, bail};
use regex::Regex;

/// A key extracted from source text, not yet checked against the resource
/// table. `offset` is the byte offset used for line/column conversion: the
/// opening quote for the suffix strategy, the capture group start for the
/// pattern strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub key: String,
    pub offset: usize,
}

/// How candidate keys are located in source text.
///
/// Chosen once at configuration time and shared read-only across workers.
#[derive(Debug)]
pub enum MatchStrategy {
    /// A quoted literal counts only when immediately followed by this suffix,
    /// e.g. `"greeting".localized`.
    Suffix(String),
    /// Every non-overlapping match of every pattern; the first capture group
    /// is the key. Results of all patterns are unioned.
    Patterns(Vec<Regex>),
}

impl MatchStrategy {
    /// Compile and validate a pattern list. Each pattern must carry exactly
    /// one capture group; this is rejected here, before any file is scanned.
    pub fn from_patterns(patterns: &[String]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = match Regex::new(pattern) {
                Ok(regex) => regex,
                Err(err) => bail!("Invalid capture pattern \"{pattern}\": {err}"),
            };
            // captures_len() counts the implicit whole-match group 0.
            if regex.captures_len() != 2 {
                bail!(
                    "Capture pattern \"{pattern}\" must have exactly one capture group, found {}",
                    regex.captures_len() - 1
                );
            }
            compiled.push(regex);
        }
        Ok(MatchStrategy::Patterns(compiled))
    }

    /// Produce all candidate keys in `text`, ordered by offset.
    pub fn candidates(&self, text: &str) -> Vec<Candidate> {
        match self {
            MatchStrategy::Suffix(suffix) => suffix_candidates(text, suffix),
            MatchStrategy::Patterns(patterns) => pattern_candidates(text, patterns),
        }
    }
}

/// Scan for `"literal"<suffix>` occurrences.
///
/// Quotes and the configured suffix are matched at the byte level; slicing is
/// safe because `"` is ASCII and always a char boundary. An unterminated
/// literal ends the scan, and so does a tail shorter than the suffix itself.
fn suffix_candidates(text: &str, suffix: &str) -> Vec<Candidate> {
    let bytes = text.as_bytes();
    let suffix = suffix.as_bytes();
    let mut candidates = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'"' {
            i += 1;
            continue;
        }
        let open = i;
        i += 1;
        let key_start = i;
        while i < bytes.len() && bytes[i] != b'"' {
            i += 1;
        }
        if i >= bytes.len() {
            // Unterminated literal, nothing more to find.
            break;
        }
        let key_end = i;
        i += 1;

        if bytes.len() - i < suffix.len() {
            // Not enough text left to complete the suffix comparison.
            break;
        }
        if &bytes[i..i + suffix.len()] == suffix {
            candidates.push(Candidate {
                key: text[key_start..key_end].to_string(),
                offset: open,
            });
            i += suffix.len();
        }
    }

    candidates
}

/// Union of all matches of all patterns, sorted by offset so the downstream
/// location cursor only ever moves forward.
fn pattern_candidates(text: &str, patterns: &[Regex]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for regex in patterns {
        for captures in regex.captures_iter(text) {
            if let Some(group) = captures.get(1) {
                candidates.push(Candidate {
                    key: group.as_str().to_string(),
                    offset: group.start(),
                });
            }
        }
    }
    candidates.sort_by(|a, b| a.offset.cmp(&b.offset).then_with(|| a.key.cmp(&b.key)));
    candidates
}
