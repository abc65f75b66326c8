use std::{cmp::Ordering, fmt};

use clap::ValueEnum;

/// Linter-policy classification of a finding.
///
/// This is how the finding should be surfaced to the user (and whether it
/// should fail the run), not an implementation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A localization key that failed to resolve against the resource table,
/// at a specific source location.
///
/// Equality and hashing cover the full tuple, so identical findings produced
/// by overlapping match strategies collapse naturally inside a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    pub file: String,
    /// 1-based line of the offending literal's first character.
    pub line: usize,
    /// 1-based column; resets to 1 after each newline.
    pub column: usize,
    pub key: String,
    pub severity: Severity,
}

impl Violation {
    pub fn unknown_key(
        file: &str,
        line: usize,
        column: usize,
        key: &str,
        severity: Severity,
    ) -> Self {
        Self {
            file: file.to_string(),
            line,
            column,
            key: key.to_string(),
            severity,
        }
    }
}

impl Ord for Violation {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by file, then position, then key. The key comparison keeps
        // report output stable when a set iterates in arbitrary order.
        self.file
            .cmp(&other.file)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.column.cmp(&other.column))
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Violation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
