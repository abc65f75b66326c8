//! Per-file validation: candidate keys that are missing from the resource
//! table become violations.

use std::collections::HashSet;

use crate::matcher::MatchStrategy;
use crate::strings::StringsTable;
use crate::violation::{Severity, Violation};

/// Everything one file contributes to the run.
pub struct FileReport {
    pub violations: HashSet<Violation>,
    /// Used for throughput reporting only, never for correctness.
    pub line_count: usize,
}

/// Converts byte offsets into 1-based line/column coordinates.
///
/// The cursor only moves forward: between consecutive violations it counts
/// newlines in the not-yet-visited span, so the whole pass stays linear in
/// file size no matter how many violations a file has. Offsets handed in must
/// be non-decreasing and sit on char boundaries.
struct LocationCursor<'a> {
    text: &'a str,
    byte: usize,
    line: usize,
    column: usize,
}

impl<'a> LocationCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            line: 1,
            column: 1,
        }
    }

    fn advance_to(&mut self, offset: usize) -> (usize, usize) {
        debug_assert!(offset >= self.byte);
        for ch in self.text[self.byte..offset].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.byte = offset;
        (self.line, self.column)
    }
}

/// Run the match strategy over one file's text and report every candidate
/// key absent from `known`. Lookup is exact and case-sensitive.
///
/// With `exact_locations` off, every violation is reported at 1:1 — a
/// documented precision-for-speed trade, not a defect.
pub fn validate_source(
    path: &str,
    text: &str,
    known: &StringsTable,
    strategy: &MatchStrategy,
    severity: Severity,
    exact_locations: bool,
) -> FileReport {
    let mut violations = HashSet::new();
    let mut cursor = LocationCursor::new(text);

    for candidate in strategy.candidates(text) {
        if known.contains(&candidate.key) {
            continue;
        }
        let (line, column) = if exact_locations {
            cursor.advance_to(candidate.offset)
        } else {
            (1, 1)
        };
        violations.insert(Violation::unknown_key(
            path,
            line,
            column,
            &candidate.key,
            severity,
        ));
    }

    FileReport {
        violations,
        line_count: text.lines().count(),
    }
}
