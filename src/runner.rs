//! Parallel fan-out over the file list.
//!
//! The file list is split into contiguous shares, one per worker, computed
//! before anything runs. Workers never communicate: each owns its share,
//! accumulates its own results, and reports exactly once. The join barrier
//! is rayon's `collect` over `Result`s, which waits for every share and
//! surfaces the first failure, so the run is all-or-nothing.

use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result, ensure};
use rayon::prelude::*;

use crate::matcher::MatchStrategy;
use crate::strings::StringsTable;
use crate::validate::validate_source;
use crate::violation::{Severity, Violation};

/// Aggregate of an entire run.
#[derive(Debug)]
pub struct RunTotals {
    pub violations: HashSet<Violation>,
    pub total_lines: usize,
    pub files_processed: usize,
}

struct ShareOutcome {
    violations: HashSet<Violation>,
    lines: usize,
    files: usize,
}

/// Split `items` into `workers` contiguous shares. All shares but the last
/// hold `floor(len / workers)` items; the last absorbs the remainder. When
/// the worker count exceeds the item count, trailing shares are simply empty.
pub fn partition<T>(items: &[T], workers: usize) -> Vec<&[T]> {
    debug_assert!(workers >= 1);
    let base = items.len() / workers;
    (0..workers)
        .map(|worker| {
            let start = base * worker;
            let end = if worker == workers - 1 {
                items.len()
            } else {
                start + base
            };
            &items[start..end]
        })
        .collect()
}

/// Read and validate every file exactly once, in parallel across `workers`
/// shares, and aggregate. Aggregation (set union, count sums) is commutative
/// and associative, so share-to-worker assignment never affects the result.
///
/// Any unreadable file fails the whole run; partial results from other
/// shares are discarded.
pub fn run(
    files: &[String],
    known: &StringsTable,
    strategy: &MatchStrategy,
    severity: Severity,
    exact_locations: bool,
    workers: usize,
) -> Result<RunTotals> {
    ensure!(workers >= 1, "worker count must be at least 1");

    let outcomes: Vec<ShareOutcome> = partition(files, workers)
        .into_par_iter()
        .map(|share| process_share(share, known, strategy, severity, exact_locations))
        .collect::<Result<_>>()?;

    let mut totals = RunTotals {
        violations: HashSet::new(),
        total_lines: 0,
        files_processed: 0,
    };
    for outcome in outcomes {
        totals.violations.extend(outcome.violations);
        totals.total_lines += outcome.lines;
        totals.files_processed += outcome.files;
    }
    Ok(totals)
}

fn process_share(
    share: &[String],
    known: &StringsTable,
    strategy: &MatchStrategy,
    severity: Severity,
    exact_locations: bool,
) -> Result<ShareOutcome> {
    let mut violations = HashSet::new();
    let mut lines = 0;
    for path in share {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {path}"))?;
        let report = validate_source(path, &text, known, strategy, severity, exact_locations);
        violations.extend(report.violations);
        lines += report.line_count;
    }
    Ok(ShareOutcome {
        violations,
        lines,
        files: share.len(),
    })
}
