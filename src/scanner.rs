//! Source-file discovery: recursive directory walk filtered by extension.

use std::collections::BTreeSet;
use std::path::Path;

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning the source tree.
pub struct ScanResult {
    /// Deduplicated and sorted, so downstream share partitioning (and the
    /// final report) is deterministic for a given tree.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn scan_sources(
    base_dir: &str,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut globs: Vec<Pattern> = Vec::new();
    for pattern in ignore_patterns {
        match Pattern::new(pattern) {
            Ok(glob) => globs.push(glob),
            Err(err) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        pattern,
                        err
                    );
                }
            }
        }
    }

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if globs.iter().any(|glob| glob.matches(&path_str)) {
            continue;
        }

        if path.is_file() && has_wanted_extension(path, extensions) {
            files.insert(path_str.into_owned());
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn has_wanted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
