//! Command dispatch and the `check` pipeline: discover files, load the
//! resource table, fan validation out across workers, collect totals.

use std::{
    fs,
    path::Path,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail, ensure};

use super::args::{Arguments, CheckCommand, Command};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::reporter::ReporterKind;
use crate::runner;
use crate::scanner::scan_sources;
use crate::strings::parse_strings;
use crate::violation::{Severity, Violation};

/// Everything a finished `check` run hands to the report layer.
pub struct CheckOutcome {
    /// Sorted for stable output.
    pub violations: Vec<Violation>,
    pub severity: Severity,
    pub reporter: ReporterKind,
    pub files_processed: usize,
    pub total_lines: usize,
    pub scan_time: Duration,
    pub load_time: Duration,
    pub validate_time: Duration,
}

pub enum CommandResult {
    Check(CheckOutcome),
    Init,
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult::Init)
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn check(cmd: CheckCommand) -> Result<CommandResult> {
    ensure!(cmd.threads >= 1, "--threads must be at least 1");

    let mut config = load_config(Path::new("."))?.config;
    if let Some(pattern) = cmd.pattern {
        config.pattern = pattern;
    }
    if !cmd.capture_patterns.is_empty() {
        config.capture_patterns = cmd.capture_patterns;
    }
    let source_root = match cmd.source_root {
        Some(root) => root.to_string_lossy().into_owned(),
        None => config.source_root.clone(),
    };
    let resource_file = cmd
        .resource_file
        .or(config.resource_file.clone())
        .context("No resource file given (pass it as an argument or set 'resourceFile' in the config)")?;

    // InvalidPattern fails fast, before any file is touched.
    let strategy = config.match_strategy()?;

    let (scan_time, scan) = timed(|| {
        scan_sources(&source_root, &config.extensions, &config.ignores, cmd.verbose)
    });
    if scan.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors{}",
            scan.skipped_count,
            if cmd.verbose { "" } else { " (use -v for details)" }
        );
    }

    let (load_time, table) = timed(|| -> Result<_> {
        let text = fs::read_to_string(&resource_file)
            .with_context(|| format!("Failed to read resource file: {resource_file}"))?;
        Ok(parse_strings(&text))
    });
    let table = table?;
    if table.truncated {
        if cmd.strict_resource {
            bail!("Resource file {resource_file} has an unterminated entry");
        }
        eprintln!(
            "Warning: resource file {resource_file} has an unterminated entry; proceeding with {} key(s)",
            table.len()
        );
    }

    let (validate_time, totals) = timed(|| {
        runner::run(
            &scan.files,
            &table,
            &strategy,
            cmd.severity,
            !cmd.no_exact_locations,
            cmd.threads,
        )
    });
    let totals = totals?;

    let mut violations: Vec<Violation> = totals.violations.into_iter().collect();
    violations.sort();

    Ok(CommandResult::Check(CheckOutcome {
        violations,
        severity: cmd.severity,
        reporter: cmd.reporter,
        files_processed: totals.files_processed,
        total_lines: totals.total_lines,
        scan_time,
        load_time,
        validate_time,
    }))
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}

fn timed<T>(work: impl FnOnce() -> T) -> (Duration, T) {
    let start = Instant::now();
    let value = work();
    (start.elapsed(), value)
}
