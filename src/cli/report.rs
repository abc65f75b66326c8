//! Printing of check results: one rendered line per violation, then a
//! summary with counts and phase timings.

use colored::Colorize;

use super::run::{CheckOutcome, CommandResult};
use crate::config::CONFIG_FILE_NAME;

pub fn print(result: &CommandResult) {
    match result {
        CommandResult::Check(outcome) => print_check(outcome),
        CommandResult::Init => {
            println!("{} Created {}", "\u{2713}".green(), CONFIG_FILE_NAME);
        }
    }
}

fn print_check(outcome: &CheckOutcome) {
    for violation in &outcome.violations {
        println!("{}", outcome.reporter.render(violation));
    }

    if outcome.violations.is_empty() {
        println!(
            "{} {}",
            "\u{2713}".green(),
            format!(
                "Checked {} source {} ({} lines) - no unknown keys found",
                outcome.files_processed,
                if outcome.files_processed == 1 {
                    "file"
                } else {
                    "files"
                },
                outcome.total_lines
            )
            .green()
        );
    } else {
        println!(
            "{}",
            format!(
                "Found {} unresolved {}!",
                outcome.violations.len(),
                if outcome.violations.len() == 1 {
                    "localization"
                } else {
                    "localizations"
                }
            )
            .bold()
            .red()
        );
    }

    let total = outcome.scan_time + outcome.load_time + outcome.validate_time;
    let validate_secs = outcome.validate_time.as_secs_f64();
    let throughput = if validate_secs > 0.0 {
        outcome.files_processed as f64 / validate_secs
    } else {
        0.0
    };
    println!("{}", format!("Executed in: {:.3}s", total.as_secs_f64()).blue().italic());
    println!(
        "{}",
        format!(
            "  - Scan directory recursively: {:.3}s",
            outcome.scan_time.as_secs_f64()
        )
        .cyan()
        .italic()
    );
    println!(
        "{}",
        format!(
            "  - Load localization file    : {:.3}s",
            outcome.load_time.as_secs_f64()
        )
        .cyan()
        .italic()
    );
    println!(
        "{}",
        format!(
            "  - Parse and validate sources: {:.3}s @ {:.0} files/second",
            validate_secs, throughput
        )
        .cyan()
        .italic()
    );
}
