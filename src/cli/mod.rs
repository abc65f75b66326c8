use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, CheckCommand, Command};
pub use exit_status::ExitStatus;
pub use run::{CheckOutcome, CommandResult};

use crate::violation::Severity;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_status(&result))
}

/// Violations only fail the run under `error` severity; a warning-severity
/// run reports them but exits clean.
fn exit_status(result: &CommandResult) -> ExitStatus {
    match result {
        CommandResult::Check(outcome)
            if outcome.severity == Severity::Error && !outcome.violations.is_empty() =>
        {
            ExitStatus::Failure
        }
        CommandResult::Check(_) | CommandResult::Init => ExitStatus::Success,
    }
}
