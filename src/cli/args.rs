//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: scan sources and report unknown localization keys
//! - `init`: initialize lokalint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::reporter::ReporterKind;
use crate::violation::Severity;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Path to the .strings localization resource file (overrides config file)
    pub resource_file: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Suffix which must follow a string literal to be matched (overrides config file)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Regex with exactly one capture group whose match is the key.
    /// Can be specified multiple times; replaces the suffix strategy.
    #[arg(long = "capture-pattern")]
    pub capture_patterns: Vec<String>,

    /// Severity assigned to reported violations
    #[arg(long, value_enum, default_value_t = Severity::Warning)]
    pub severity: Severity,

    /// Output style for violations
    #[arg(long, value_enum, default_value_t = ReporterKind::Xcode)]
    pub reporter: ReporterKind,

    /// Number of worker threads
    #[arg(long, default_value_t = 1)]
    pub threads: usize,

    /// Skip exact line/column computation; violations are reported at 1:1
    #[arg(long)]
    pub no_exact_locations: bool,

    /// Fail when the resource file contains an unterminated entry
    /// instead of proceeding with the keys captured so far
    #[arg(long)]
    pub strict_resource: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan source files and report localization keys missing from the resource file
    Check(CheckCommand),
    /// Initialize a new .lokalintrc.json configuration file
    Init,
}
