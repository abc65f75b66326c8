//! Rendering of violations into report lines.
//!
//! Formatting is kept out of the validation core so the library can be used
//! without printing side effects.

use std::fmt;

use clap::ValueEnum;
use colored::Colorize;

use crate::violation::{Severity, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReporterKind {
    /// Compiler-diagnostic style, clickable in Xcode and most editors.
    Xcode,
    /// Human-oriented terminal output.
    Cmd,
    /// GitHub Actions workflow annotations.
    Github,
}

impl fmt::Display for ReporterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReporterKind::Xcode => write!(f, "xcode"),
            ReporterKind::Cmd => write!(f, "cmd"),
            ReporterKind::Github => write!(f, "github"),
        }
    }
}

impl ReporterKind {
    pub fn render(&self, violation: &Violation) -> String {
        match self {
            ReporterKind::Xcode => format!(
                "{}:{}:{}: {}: Unknown key: {}",
                violation.file, violation.line, violation.column, violation.severity, violation.key
            ),
            ReporterKind::Cmd => {
                let line = format!(
                    "  [{},{}] {}: Unknown key: {}",
                    violation.line, violation.column, violation.file, violation.key
                );
                match violation.severity {
                    Severity::Error => line.red().to_string(),
                    Severity::Warning => line.yellow().to_string(),
                }
            }
            ReporterKind::Github => format!(
                "::{} file={},line={},col={}::Unknown localization key: {}",
                violation.severity, violation.file, violation.line, violation.column, violation.key
            ),
        }
    }
}
