//! Lokalint - unknown localization key linter for Swift projects
//!
//! Lokalint scans a source tree for string literals that are expected to
//! resolve against a `.strings` localization resource file and reports every
//! usage whose key is absent from that resource.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, dispatch, output)
//! - `config`: Configuration file loading and parsing
//! - `matcher`: Candidate-key extraction strategies (suffix scan, capture patterns)
//! - `reporter`: Violation rendering styles (xcode, cmd, github)
//! - `runner`: Parallel fan-out over the file list and aggregation
//! - `scanner`: Recursive source-file discovery
//! - `strings`: `.strings` resource-file parser
//! - `validate`: Per-file validation and line/column computation
//! - `violation`: Violation and severity types

pub mod cli;
pub mod config;
pub mod matcher;
pub mod reporter;
pub mod runner;
pub mod scanner;
pub mod strings;
pub mod validate;
pub mod violation;
