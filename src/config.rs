use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::matcher::MatchStrategy;

pub const CONFIG_FILE_NAME: &str = ".lokalintrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File extensions to scan, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns for paths to skip while scanning.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Suffix that must immediately follow a string literal for it to count
    /// as a localization key (the suffix match strategy).
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Regexes with exactly one capture group each. When non-empty, these
    /// replace the suffix strategy.
    #[serde(default)]
    pub capture_patterns: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Path to the `.strings` resource file. The CLI positional argument
    /// takes precedence.
    #[serde(default)]
    pub resource_file: Option<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["swift".to_string()]
}

fn default_pattern() -> String {
    ".localized".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignores: Vec::new(),
            pattern: default_pattern(),
            capture_patterns: Vec::new(),
            source_root: default_source_root(),
            resource_file: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Invalid ignore globs and invalid capture patterns are rejected here,
    /// before any file is scanned.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        if !self.capture_patterns.is_empty() {
            MatchStrategy::from_patterns(&self.capture_patterns)?;
        }
        Ok(())
    }

    /// Build the match strategy: capture patterns when configured, the
    /// suffix scan otherwise.
    pub fn match_strategy(&self) -> Result<MatchStrategy> {
        if self.capture_patterns.is_empty() {
            Ok(MatchStrategy::Suffix(self.pattern.clone()))
        } else {
            MatchStrategy::from_patterns(&self.capture_patterns)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extensions, vec!["swift"]);
        assert_eq!(config.pattern, ".localized");
        assert!(config.ignores.is_empty());
        assert!(config.capture_patterns.is_empty());
        assert!(config.resource_file.is_none());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "extensions": ["swift", "m"],
            "ignores": ["**/Pods/**"],
            "pattern": ".translated"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.extensions, vec!["swift", "m"]);
        assert_eq!(config.ignores, vec!["**/Pods/**"]);
        assert_eq!(config.pattern, ".translated");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "ignores": ["**/Carthage/**"] }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.ignores, vec!["**/Carthage/**"]);
        assert_eq!(config.extensions, default_extensions());
        assert_eq!(config.pattern, default_pattern());
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = r#"{
            "capturePatterns": ["NSLocalizedString\\(\"([^\"]*)\""],
            "sourceRoot": "Sources",
            "resourceFile": "en.lproj/Localizable.strings"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.capture_patterns.len(), 1);
        assert_eq!(config.source_root, "Sources");
        assert_eq!(
            config.resource_file.as_deref(),
            Some("en.lproj/Localizable.strings")
        );
    }

    #[test]
    fn test_validate_rejects_invalid_ignore_glob() {
        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_rejects_pattern_without_capture_group() {
        let config = Config {
            capture_patterns: vec!["no_capture".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_match_strategy_defaults_to_suffix() {
        let config = Config::default();
        let strategy = config.match_strategy().unwrap();
        assert!(matches!(strategy, MatchStrategy::Suffix(s) if s == ".localized"));
    }

    #[test]
    fn test_match_strategy_prefers_capture_patterns() {
        let config = Config {
            capture_patterns: vec![r#"t\("([^"]*)"\)"#.to_string()],
            ..Default::default()
        };
        let strategy = config.match_strategy().unwrap();
        assert!(matches!(strategy, MatchStrategy::Patterns(p) if p.len() == 1));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("Sources").join("App");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "pattern": ".i18n" }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.pattern, ".i18n");
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.pattern, ".localized");
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "capturePatterns": ["(a)(b)"] }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.extensions, default_extensions());
    }
}
