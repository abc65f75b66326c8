//! Parser for `.strings`-style localization resource files.
//!
//! The format is a sequence of `"key" = "value";` entries. Only the quote
//! boundaries matter: entries need not be newline-delimited and anything
//! between a key's closing quote and the value's opening quote is skipped.
//! A backslash immediately before a quote inside a value is an escaped quote
//! and does not terminate the value.

use std::collections::HashMap;

/// The set of localization keys known to the resource file.
///
/// Values are captured for completeness but nothing downstream reads them.
/// Built once per run and shared read-only across all workers.
#[derive(Debug, Default)]
pub struct StringsTable {
    entries: HashMap<String, String>,
    /// True when the input ended mid-entry (unterminated key or value).
    /// Entries captured before the truncation point are still present.
    pub truncated: bool,
}

impl StringsTable {
    /// Exact, case-sensitive membership test.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

enum State {
    Outside,
    InKey,
    AwaitingValueQuote,
    InValue,
    InValueEscape,
}

/// Parse resource text into a [`StringsTable`].
///
/// Duplicate keys follow "last one wins". Malformed input (end of text while
/// inside a key or value) never loops: scanning stops and whatever was
/// captured so far is returned with `truncated` set, leaving the hard-fail
/// decision to the caller.
pub fn parse_strings(text: &str) -> StringsTable {
    let mut entries = HashMap::new();
    let mut key = String::new();
    let mut value = String::new();
    let mut state = State::Outside;

    for ch in text.chars() {
        state = match state {
            State::Outside => {
                if ch == '"' {
                    key.clear();
                    State::InKey
                } else {
                    State::Outside
                }
            }
            State::InKey => {
                if ch == '"' {
                    State::AwaitingValueQuote
                } else {
                    key.push(ch);
                    State::InKey
                }
            }
            // Skips the `=` and surrounding whitespace, whatever it looks like.
            State::AwaitingValueQuote => {
                if ch == '"' {
                    value.clear();
                    State::InValue
                } else {
                    State::AwaitingValueQuote
                }
            }
            State::InValue => match ch {
                '\\' => State::InValueEscape,
                '"' => {
                    entries.insert(key.clone(), value.clone());
                    State::Outside
                }
                _ => {
                    value.push(ch);
                    State::InValue
                }
            },
            // The escaped character is kept verbatim, backslash included.
            State::InValueEscape => {
                value.push('\\');
                value.push(ch);
                State::InValue
            }
        };
    }

    let truncated = !matches!(state, State::Outside);
    StringsTable { entries, truncated }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_entry() {
        let table = parse_strings(r#""greeting" = "Hello";"#);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("greeting"), Some("Hello"));
        assert!(!table.truncated);
    }

    #[test]
    fn test_multiple_entries() {
        let table = parse_strings(
            r#"
            "greeting" = "Hello";
            "farewell" = "Goodbye";
            "#,
        );
        assert_eq!(table.len(), 2);
        assert!(table.contains("greeting"));
        assert!(table.contains("farewell"));
    }

    #[test]
    fn test_whitespace_tolerant_and_single_line() {
        let table = parse_strings(r#""a"="1";"b"   =   "2" ;"#);
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), Some("2"));
    }

    #[test]
    fn test_escaped_quote_does_not_terminate_value() {
        let table = parse_strings(r#""quote" = "She said \"hi\"";"#);
        assert_eq!(table.get("quote"), Some(r#"She said \"hi\""#));
        assert!(!table.truncated);
    }

    #[test]
    fn test_escaped_backslash_in_value() {
        let table = parse_strings(r#""path" = "C:\\Users";"#);
        assert_eq!(table.get("path"), Some(r"C:\\Users"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let table = parse_strings(
            r#"
            "greeting" = "Hello";
            "greeting" = "Hi";
            "#,
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("greeting"), Some("Hi"));
    }

    #[test]
    fn test_unterminated_key_does_not_hang() {
        let table = parse_strings(r#""onlyKey"#);
        assert!(table.is_empty());
        assert!(table.truncated);
    }

    #[test]
    fn test_unterminated_value_keeps_earlier_entries() {
        let table = parse_strings(r#""a" = "1"; "b" = "unfinished"#);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some("1"));
        assert!(table.truncated);
    }

    #[test]
    fn test_key_without_value_does_not_hang() {
        // `"onlyKey"` followed by nothing resolvable as a value.
        let table = parse_strings(r#""onlyKey""#);
        assert!(table.is_empty());
        assert!(table.truncated);
    }

    #[test]
    fn test_empty_input() {
        let table = parse_strings("");
        assert!(table.is_empty());
        assert!(!table.truncated);
    }

    #[test]
    fn test_empty_key_and_value() {
        let table = parse_strings(r#""" = "";"#);
        assert_eq!(table.get(""), Some(""));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let table = parse_strings(r#""Greeting" = "Hello";"#);
        assert!(table.contains("Greeting"));
        assert!(!table.contains("greeting"));
    }

    #[test]
    fn test_unicode_keys_and_values() {
        let table = parse_strings(r#""挨拶" = "こんにちは";"#);
        assert_eq!(table.get("挨拶"), Some("こんにちは"));
    }
}
