// src/utils/text.rs

//! Text cleanup helpers shared by the page parsers.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid integer pattern"));

/// Parse the first run of ASCII digits embedded in `text`.
///
/// Returns `None` when there are no digits or the number does not fit `T`.
pub fn first_integer<T: FromStr>(text: &str) -> Option<T> {
    INTEGER.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_integer() {
        assert_eq!(first_integer::<u32>("Vacancies: 12 openings, 3 cities"), Some(12));
        assert_eq!(first_integer::<i64>("Today: 5h ago"), Some(5));
        assert_eq!(first_integer::<u32>("no digits here"), None);
        assert_eq!(first_integer::<u8>("999 roles"), None);
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Acme\n\t Corp  "), "Acme Corp");
        assert_eq!(normalize_whitespace(""), "");
    }
}
