use crate::error::Result;
use crate::format::FormatHint;
use crate::transforms::Transform;
use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace the way ECMAScript `\s` and `trim` see it: Unicode `White_Space`
/// minus U+0085, plus U+FEFF.
pub const SPACE_CLASS: &str = r"[\s\x{FEFF}--\x{85}]";

/// Negation of [`SPACE_CLASS`]
pub const NON_SPACE_CLASS: &str = r"[^\s\x{FEFF}--\x{85}]";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}+", SPACE_CLASS)).unwrap());

/// Char counterpart of [`SPACE_CLASS`].
///
/// # Examples
/// ```
/// use santext::transforms::is_space;
///
/// assert!(is_space('\u{a0}'));
/// assert!(is_space('\u{feff}'));
/// assert!(!is_space('\u{85}'));
/// ```
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trims leading and trailing [`is_space`] characters.
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Replaces every whitespace run (newlines included) with a single space and
/// trims the result.
///
/// # Examples
/// ```
/// use santext::transforms::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a\n\nb\t c  "), "a b c");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    trim_space(&WHITESPACE_RUN.replace_all(text, " ")).to_string()
}

pub struct CollapseWhitespace;

impl CollapseWhitespace {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for CollapseWhitespace {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        Ok(collapse_whitespace(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse() {
        assert_eq!(collapse_whitespace("  a\n\nb\t c  "), "a b c");
        assert_eq!(collapse_whitespace("one\r\ntwo"), "one two");
        assert_eq!(collapse_whitespace("   "), "");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_bom_is_space_but_next_line_is_not() {
        assert_eq!(collapse_whitespace("\u{feff}a\u{feff}\u{feff}b"), "a b");
        assert_eq!(collapse_whitespace("a\u{85}b "), "a\u{85}b");
        assert_eq!(trim_space("\u{85} x \u{feff}"), "\u{85} x");
    }

    #[test]
    fn test_hint_is_ignored() {
        let transform = CollapseWhitespace::new();
        assert_eq!(
            transform.transform("{ \"a\" :  1 }", FormatHint::Json).unwrap(),
            "{ \"a\" : 1 }"
        );
    }
}
