use crate::error::Result;
use crate::format::FormatHint;
use crate::transforms::{is_space, Transform, NON_SPACE_CLASS};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// A word starts at an ASCII word character and runs through non-whitespace
static TITLE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[0-9A-Za-z_]{}*", NON_SPACE_CLASS)).unwrap());

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub struct Uppercase;

impl Uppercase {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Uppercase {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        Ok(text.to_uppercase())
    }
}

pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Lowercase {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        Ok(text.to_lowercase())
    }
}

/// Capitalizes the first character of every word and lowercases the rest.
pub struct TitleCase;

impl TitleCase {
    pub fn new() -> Self {
        Self
    }

    fn title_case(text: &str) -> String {
        TITLE_WORD
            .replace_all(text, |caps: &Captures| {
                let mut chars = caps[0].chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .into_owned()
    }
}

impl Transform for TitleCase {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        Ok(Self::title_case(text))
    }
}

/// Approximate camelCase conversion.
///
/// Every uppercase ASCII letter and every ASCII word character that starts a
/// word is uppercased (lowercased when it is the very first character), then
/// all whitespace is dropped. Acronyms and punctuation get no special care.
pub struct CamelCase;

impl CamelCase {
    pub fn new() -> Self {
        Self
    }

    fn camel_case(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut prev_word = false;

        for (i, c) in text.char_indices() {
            let word = is_word_char(c);
            let boundary = c.is_ascii_uppercase() || (word && !prev_word);
            prev_word = word;

            if is_space(c) {
                continue;
            }
            if boundary {
                if i == 0 {
                    result.push(c.to_ascii_lowercase());
                } else {
                    result.push(c.to_ascii_uppercase());
                }
            } else {
                result.push(c);
            }
        }
        result
    }
}

impl Transform for CamelCase {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        Ok(Self::camel_case(text))
    }
}

/// Splits the text into snake_case tokens, scanning left to right.
///
/// At each position the first matching rule wins:
/// 1. an uppercase run of two or more letters followed by a capitalized word
///    or by a word boundary (the longest such run)
/// 2. an optional uppercase letter followed by lowercase letters
/// 3. a single uppercase letter
/// 4. a run of digits
///
/// Anything else is skipped.
///
/// # Examples
/// ```
/// use santext::transforms::snake_tokens;
///
/// assert_eq!(snake_tokens("XMLHttpRequest2"), vec!["XML", "Http", "Request", "2"]);
/// ```
pub fn snake_tokens(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match match_token(bytes, pos) {
            Some(end) => {
                tokens.push(&text[pos..end]);
                pos = end;
            }
            None => pos += 1,
        }
    }
    tokens
}

fn match_token(bytes: &[u8], start: usize) -> Option<usize> {
    match_acronym(bytes, start)
        .or_else(|| match_word(bytes, start))
        .or_else(|| match_upper(bytes, start))
        .or_else(|| match_digits(bytes, start))
}

fn run_len(bytes: &[u8], start: usize, pred: fn(&u8) -> bool) -> usize {
    bytes[start..].iter().take_while(|b| pred(*b)).count()
}

fn match_acronym(bytes: &[u8], start: usize) -> Option<usize> {
    let run = run_len(bytes, start, u8::is_ascii_uppercase);
    if run < 2 {
        return None;
    }
    (2..=run).rev().map(|len| start + len).find(|&end| {
        let capitalized_next = end + 1 < bytes.len()
            && bytes[end].is_ascii_uppercase()
            && bytes[end + 1].is_ascii_lowercase();
        let boundary = end == bytes.len() || !is_word_byte(bytes[end]);
        capitalized_next || boundary
    })
}

fn match_word(bytes: &[u8], start: usize) -> Option<usize> {
    let lower_start = if bytes[start].is_ascii_uppercase() {
        start + 1
    } else {
        start
    };
    if lower_start >= bytes.len() {
        return None;
    }
    match run_len(bytes, lower_start, u8::is_ascii_lowercase) {
        0 => None,
        n => Some(lower_start + n),
    }
}

fn match_upper(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start].is_ascii_uppercase().then_some(start + 1)
}

fn match_digits(bytes: &[u8], start: usize) -> Option<usize> {
    match run_len(bytes, start, u8::is_ascii_digit) {
        0 => None,
        n => Some(start + n),
    }
}

/// Lowercases the snake tokens and joins them with `_`. Text without any
/// token is returned unchanged.
pub struct SnakeCase;

impl SnakeCase {
    pub fn new() -> Self {
        Self
    }

    fn snake_case(text: &str) -> String {
        let tokens = snake_tokens(text);
        if tokens.is_empty() {
            return text.to_string();
        }
        tokens
            .iter()
            .map(|token| token.to_lowercase())
            .collect::<Vec<String>>()
            .join("_")
    }
}

impl Transform for SnakeCase {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        Ok(Self::snake_case(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<T: Transform>(transform: T, text: &str) -> String {
        transform.transform(text, FormatHint::PlainText).unwrap()
    }

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(run(Uppercase::new(), "Straße ok"), "STRASSE OK");
        assert_eq!(run(Lowercase::new(), "ÀB Cd"), "àb cd");
        let once = run(Uppercase::new(), "mIxEd ünï");
        assert_eq!(run(Uppercase::new(), &once), once);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(run(TitleCase::new(), "hello WORLD"), "Hello World");
        assert_eq!(run(TitleCase::new(), "  the  quick\tfox "), "  The  Quick\tFox ");
        assert_eq!(run(TitleCase::new(), "(hello) x-RAY"), "(Hello) X-ray");
        assert_eq!(run(TitleCase::new(), ""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(run(CamelCase::new(), "hello world"), "helloWorld");
        assert_eq!(run(CamelCase::new(), "Hello World Again"), "helloWorldAgain");
        assert_eq!(run(CamelCase::new(), "foo-bar baz"), "foo-BarBaz");
        assert_eq!(run(CamelCase::new(), "XML parser"), "xMLParser");
        assert_eq!(run(CamelCase::new(), " leading space"), "LeadingSpace");
        assert_eq!(run(CamelCase::new(), ""), "");
    }

    #[test]
    fn test_bom_separates_words() {
        assert_eq!(run(CamelCase::new(), "hello\u{feff}world"), "helloWorld");
        assert_eq!(run(TitleCase::new(), "ab\u{feff}cd"), "Ab\u{feff}Cd");
        assert_eq!(run(TitleCase::new(), "ab\u{85}CD"), "Ab\u{85}cd");
    }

    #[test]
    fn test_snake_tokens() {
        assert_eq!(snake_tokens("HelloWorld42"), vec!["Hello", "World", "42"]);
        assert_eq!(snake_tokens("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(snake_tokens("ABC42"), vec!["A", "B", "C", "42"]);
        assert_eq!(snake_tokens("some API call"), vec!["some", "API", "call"]);
        assert!(snake_tokens("!!! ???").is_empty());
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(run(SnakeCase::new(), "HelloWorld42"), "hello_world_42");
        assert_eq!(run(SnakeCase::new(), "hello world"), "hello_world");
        assert_eq!(run(SnakeCase::new(), "getHTTPResponse"), "get_http_response");
        assert_eq!(run(SnakeCase::new(), "café au lait"), "caf_au_lait");
    }

    #[test]
    fn test_snake_case_without_tokens_returns_input() {
        assert_eq!(run(SnakeCase::new(), "--- !!!"), "--- !!!");
        assert_eq!(run(SnakeCase::new(), ""), "");
    }
}
