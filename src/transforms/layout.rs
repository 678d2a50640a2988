use crate::error::Result;
use crate::format::FormatHint;
use crate::transforms::{collapse_whitespace, json, markup, trim_space, Transform};

/// Beautify: re-indents JSON and markup, trims any other text.
pub struct Beautifier;

impl Beautifier {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Beautifier {
    fn transform(&self, text: &str, hint: FormatHint) -> Result<String> {
        match hint {
            FormatHint::Json => json::beautify(text),
            hint if hint.is_markup() => Ok(markup::beautify(text)),
            _ => Ok(trim_space(text).to_string()),
        }
    }
}

/// Minify: compacts JSON and markup, collapses whitespace in any other text.
pub struct Minifier;

impl Minifier {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Minifier {
    fn transform(&self, text: &str, hint: FormatHint) -> Result<String> {
        match hint {
            FormatHint::Json => json::minify(text),
            hint if hint.is_markup() => Ok(markup::minify(text)),
            _ => Ok(collapse_whitespace(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beautify_by_hint() {
        let beautifier = Beautifier::new();
        assert_eq!(
            beautifier.transform("[1,2]", FormatHint::Json).unwrap(),
            "[\n  1,\n  2\n]"
        );
        assert_eq!(
            beautifier
                .transform("<list><b>x</b></list>", FormatHint::Xml)
                .unwrap(),
            "<list>\n  <b>x</b>\n</list>"
        );
        assert_eq!(
            beautifier.transform("\n  body { }  \n", FormatHint::Css).unwrap(),
            "body { }"
        );
    }

    #[test]
    fn test_single_letter_tags_do_not_indent() {
        assert_eq!(
            Beautifier::new()
                .transform("<a><b>x</b></a>", FormatHint::Html)
                .unwrap(),
            "<a>\n<b>x</b>\n</a>"
        );
    }

    #[test]
    fn test_minify_by_hint() {
        let minifier = Minifier::new();
        assert_eq!(
            minifier.transform("{ \"a\": [ 1 ] }", FormatHint::Json).unwrap(),
            "{\"a\":[1]}"
        );
        assert_eq!(
            minifier
                .transform("<div>  <span>x</span>  </div>", FormatHint::Html)
                .unwrap(),
            "<div><span>x</span></div>"
        );
        assert_eq!(
            minifier
                .transform("let  a =\n  1;", FormatHint::Js)
                .unwrap(),
            "let a = 1;"
        );
    }

    #[test]
    fn test_json_hint_on_markup_fails() {
        assert!(Minifier::new()
            .transform("<div></div>", FormatHint::Json)
            .is_err());
    }
}
