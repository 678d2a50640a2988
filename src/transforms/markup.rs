//! Line-based heuristics for HTML/XML.
//!
//! Nothing here parses markup: there is no tag stack, so self-closing and
//! mismatched tags can leave the indentation drifting.

use crate::constants::layout::INDENT;
use crate::transforms::{trim_space, SPACE_CLASS};
use once_cell::sync::Lazy;
use regex::Regex;

// Only CRLF separates nodes; a bare `\n` stays inside its node
const NODE_BREAK: &str = "\r\n";

static INTER_TAG_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(">{}+<", SPACE_CLASS)).unwrap());

// Some content, then a closing tag ending the line: `<b>x</b>`
static INLINE_CLOSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\n\r\x{2028}\x{2029}]+</[0-9A-Za-z_][^>]*>$").unwrap()
});

static CLOSING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</[0-9A-Za-z_]").unwrap());

// An opening tag that is not self-closing: `<div class="a">`
static OPENING_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<[0-9A-Za-z_][^>]*[^/]>[^\n\r\x{2028}\x{2029}]*$").unwrap()
});

/// Removes whitespace sitting strictly between `>` and `<`, then trims.
///
/// # Examples
/// ```
/// use santext::transforms::markup;
///
/// assert_eq!(markup::minify("<div>  <span>x</span>  </div>"), "<div><span>x</span></div>");
/// ```
pub fn minify(text: &str) -> String {
    trim_space(&INTER_TAG_WHITESPACE.replace_all(text, "><")).to_string()
}

/// Breaks the markup between adjacent tags and indents every node.
///
/// Nodes are the pieces between adjacent tags (`><`) and CRLF line breaks.
/// Bare `\n` line breaks stay inside their node, so markup that is already
/// laid out on lines is left alone. Nodes are joined with `\n`.
///
/// Per node, in order:
/// - content followed by a closing tag at the end keeps the current level
/// - a leading closing tag goes one level back before printing (never below 0)
/// - an opening, non self-closing tag is printed then goes one level deeper
/// - anything else keeps the current level
///
/// # Examples
/// ```
/// use santext::transforms::markup;
///
/// assert_eq!(markup::beautify("<div><span>x</span></div>"), "<div>\n  <span>x</span>\n</div>");
/// ```
pub fn beautify(text: &str) -> String {
    let broken = text.replace("><", &format!(">{}<", NODE_BREAK));
    let mut level = 0usize;
    let mut lines = Vec::new();

    for node in broken.split(NODE_BREAK) {
        let step = if INLINE_CLOSED.is_match(node) {
            0
        } else if CLOSING_TAG.is_match(node) {
            level = level.saturating_sub(1);
            0
        } else if OPENING_TAG.is_match(node) {
            1
        } else {
            0
        };

        lines.push(format!("{}{}", INDENT.repeat(level), node));
        level += step;
    }

    trim_space(&lines.join("\n")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_only_touches_inter_tag_whitespace() {
        assert_eq!(
            minify("<p class=\"a  b\">  hello   world  </p>\n<br/>"),
            "<p class=\"a  b\">  hello   world  </p><br/>"
        );
        assert_eq!(minify("  <a>\n\t<b/>\n</a>  "), "<a><b/></a>");
    }

    #[test]
    fn test_beautify_nested() {
        assert_eq!(
            beautify("<html><body><h1>Title</h1><p>Text</p></body></html>"),
            "<html>\n  <body>\n    <h1>Title</h1>\n    <p>Text</p>\n  </body>\n</html>"
        );
    }

    #[test]
    fn test_beautify_xml_with_self_closing() {
        assert_eq!(
            beautify("<root><item id=\"1\"/><item>2</item></root>"),
            "<root>\n  <item id=\"1\"/>\n  <item>2</item>\n</root>"
        );
    }

    #[test]
    fn test_beautify_void_tag_drifts() {
        assert_eq!(
            beautify("<div><br><span>x</span></div>"),
            "<div>\n  <br>\n    <span>x</span>\n  </div>"
        );
    }

    #[test]
    fn test_beautify_level_never_negative() {
        assert_eq!(beautify("</a></b><c>x</c>"), "</a>\n</b>\n<c>x</c>");
    }

    #[test]
    fn test_beautify_keeps_laid_out_markup() {
        let laid_out = "<div>\n  <p>hi</p>\n</div>";
        assert_eq!(beautify(laid_out), laid_out);

        let xml = "<?xml version=\"1.0\"?>\n<root>\n    <item>1</item>\n</root>";
        assert_eq!(beautify(xml), xml);
    }

    #[test]
    fn test_beautify_mixed_line_breaks() {
        assert_eq!(
            beautify("<ul>\n<li>a</li><li>b</li>\n</ul>"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_beautify_splits_crlf() {
        assert_eq!(
            beautify("<root>\r\n<b>x</b>\r\n</root>\r\n"),
            "<root>\n  <b>x</b>\n</root>"
        );
    }

    #[test]
    fn test_beautify_is_stable() {
        for text in [
            "<html><body><h1>Title</h1><p>Text</p></body></html>",
            "<root><item id=\"1\"/><item>2</item></root>",
            "<root>\r\n<b>x</b>\r\n</root>",
            "<div>\n  <p>hi</p>\n</div>",
        ] {
            let once = beautify(text);
            assert_eq!(beautify(&once), once, "unstable for {:?}", text);
        }
    }

    #[test]
    fn test_beautify_keeps_plain_text() {
        assert_eq!(beautify("  just words  "), "just words");
        assert_eq!(beautify(""), "");
    }
}
