use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::*;

/// Assumed syntax of the input text.
///
/// Only `Json`, `Html`/`Xml` and everything else behave differently when
/// beautifying or minifying. The hint is never checked against the content.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatHint {
    #[default]
    #[strum(serialize = "txt")]
    #[serde(rename = "txt")]
    PlainText,
    #[strum(serialize = "md")]
    #[serde(rename = "md")]
    Markdown,
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "html")]
    Html,
    #[strum(serialize = "xml")]
    Xml,
    #[strum(serialize = "css")]
    Css,
    #[strum(serialize = "js")]
    Js,
    #[strum(serialize = "ts")]
    Ts,
    #[strum(serialize = "csv")]
    Csv,
    #[strum(serialize = "py")]
    #[serde(rename = "py")]
    Python,
    #[strum(serialize = "java")]
    Java,
    #[strum(serialize = "c")]
    C,
    #[strum(serialize = "cpp")]
    Cpp,
}

impl FormatHint {
    pub const ALL: [FormatHint; 13] = [
        FormatHint::PlainText,
        FormatHint::Markdown,
        FormatHint::Json,
        FormatHint::Html,
        FormatHint::Xml,
        FormatHint::Css,
        FormatHint::Js,
        FormatHint::Ts,
        FormatHint::Csv,
        FormatHint::Python,
        FormatHint::Java,
        FormatHint::C,
        FormatHint::Cpp,
    ];

    /// Canonical file extension for the hint (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            FormatHint::PlainText => "txt",
            FormatHint::Markdown => "md",
            FormatHint::Json => "json",
            FormatHint::Html => "html",
            FormatHint::Xml => "xml",
            FormatHint::Css => "css",
            FormatHint::Js => "js",
            FormatHint::Ts => "ts",
            FormatHint::Csv => "csv",
            FormatHint::Python => "py",
            FormatHint::Java => "java",
            FormatHint::C => "c",
            FormatHint::Cpp => "cpp",
        }
    }

    /// True for the hints handled by the markup beautifier/minifier
    pub fn is_markup(&self) -> bool {
        matches!(self, FormatHint::Html | FormatHint::Xml)
    }

    /// Maps a file extension to a hint.
    ///
    /// # Returns
    /// `None` when the extension is not one of the recognized ones.
    ///
    /// # Examples
    /// ```
    /// use santext::format::FormatHint;
    ///
    /// assert_eq!(FormatHint::from_extension("JSON"), Some(FormatHint::Json));
    /// assert_eq!(FormatHint::from_extension("exe"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<FormatHint> {
        let ext = ext.to_lowercase();
        FormatHint::ALL
            .iter()
            .find(|hint| hint.extension() == ext)
            .copied()
    }
}

impl FromStr for FormatHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('.').to_lowercase();
        if let Some(hint) = FormatHint::from_extension(&name) {
            return Ok(hint);
        }
        match name.as_str() {
            "text" | "plain" | "plaintext" | "plain_text" => Ok(FormatHint::PlainText),
            "markdown" => Ok(FormatHint::Markdown),
            "python" => Ok(FormatHint::Python),
            "javascript" => Ok(FormatHint::Js),
            "typescript" => Ok(FormatHint::Ts),
            "c++" => Ok(FormatHint::Cpp),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}
