use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::*;

/// The supported transformations, one of which is chosen per invocation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TransformOperation {
    Beautify,
    Minify,
    Uppercase,
    Lowercase,
    TitleCase,
    CamelCase,
    SnakeCase,
    #[strum(serialize = "base64-encode")]
    Base64Encode,
    #[strum(serialize = "base64-decode")]
    Base64Decode,
    CollapseWhitespace,
}

impl TransformOperation {
    pub const ALL: [TransformOperation; 10] = [
        TransformOperation::Beautify,
        TransformOperation::Minify,
        TransformOperation::Uppercase,
        TransformOperation::Lowercase,
        TransformOperation::TitleCase,
        TransformOperation::CamelCase,
        TransformOperation::SnakeCase,
        TransformOperation::Base64Encode,
        TransformOperation::Base64Decode,
        TransformOperation::CollapseWhitespace,
    ];

    /// Short description shown when listing operations
    pub fn description(&self) -> &'static str {
        match self {
            TransformOperation::Beautify => "Re-indent JSON or markup, trim anything else",
            TransformOperation::Minify => "Compact JSON or markup, collapse whitespace otherwise",
            TransformOperation::Uppercase => "UPPERCASE every character",
            TransformOperation::Lowercase => "lowercase every character",
            TransformOperation::TitleCase => "Capitalize Every Word",
            TransformOperation::CamelCase => "camelCase the text",
            TransformOperation::SnakeCase => "snake_case the text",
            TransformOperation::Base64Encode => "Encode the UTF-8 bytes as base64",
            TransformOperation::Base64Decode => "Decode base64 into UTF-8 text",
            TransformOperation::CollapseWhitespace => "Collapse whitespace runs and trim",
        }
    }

    /// True when the outcome depends on the format hint
    pub fn is_format_sensitive(&self) -> bool {
        matches!(
            self,
            TransformOperation::Beautify | TransformOperation::Minify
        )
    }
}

impl FromStr for TransformOperation {
    type Err = Error;

    /// Parses an operation name, case-insensitive, `_` and `-` interchangeable.
    ///
    /// # Examples
    /// ```
    /// use santext::operation::TransformOperation;
    ///
    /// assert_eq!("SNAKE_CASE".parse::<TransformOperation>().unwrap(), TransformOperation::SnakeCase);
    /// assert_eq!("trim-spaces".parse::<TransformOperation>().unwrap(), TransformOperation::CollapseWhitespace);
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase().replace('_', "-");
        if let Some(op) = TransformOperation::ALL
            .iter()
            .find(|op| op.to_string() == name)
        {
            return Ok(*op);
        }
        match name.as_str() {
            "format" | "fmt" => Ok(TransformOperation::Beautify),
            "upper" => Ok(TransformOperation::Uppercase),
            "lower" => Ok(TransformOperation::Lowercase),
            "title" => Ok(TransformOperation::TitleCase),
            "camel" => Ok(TransformOperation::CamelCase),
            "snake" => Ok(TransformOperation::SnakeCase),
            "remove-extra-spaces" | "trim-spaces" => Ok(TransformOperation::CollapseWhitespace),
            _ => Err(Error::InvalidOperation(s.to_string())),
        }
    }
}
