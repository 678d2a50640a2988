use std::sync::Arc;

use serde::Serialize;
use strum_macros::Display;

use crate::constants::messages::OPERATION_FAILED;
use crate::debug;
use crate::error::*;
use crate::format::FormatHint;
use crate::operation::TransformOperation;
use crate::transforms::{TransformManager, TransformRegistry};

/// Category of a failed transformation
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    #[strum(serialize = "parse error")]
    Parse,
    #[strum(serialize = "decode error")]
    Decode,
    #[strum(serialize = "error")]
    Other,
}

/// Outcome of a single transformation.
///
/// A failure always carries the untouched input so callers can keep showing
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TransformResult {
    Success {
        content: String,
    },
    Failure {
        original_text: String,
        reason: String,
        kind: FailureKind,
    },
}

impl TransformResult {
    fn failure(original_text: &str, error: Error) -> Self {
        let kind = match &error {
            Error::ParseError(_) => FailureKind::Parse,
            Error::DecodeError(_) => FailureKind::Decode,
            _ => FailureKind::Other,
        };
        let reason = match error.to_string() {
            message if message.trim().is_empty() => OPERATION_FAILED.to_string(),
            message => message,
        };
        TransformResult::Failure {
            original_text: original_text.to_string(),
            reason,
            kind,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransformResult::Success { .. })
    }

    /// The transformed text, or the original text when the operation failed
    pub fn content(&self) -> &str {
        match self {
            TransformResult::Success { content } => content,
            TransformResult::Failure { original_text, .. } => original_text,
        }
    }

    /// The failure reason, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            TransformResult::Success { .. } => None,
            TransformResult::Failure { reason, .. } => Some(reason),
        }
    }

    /// Converts the outcome into a `Result`, mapping the failure back to the
    /// matching error kind
    pub fn into_result(self) -> Result<String> {
        match self {
            TransformResult::Success { content } => Ok(content),
            TransformResult::Failure { reason, kind, .. } => Err(match kind {
                FailureKind::Parse => Error::ParseError(reason),
                FailureKind::Decode => Error::DecodeError(reason),
                FailureKind::Other => Error::Msg(reason),
            }),
        }
    }
}

/// Dispatches a text to the transform registered for an operation.
///
/// `apply` is pure: the input is borrowed, never modified, and every error
/// raised by a transform is turned into a `TransformResult::Failure`.
pub struct TransformEngine {
    registry: Arc<TransformRegistry>,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine {
    /// Creates an engine backed by the global transform registry
    pub fn new() -> Self {
        Self {
            registry: TransformManager::get().share(),
        }
    }

    /// Creates an engine backed by a custom registry
    pub fn with_registry(registry: Arc<TransformRegistry>) -> Self {
        Self { registry }
    }

    /// Applies the operation to the text.
    ///
    /// An operation without a registered transform returns the text unchanged.
    ///
    /// # Examples
    /// ```
    /// use santext::engine::TransformEngine;
    /// use santext::format::FormatHint;
    /// use santext::operation::TransformOperation;
    ///
    /// let engine = TransformEngine::new();
    /// let result = engine.apply("not json", TransformOperation::Beautify, FormatHint::Json);
    /// assert!(!result.is_success());
    /// assert_eq!(result.content(), "not json");
    /// ```
    pub fn apply(
        &self,
        text: &str,
        operation: TransformOperation,
        hint: FormatHint,
    ) -> TransformResult {
        let result = match self.registry.process(text, operation, hint) {
            Some(Ok(content)) => TransformResult::Success { content },
            Some(Err(e)) => TransformResult::failure(text, e),
            None => {
                debug!("No transform registered for \"{}\", passing through", operation);
                TransformResult::Success {
                    content: text.to_string(),
                }
            }
        };

        debug!(
            "Applied {} (format: {}) on {} bytes -> {}",
            operation,
            hint,
            text.len(),
            result.message().unwrap_or("ok")
        );
        result
    }
}

/// Applies the operation using the global transform registry.
///
/// # Examples
/// ```
/// use santext::engine::apply;
/// use santext::format::FormatHint;
/// use santext::operation::TransformOperation;
///
/// let result = apply("HelloWorld42", TransformOperation::SnakeCase, FormatHint::PlainText);
/// assert_eq!(result.content(), "hello_world_42");
/// ```
pub fn apply(text: &str, operation: TransformOperation, hint: FormatHint) -> TransformResult {
    TransformEngine::new().apply(text, operation, hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::Uppercase;

    fn plain(text: &str, op: TransformOperation) -> TransformResult {
        apply(text, op, FormatHint::PlainText)
    }

    #[test]
    fn test_uppercase_idempotent() {
        let once = plain("Mixed Case ß text", TransformOperation::Uppercase);
        assert_eq!(once.content(), "Mixed Case ß text".to_uppercase());
        let twice = plain(once.content(), TransformOperation::Uppercase);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_base64_round_trip() {
        for text in ["", "ascii", "naïve café", "emoji 🎉 and 中文", "line\nbreaks\r\n"] {
            let encoded = plain(text, TransformOperation::Base64Encode);
            let decoded = plain(encoded.content(), TransformOperation::Base64Decode);
            assert!(decoded.is_success());
            assert_eq!(decoded.content(), text);
        }
    }

    #[test]
    fn test_json_beautify_then_minify() {
        let source = r#"{"id":7,"items":[{"n":"a"},{"n":"b"}],"empty":{}}"#;
        let pretty = apply(source, TransformOperation::Beautify, FormatHint::Json);
        let minified = apply(pretty.content(), TransformOperation::Minify, FormatHint::Json);
        let direct = apply(source, TransformOperation::Minify, FormatHint::Json);
        let left: serde_json::Value = serde_json::from_str(minified.content()).unwrap();
        let right: serde_json::Value = serde_json::from_str(direct.content()).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_invalid_json_preserves_input() {
        let result = apply("not json", TransformOperation::Beautify, FormatHint::Json);
        assert!(!result.is_success());
        assert_eq!(result.content(), "not json");
        let expected = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .to_string();
        assert_eq!(result.message(), Some(expected.as_str()));
        assert!(matches!(result.into_result(), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_invalid_base64_preserves_input() {
        let result = plain("!!!notbase64!!!", TransformOperation::Base64Decode);
        assert!(!result.is_success());
        assert_eq!(result.content(), "!!!notbase64!!!");
        assert!(result.message().is_some_and(|m| !m.is_empty()));
        assert!(matches!(result.into_result(), Err(Error::DecodeError(_))));
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(
            plain("  a\n\nb\t c  ", TransformOperation::CollapseWhitespace).content(),
            "a b c"
        );
        assert_eq!(
            apply(
                "<div>  <span>x</span>  </div>",
                TransformOperation::Minify,
                FormatHint::Html
            )
            .content(),
            "<div><span>x</span></div>"
        );
        assert_eq!(
            plain("HelloWorld42", TransformOperation::SnakeCase).content(),
            "hello_world_42"
        );
    }

    #[test]
    fn test_hint_ignored_by_case_operations() {
        let json = apply("{\"a\":1}", TransformOperation::Uppercase, FormatHint::Json);
        assert_eq!(json.content(), "{\"A\":1}");
    }

    #[test]
    fn test_unregistered_operation_passes_through() {
        let mut registry = TransformRegistry::new();
        registry.register(TransformOperation::Uppercase, Uppercase::new());
        let engine = TransformEngine::with_registry(Arc::new(registry));

        let result = engine.apply("keep Me", TransformOperation::Lowercase, FormatHint::PlainText);
        assert_eq!(result, TransformResult::Success { content: "keep Me".to_string() });
        let result = engine.apply("keep Me", TransformOperation::Uppercase, FormatHint::PlainText);
        assert_eq!(result.content(), "KEEP ME");
    }

    #[test]
    fn test_empty_error_message_falls_back() {
        let result = TransformResult::failure("x", Error::Msg(String::new()));
        assert_eq!(result.message(), Some(OPERATION_FAILED));
        assert_eq!(result.content(), "x");
    }
}
