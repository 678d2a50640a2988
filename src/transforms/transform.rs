use crate::error::Result;
use crate::format::FormatHint;

/// Trait for the text transformations dispatched by the engine
///
/// Each transform implements exactly one `TransformOperation`. Transforms are
/// stateless: the output depends only on the text and the format hint, and
/// the input is never modified.
///
/// # Examples
///
/// ```
/// use santext::format::FormatHint;
/// use santext::transforms::{Transform, Uppercase};
///
/// let result = Uppercase::new().transform("Hello", FormatHint::PlainText).unwrap();
/// assert_eq!(result, "HELLO");
/// ```
pub trait Transform: Send + Sync {
    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    /// * `hint` - The assumed syntax of the text, only used by format-sensitive transforms
    ///
    /// # Returns
    /// The transformed text or an error if transformation fails
    fn transform(&self, text: &str, hint: FormatHint) -> Result<String>;
}
