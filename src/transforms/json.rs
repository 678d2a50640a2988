//! JSON beautify/minify through a full parse and re-serialization.
//!
//! Object keys keep their original order. Parse failures surface as
//! `Error::ParseError` carrying the parser's own message.

use crate::error::Result;
use serde_json::Value;

/// Re-serializes the JSON text with two-space indentation.
///
/// # Examples
/// ```
/// use santext::transforms::json;
///
/// assert_eq!(json::beautify("{\"b\":1,\"a\":[]}").unwrap(), "{\n  \"b\": 1,\n  \"a\": []\n}");
/// assert!(json::beautify("not json").is_err());
/// ```
pub fn beautify(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Re-serializes the JSON text without any insignificant whitespace.
///
/// # Examples
/// ```
/// use santext::transforms::json;
///
/// assert_eq!(json::minify("{ \"b\" : [1, 2],\n \"a\": null }").unwrap(), "{\"b\":[1,2],\"a\":null}");
/// ```
pub fn minify(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&value)?)
}
