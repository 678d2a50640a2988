use crate::error::Result;
use crate::format::FormatHint;
use crate::transforms::Transform;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

// Standard alphabet, trailing bits ignored. Padding is stripped beforehand,
// so any `=` left over is rejected.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Drops one or two trailing `=`, only when the length is a multiple of 4.
fn strip_padding(compact: &str) -> &str {
    if compact.len() % 4 != 0 {
        return compact;
    }
    compact
        .strip_suffix("==")
        .or_else(|| compact.strip_suffix('='))
        .unwrap_or(compact)
}

/// Encodes the UTF-8 bytes of the text as padded standard base64.
pub struct Base64Encoder;

impl Base64Encoder {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Base64Encoder {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        Ok(STANDARD.encode(text.as_bytes()))
    }
}

/// Decodes standard base64 back into UTF-8 text.
///
/// ASCII whitespace inside the input is ignored and padding is optional, but
/// padding is only accepted on input whose length is a multiple of 4. Fails
/// when the input is not base64 or when the decoded bytes are not valid UTF-8.
pub struct Base64Decoder;

impl Base64Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Base64Decoder {
    fn transform(&self, text: &str, _hint: FormatHint) -> Result<String> {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = FORGIVING.decode(strip_padding(&compact).as_bytes())?;
        Ok(String::from_utf8(bytes)?)
    }
}
