//! UTF-8 ⇄ Base64 helpers for the upload payload.
//!
//! GitHub's contents API takes file content base64-encoded; these are the
//! two directions of that boundary.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode raw token text into the wire-safe payload.
pub fn utf8_to_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Recover the original text from a payload produced by
/// [`utf8_to_base64`].
pub fn base64_to_utf8(encoded: &str) -> Result<String, EncodingError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}
