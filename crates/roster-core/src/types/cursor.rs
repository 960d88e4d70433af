//! Opaque pagination cursors.
//!
//! A cursor is the URL-safe, unpadded base64 encoding of a record
//! identifier's string form. Cursors are reversible position bookmarks, not
//! authorization tokens: decoding one yields an identifier, and holding one
//! grants nothing the caller could not already see.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::AppError;
use crate::result::AppResult;

/// Encode an identifier into an opaque cursor string.
pub fn encode_cursor(id: impl std::fmt::Display) -> String {
    URL_SAFE_NO_PAD.encode(id.to_string().as_bytes())
}

/// Decode a cursor back into the identifier string it encodes.
///
/// Fails with a validation error when the input is not valid base64 or does
/// not decode to UTF-8. Callers paginating a live sequence treat a failed
/// decode the same as an identifier that is no longer present.
pub fn decode_cursor(cursor: &str) -> AppResult<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor.as_bytes())
        .map_err(|e| AppError::validation(format!("Malformed cursor: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::validation(format!("Malformed cursor: {e}")))
}
