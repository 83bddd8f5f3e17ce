//! Selective percent-decoding.

use std::fmt::Write;

use crate::error::UrlError;

/// Percent-decode `text`, leaving escapes for characters in `exceptions` intact.
///
/// Every `%` must be followed by two hex digits, otherwise decoding fails with
/// [`UrlError::Decode`]. Decoded bytes are reassembled as UTF-8; bytes that do
/// not form valid UTF-8 are re-emitted as uppercase `%XX` escapes.
///
/// # Examples
///
/// ```
/// use canonurl::unquote;
///
/// assert_eq!(unquote("foo%23bar", &[]).unwrap(), "foo#bar");
/// assert_eq!(unquote("foo%23bar", &['#']).unwrap(), "foo%23bar");
/// assert_eq!(unquote("caf%C3%A9", &[]).unwrap(), "café");
/// assert!(unquote("100%", &[]).is_err());
/// ```
pub fn unquote(text: &str, exceptions: &[char]) -> Result<String, UrlError> {
    if !text.contains('%') {
        return Ok(text.to_string());
    }

    let mut chunks = text.split('%');
    let mut bytes = Vec::with_capacity(text.len());
    if let Some(head) = chunks.next() {
        bytes.extend_from_slice(head.as_bytes());
    }

    for chunk in chunks {
        let byte = decode_escape(chunk).ok_or_else(|| UrlError::Decode {
            chunk: chunk.to_string(),
        })?;

        if byte.is_ascii() && exceptions.contains(&char::from(byte)) {
            bytes.push(b'%');
            bytes.extend_from_slice(chunk.as_bytes());
        } else {
            bytes.push(byte);
            bytes.extend_from_slice(chunk[2..].as_bytes());
        }
    }

    let mut decoded = String::with_capacity(bytes.len());
    for piece in bytes.utf8_chunks() {
        decoded.push_str(piece.valid());
        for byte in piece.invalid() {
            // Writing to a String cannot fail.
            let _ = write!(decoded, "%{byte:02X}");
        }
    }
    Ok(decoded)
}

/// Value of the two hex digits at the start of `chunk`.
fn decode_escape(chunk: &str) -> Option<u8> {
    let hex = chunk.as_bytes().get(..2)?;
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u8::from_str_radix(&chunk[..2], 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(unquote("", &[]).unwrap(), "");
        assert_eq!(unquote("/a/b c", &[]).unwrap(), "/a/b c");
    }

    #[test]
    fn test_decode_all() {
        assert_eq!(unquote("foo%23bar", &[]).unwrap(), "foo#bar");
        assert_eq!(unquote("%41%62c", &[]).unwrap(), "Abc");
        assert_eq!(unquote("%7e", &[]).unwrap(), "~");
    }

    #[test]
    fn test_exceptions_stay_encoded() {
        assert_eq!(unquote("foo%23bar", &['#']).unwrap(), "foo%23bar");
        assert_eq!(unquote("a%2fb%2Fc%41", &['/']).unwrap(), "a%2fb%2FcA");
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq!(unquote("%E6%97%A5%E6%9C%AC", &[]).unwrap(), "日本");
        assert_eq!(unquote("x%C3%A9y", &['#']).unwrap(), "xéy");
    }

    #[test]
    fn test_invalid_utf8_reencoded() {
        assert_eq!(unquote("a%ffb", &[]).unwrap(), "a%FFb");
        assert_eq!(unquote("%41%C3", &[]).unwrap(), "A%C3");
    }

    #[test]
    fn test_invalid_escape_fails() {
        assert_eq!(
            unquote("100%zz", &[]),
            Err(UrlError::Decode { chunk: "zz".to_string() })
        );
        assert_eq!(unquote("trailing%", &[]), Err(UrlError::Decode { chunk: String::new() }));
        assert_eq!(unquote("%4", &[]), Err(UrlError::Decode { chunk: "4".to_string() }));
    }

    #[test]
    fn test_non_ascii_after_percent_fails() {
        assert!(unquote("%é1", &[]).is_err());
    }
}
