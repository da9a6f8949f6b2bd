//! Character encoding detection for raw HTML input.
//!
//! Listing pages fetched by the host application arrive as bytes. The
//! encoding is taken from a byte order mark, then from a charset
//! declaration near the top of the document, then defaults to UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Charset declarations are only honoured within this many leading bytes.
const SNIFF_LIMIT: usize = 1024;

/// Detect character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label from `<meta charset>` or `<meta http-equiv="Content-Type">`.
fn declared_charset(head: &str) -> Option<String> {
    [&*CHARSET_META, &*CONTENT_TYPE_CHARSET]
        .into_iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use rs_feedrules::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let (decoded, _encoding_used, _had_errors) = detect_encoding(html).decode(html);
    decoded
}
