//! Compiled regex patterns used by the path codec and charset detection.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Address Signatures
// =============================================================================

/// Matches class tokens carrying a digit.
///
/// Such tokens are usually per-instance identifiers (`post-1234`, `item-2`)
/// and would split one list into one cluster per item.
pub static DIGIT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("DIGIT_TOKEN regex"));

/// A valid tag or class token inside a rendered address segment.
pub static SIGNATURE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s>.]+$").expect("SIGNATURE_TOKEN regex"));

// =============================================================================
// Charset Detection
// =============================================================================

/// `<meta charset="...">`
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("CONTENT_TYPE_CHARSET regex")
});
