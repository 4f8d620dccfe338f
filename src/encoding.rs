//! Character encoding detection and transcoding for byte input.
//!
//! Legacy pages still arrive as windows-1252 or ISO-8859 bytes. The byte
//! entry points sniff the charset declaration from the document head and
//! transcode to UTF-8 before any parsing happens.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Matches both declaration forms:
/// `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#)
        .expect("CHARSET_DECLARATION regex")
});

/// Decode HTML bytes to a UTF-8 string.
///
/// The charset is resolved from the first declaration found in the leading
/// bytes via WHATWG label rules (so `ISO-8859-1` resolves to windows-1252),
/// defaulting to UTF-8. Decoding is lossy: invalid sequences become the
/// Unicode replacement character rather than an error.
#[must_use]
pub fn decode_html_bytes(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

/// Resolve the document's declared encoding, defaulting to UTF-8.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_DECLARATION
        .captures(&head_str)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}
