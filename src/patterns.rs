//! Compiled regex patterns and CSS selectors for document preparation.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::tags::VOID_TAGS;

/// Matches stray end tags of void elements (`</br>`, `</img>`, ...).
///
/// Void elements take no end tag, so these only ever appear in broken
/// markup. An HTML5 parser resurrects a stray `</br>` as a real `<br>`
/// element, which would manufacture a flow boundary the document never
/// had; the repair pass deletes them before parsing instead.
pub static STRAY_VOID_END_TAG: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = VOID_TAGS.join("|");
    Regex::new(&format!(r"(?i)</(?:{alternation})\s*>")).expect("STRAY_VOID_END_TAG regex")
});

/// Selector for subtrees whose text is never article content.
pub const NON_CONTENT_SELECTOR: &str = "script, style";
