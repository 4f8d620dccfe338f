//! Tag catalogs for flow classification and chunk typing.
//!
//! Provides both arrays (for iteration) and `HashSets` (for O(1) lookup),
//! plus the small predicate helpers the traversal engine dispatches on.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::chunk::ChunkType;

/// Inline tags whose boundaries do not split a chunk.
///
/// Crossing any other tag finalizes the chunk under construction.
pub static FLOW_PRESERVING_TAGS: [&str; 12] = [
    "span", "sub", "sup", "abbr", "acronym", "em", "b", "font", "i", "strong", "u", "a",
];

/// Heading tags, mapped to [`ChunkType::Headline`].
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List-item tags, mapped to [`ChunkType::List`].
pub static LIST_ITEM_TAGS: [&str; 1] = ["li"];

/// Void elements: no children, no end tag.
///
/// A stray end tag for one of these is invalid in any HTML document and is
/// dropped by the pre-parse repair pass.
pub static VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// `FLOW_PRESERVING_TAGS` as a `HashSet`
static FLOW_PRESERVING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FLOW_PRESERVING_TAGS.into_iter().collect());

/// `HEADING_TAGS` as a `HashSet`
static HEADING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HEADING_TAGS.into_iter().collect());

/// Check whether a tag preserves text flow (inline emphasis-like markup).
#[inline]
#[must_use]
pub fn preserves_flow(tag: &str) -> bool {
    FLOW_PRESERVING_TAG_SET.contains(tag)
}

/// Chunk type contributed by a flow-breaking tag.
///
/// Headings yield [`ChunkType::Headline`], list items [`ChunkType::List`],
/// every other tag yields `None`. Callers must not ask for flow-preserving
/// tags; those leave the pending type untouched instead.
#[inline]
#[must_use]
pub fn chunk_kind_for(tag: &str) -> Option<ChunkType> {
    if HEADING_TAG_SET.contains(tag) {
        Some(ChunkType::Headline)
    } else if LIST_ITEM_TAGS.contains(&tag) {
        Some(ChunkType::List)
    } else {
        None
    }
}
