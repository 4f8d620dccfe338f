//! Chunk data model.
//!
//! A chunk is one contiguous, flow-broken piece of document text together
//! with an optional type derived from the enclosing markup tag. Chunks are
//! built up fragment by fragment during traversal and become plain immutable
//! values once emitted into a sequence.

use serde::{Deserialize, Serialize};

/// Type tag of a chunk, derived from the innermost flow-breaking tag that
/// was open when the chunk's first text was seen.
///
/// Chunks from ordinary block tags (paragraphs, divs, table cells, ...)
/// carry no type at all (`Option::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkType {
    /// Chunk originated inside a heading tag (`h1`-`h6`).
    Headline,
    /// Chunk originated inside a list-item tag (`li`).
    List,
}

/// One contiguous unit of extracted, whitespace-normalized text.
///
/// `data` is non-empty, trimmed, and internally whitespace-collapsed; text
/// fragments accumulated from adjacent inline markup are space-joined.
/// All length thresholds in this crate compare against [`Chunk::len`],
/// which counts characters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Normalized text content.
    pub data: String,

    /// Type tag, if the chunk came from a heading or list item.
    pub kind: Option<ChunkType>,
}

impl Chunk {
    /// Create an untyped chunk.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            kind: None,
        }
    }

    /// Create a chunk with an explicit type tag.
    #[must_use]
    pub fn with_kind(data: impl Into<String>, kind: Option<ChunkType>) -> Self {
        Self {
            data: data.into(),
            kind,
        }
    }

    /// Content length in characters (not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// True if the chunk holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if this chunk carries the headline type tag.
    #[must_use]
    pub fn is_headline(&self) -> bool {
        self.kind == Some(ChunkType::Headline)
    }

    /// Append a further text fragment, space-joined.
    ///
    /// Only the traversal engine extends a chunk; emitted chunks are final.
    pub(crate) fn append_fragment(&mut self, fragment: &str) {
        self.data.push(' ');
        self.data.push_str(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_fragment_space_joins() {
        let mut chunk = Chunk::new("foo");
        chunk.append_fragment("bar");
        chunk.append_fragment("baz");
        assert_eq!(chunk.data, "foo bar baz");
    }

    #[test]
    fn len_counts_characters_not_bytes() {
        let chunk = Chunk::new("München");
        assert_eq!(chunk.len(), 7);
        assert!(chunk.data.len() > 7);
    }

    #[test]
    fn equality_includes_kind() {
        assert_eq!(Chunk::new("a"), Chunk::new("a"));
        assert_ne!(
            Chunk::new("a"),
            Chunk::with_kind("a", Some(ChunkType::Headline))
        );
    }

    #[test]
    fn serializes_kind_lowercase() {
        let chunk = Chunk::with_kind("Title", Some(ChunkType::Headline));
        let json = serde_json::to_string(&chunk).unwrap();
        assert_eq!(json, r#"{"data":"Title","kind":"headline"}"#);
    }

    #[test]
    fn deserializes_untyped_chunk() {
        let chunk: Chunk = serde_json::from_str(r#"{"data":"x","kind":null}"#).unwrap();
        assert_eq!(chunk, Chunk::new("x"));
    }
}
