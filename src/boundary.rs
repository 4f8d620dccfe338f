//! Article boundary extraction.
//!
//! Chunk sequences from full pages usually open with boilerplate
//! (navigation, bylines, teasers) before the first real paragraph. The
//! extractor anchors on that paragraph and walks a short window backwards
//! for the article's own headline; everything before the result is cut.

use crate::chunk::{Chunk, ChunkType};

/// How many chunks before the anchor are searched for a headline.
const HEADLINE_LOOKBACK: usize = 5;

/// Trims a chunk sequence down to the contiguous suffix that represents
/// the article.
#[derive(Debug, Clone)]
pub struct ArticleChunksExtractor {
    /// Minimum length for a chunk to anchor the article as its first real
    /// paragraph.
    ///
    /// Default: `200`
    pub min_text_paragraph_length: usize,
}

impl Default for ArticleChunksExtractor {
    fn default() -> Self {
        Self {
            min_text_paragraph_length: 200,
        }
    }
}

impl ArticleChunksExtractor {
    /// Create an extractor with an explicit paragraph threshold.
    #[must_use]
    pub fn new(min_text_paragraph_length: usize) -> Self {
        Self {
            min_text_paragraph_length,
        }
    }

    /// Return the article suffix of `chunks`.
    ///
    /// Without any chunk long enough to anchor on, the input comes back
    /// unchanged. Otherwise the result starts at the anchor, or at a
    /// headline found within the six-slot window ending at the anchor.
    /// The scan walks from the anchor towards the window start and keeps
    /// overwriting, so among several headlines the one closest to the
    /// window start wins. Headlines further out never pull in unrelated
    /// teaser blocks.
    #[must_use]
    pub fn extract<'a>(&self, chunks: &'a [Chunk]) -> &'a [Chunk] {
        let Some(anchor) = chunks
            .iter()
            .position(|chunk| chunk.len() >= self.min_text_paragraph_length)
        else {
            return chunks;
        };

        let window_start = anchor.saturating_sub(HEADLINE_LOOKBACK);
        let mut start = anchor;
        for index in (window_start..=anchor).rev() {
            if chunks[index].kind == Some(ChunkType::Headline) {
                start = index;
            }
        }
        &chunks[start..]
    }
}
