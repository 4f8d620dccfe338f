//! Tree traversal engine: partitions a prepared markup tree into chunks.
//!
//! The walk is depth-first pre-order. Text accumulates into an open chunk
//! while the traversal stays inside flow-preserving (inline) tags; crossing
//! a flow-breaking tag boundary, on the way in or on the way out, finalizes
//! the open chunk. A pending type slot records what the most recent
//! flow-breaking tag would make the *next* chunk (headline, list, or
//! nothing) and is consumed exactly once when that chunk's first text
//! arrives.
//!
//! All state lives in a [`ChunkAccumulator`] created fresh for every parse
//! call; nothing is shared across calls.

use crate::chunk::{Chunk, ChunkType};
use crate::tags::{chunk_kind_for, preserves_flow};
use crate::tree::TreeNode;

/// Per-call traversal state.
pub(crate) struct ChunkAccumulator {
    min_chunk_length: usize,
    chunks: Vec<Chunk>,
    current: Option<Chunk>,
    pending_kind: Option<ChunkType>,
}

impl ChunkAccumulator {
    pub(crate) fn new(min_chunk_length: usize) -> Self {
        Self {
            min_chunk_length,
            chunks: Vec::new(),
            current: None,
            pending_kind: None,
        }
    }

    /// Walk one node and its subtree.
    pub(crate) fn walk(&mut self, node: &TreeNode) {
        match node {
            TreeNode::Text(content) => self.push_text(content),
            TreeNode::Element { tag, children } => {
                let breaks_flow = !preserves_flow(tag);
                if breaks_flow {
                    // The tag's type applies to whatever chunk starts next,
                    // even when the tag carries no type of its own.
                    self.pending_kind = chunk_kind_for(tag);
                    self.finalize_current();
                }
                for child in children {
                    self.walk(child);
                }
                if breaks_flow {
                    self.finalize_current();
                }
            }
        }
    }

    /// Finalize any trailing chunk and hand back the sequence.
    pub(crate) fn finish(mut self) -> Vec<Chunk> {
        self.finalize_current();
        self.chunks
    }

    fn push_text(&mut self, raw: &str) {
        let normalized = normalize_spaces(raw);
        if normalized.is_empty() {
            return;
        }
        match self.current.as_mut() {
            Some(chunk) => chunk.append_fragment(&normalized),
            None => {
                self.current = Some(Chunk::with_kind(normalized, self.pending_kind.take()));
            }
        }
    }

    /// Emit the open chunk if it meets the minimum length, then clear it.
    ///
    /// Clearing happens unconditionally: nested flow-breaking tags unwind
    /// with one finalize call each, and only the first may emit.
    fn finalize_current(&mut self) {
        if let Some(chunk) = self.current.take() {
            if chunk.len() >= self.min_chunk_length {
                self.chunks.push(chunk);
            }
        }
    }
}

/// Collapse all whitespace runs to single spaces and trim the ends.
#[must_use]
pub(crate) fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
