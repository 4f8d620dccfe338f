//! Chunk sequence builder: the markup-to-chunks pipeline.
//!
//! Every call parses, cleans and walks its own document; no state survives
//! between calls, so repeated invocations never leak chunks into each other.

use tracing::debug;

use crate::chunk::Chunk;
use crate::chunker::ChunkAccumulator;
use crate::html_processing::prepare_document;
use crate::options::Options;
use crate::tree::TreeNode;

/// Convert raw markup into an ordered chunk sequence.
///
/// Blank input and documents without usable body text yield an empty
/// sequence; this path has no failure mode.
#[must_use]
pub(crate) fn parse_chunks(html: &str, options: &Options) -> Vec<Chunk> {
    if is_blank(html) {
        return Vec::new();
    }

    let doc = prepare_document(html, options);
    let body = doc.select("body");
    let Some(body_node) = body.nodes().first() else {
        return Vec::new();
    };
    let Some(tree) = TreeNode::from_node(body_node) else {
        return Vec::new();
    };

    let mut accumulator = ChunkAccumulator::new(options.min_chunk_length);
    accumulator.walk(&tree);
    let chunks = accumulator.finish();

    debug!(chunk_count = chunks.len(), "chunked document body");
    chunks
}

/// Flatten the cleaned document to plain text.
///
/// Joins the raw content of every text node, head included, with the given
/// separator. Unlike chunking this applies no flow-boundary logic and no
/// per-fragment trimming. Blank input yields `None`.
#[must_use]
pub(crate) fn flatten_text(html: &str, separator: &str, options: &Options) -> Option<String> {
    if is_blank(html) {
        return None;
    }

    let doc = prepare_document(html, options);
    let root = doc.select("html");
    let root_node = root.nodes().first()?;
    let tree = TreeNode::from_node(root_node)?;

    let mut fragments = Vec::new();
    tree.collect_text(&mut fragments);
    Some(fragments.join(separator))
}

/// Join chunk data line by line.
///
/// The output has exactly one line per chunk; an empty sequence yields an
/// empty string.
#[must_use]
pub(crate) fn concatenate(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.data.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
