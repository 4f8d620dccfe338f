//! # rs-htmlchunks
//!
//! HTML text chunking with article detection and boundary extraction.
//!
//! This library partitions a markup document into an ordered sequence of
//! text chunks (flow-broken, whitespace-normalized, tagged as headline/list
//! where applicable), decides whether a chunk sequence carries enough real
//! content to be an article, and trims leading boilerplate off a sequence
//! using a headline-lookback heuristic.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htmlchunks::{to_text_chunks, ArticleDetector};
//!
//! let html = "<html><body><h1>Title</h1><p>Body text.</p></body></html>";
//! let chunks = to_text_chunks(html);
//!
//! assert_eq!(chunks[0].data, "Title");
//! assert!(chunks[0].is_headline());
//! assert_eq!(chunks[1].data, "Body text.");
//!
//! let verdict = ArticleDetector::default().is_article(&chunks);
//! assert!(!verdict); // two short chunks are not an article
//! ```
//!
//! ## Features
//!
//! - **Chunking**: depth-first walk over the parsed body, splitting at
//!   flow-breaking tags and joining text across inline markup
//! - **Article detection**: qualifying-character sum against configurable
//!   thresholds
//! - **Boundary extraction**: anchors on the first real paragraph and pulls
//!   in the nearby headline
//! - **Robustness**: malformed markup is repaired by the HTML5 parser;
//!   blank input degrades to empty results, never errors

mod chunker;
mod converter;
mod html_processing;
mod options;
mod patterns;

/// Chunk data model.
pub mod chunk;

/// Article boundary extraction.
pub mod boundary;

/// Boundary contracts for out-of-scope collaborators.
pub mod collaborators;

/// Article sufficiency detection.
pub mod detector;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Error types for collaborator operations.
pub mod error;

/// Tag catalogs for flow classification.
pub mod tags;

/// Parsed-tree abstraction consumed by the traversal engine.
pub mod tree;

// Public API - re-exports
pub use boundary::ArticleChunksExtractor;
pub use chunk::{Chunk, ChunkType};
pub use detector::ArticleDetector;
pub use error::{Error, Result};
pub use options::Options;

/// Convert an HTML document into an ordered chunk sequence using default
/// options.
///
/// Blank input or a document without body text yields an empty sequence.
///
/// # Example
///
/// ```rust
/// use rs_htmlchunks::to_text_chunks;
///
/// let chunks = to_text_chunks("<body>foo<b>bar</b></body>");
/// assert_eq!(chunks[0].data, "foo bar");
/// ```
#[must_use]
pub fn to_text_chunks(html: &str) -> Vec<Chunk> {
    to_text_chunks_with_options(html, &Options::default())
}

/// Convert an HTML document into an ordered chunk sequence with custom
/// options.
///
/// # Example
///
/// ```rust
/// use rs_htmlchunks::{to_text_chunks_with_options, Options};
///
/// let options = Options {
///     min_chunk_length: 4,
///     ..Options::default()
/// };
/// let chunks = to_text_chunks_with_options("<body><p>ab</p><p>long enough</p></body>", &options);
/// assert_eq!(chunks.len(), 1);
/// ```
#[must_use]
pub fn to_text_chunks_with_options(html: &str, options: &Options) -> Vec<Chunk> {
    converter::parse_chunks(html, options)
}

/// Convert HTML bytes into a chunk sequence, detecting the character
/// encoding from meta tags first.
///
/// # Example
///
/// ```rust
/// use rs_htmlchunks::to_text_chunks_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// let chunks = to_text_chunks_bytes(html);
/// assert_eq!(chunks[0].data, "Caf\u{e9}");
/// ```
#[must_use]
pub fn to_text_chunks_bytes(html: &[u8]) -> Vec<Chunk> {
    to_text_chunks_bytes_with_options(html, &Options::default())
}

/// Convert HTML bytes into a chunk sequence with custom options and
/// automatic encoding detection.
#[must_use]
pub fn to_text_chunks_bytes_with_options(html: &[u8], options: &Options) -> Vec<Chunk> {
    let html_str = encoding::decode_html_bytes(html);
    to_text_chunks_with_options(&html_str, options)
}

/// Flatten the cleaned document to plain text, newline-separated.
///
/// Returns `None` for blank input. Unlike chunking this applies no
/// flow-boundary logic; it joins the raw content of every text node in
/// document order.
#[must_use]
pub fn to_text(html: &str) -> Option<String> {
    to_text_with_separator(html, "\n")
}

/// Flatten the cleaned document to plain text with a custom separator.
#[must_use]
pub fn to_text_with_separator(html: &str, separator: &str) -> Option<String> {
    converter::flatten_text(html, separator, &Options::default())
}

/// Join a chunk sequence into one string, one line per chunk.
///
/// An empty sequence yields an empty string.
///
/// # Example
///
/// ```rust
/// use rs_htmlchunks::{chunks_to_text, to_text_chunks};
///
/// let chunks = to_text_chunks("<body><p>foo<u>bla</u></p><br>bar</body>");
/// assert_eq!(chunks_to_text(&chunks), "foo bla\nbar");
/// ```
#[must_use]
pub fn chunks_to_text(chunks: &[Chunk]) -> String {
    converter::concatenate(chunks)
}
