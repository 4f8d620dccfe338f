//! Configuration options for the chunking pipeline.
//!
//! All fields are public for easy configuration. Use `Default::default()`
//! for standard settings.

/// Configuration options for chunk extraction.
///
/// # Example
///
/// ```rust
/// use rs_htmlchunks::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_chunk_length: 3,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Minimum chunk length in characters; shorter chunks are discarded
    /// at finalization instead of being emitted.
    ///
    /// The length is measured on the normalized data, including the spaces
    /// inserted when fragments from adjacent inline tags are joined.
    ///
    /// Default: `0` (every non-blank chunk is emitted)
    pub min_chunk_length: usize,

    /// Additional tags whose entire subtrees are removed before traversal,
    /// on top of the built-in `script`/`style` removal.
    ///
    /// Useful for dropping page furniture such as `header`/`footer` when
    /// the caller knows it never carries article text.
    ///
    /// Default: empty
    pub extra_clean_tags: Vec<String>,
}
