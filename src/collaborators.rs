//! Boundary contracts for external collaborators.
//!
//! The chunking core stays deliberately small; everything that needs a
//! heavyweight engine behind it — heuristic metadata extraction, binary
//! page-description decoding, statistical concept recognition — is consumed
//! through the traits below and implemented elsewhere. The core only fixes
//! the shapes that cross the boundary.

use chrono::{DateTime, Utc};

use crate::error::Result;

/// Metadata extracted from an article page.
#[derive(Debug, Clone, Default)]
pub struct ArticleMetadata {
    /// Article body text.
    pub text: String,

    /// Page title.
    pub title: Option<String>,

    /// Author names, deduplicated, in discovery order.
    pub authors: Vec<String>,

    /// Publication date.
    pub publication_date: Option<DateTime<Utc>>,

    /// Publication date as originally displayed on the page.
    pub publication_date_display: Option<String>,

    /// Image URLs found within the article body.
    pub image_urls: Vec<String>,
}

/// Result of converting a binary page-description document.
#[derive(Debug, Clone, Default)]
pub struct ConvertedDocument {
    /// Page texts joined in page order.
    pub text: String,

    /// Document author, if the format carries one.
    pub author: Option<String>,

    /// Document creation date, if the format carries one.
    pub creation_date: Option<DateTime<Utc>>,

    /// Document title, if the format carries one.
    pub title: Option<String>,
}

/// A normalized, deduplicated domain concept found in free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Normalized concept text (lowercased, space-collapsed).
    pub text: String,

    /// Entity kind reported by the recognition model.
    pub entity_kind: String,
}

/// Extracts title, authors, date and images from an article page.
pub trait ArticleMetadataExtractor {
    /// Run the heuristic rules against `html`, resolving relative image
    /// URLs against `source_url`. Blank input yields an empty result
    /// rather than an error.
    fn extract(&self, html: &str, source_url: &str) -> ArticleMetadata;
}

/// Converts a binary page-description format into text plus metadata.
pub trait PageDocumentConverter {
    /// Decode `data` into page text and metadata.
    ///
    /// Malformed or non-binary input must surface as
    /// [`Error::DocumentConversion`](crate::Error::DocumentConversion),
    /// carrying the underlying failure's type name, never as a leaked
    /// engine-internal error.
    fn convert(&self, data: &[u8]) -> Result<ConvertedDocument>;
}

/// Recognizes domain concepts in chunk-concatenated text.
pub trait ConceptExtractor {
    /// Return normalized concepts, deduplicated, in first-seen order.
    /// Empty input yields an empty list.
    fn extract(&self, text: &str) -> Vec<Concept>;
}
