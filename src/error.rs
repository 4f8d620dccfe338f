//! Error types for rs-htmlchunks.
//!
//! The chunking core itself has no failure paths: blank or malformed input
//! degrades to empty results. `Error` exists for the collaborator boundary,
//! where a binary document that fails to load must surface as one
//! domain-specific conversion error instead of whatever low-level error the
//! decoding engine happened to raise.

/// Error type for collaborator operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A binary source document could not be converted.
    ///
    /// `source_kind` names the type of the underlying failure for
    /// diagnostics.
    #[error("document conversion failed ({source_kind}): {reason}")]
    DocumentConversion {
        /// Type name of the original error.
        source_kind: String,
        /// Human-readable description of the original error.
        reason: String,
    },
}

impl Error {
    /// Wrap a converter-internal failure, capturing its type name.
    #[must_use]
    pub fn document_conversion<E: std::error::Error>(source: &E) -> Self {
        Self::DocumentConversion {
            source_kind: std::any::type_name::<E>().to_string(),
            reason: source.to_string(),
        }
    }
}

/// Result type alias for collaborator operations.
pub type Result<T> = std::result::Result<T, Error>;
