//! Document preparation before traversal.
//!
//! Two stages: a string-level repair pass that drops stray void-element end
//! tags (the parser would otherwise turn them into real elements), then a
//! selector-driven cleaning pass that removes subtrees whose text is never
//! article content.

use dom_query::Document;

use crate::options::Options;
use crate::patterns::{NON_CONTENT_SELECTOR, STRAY_VOID_END_TAG};

/// Parse raw markup into a cleaned document.
///
/// Removes `script` and `style` subtrees plus any configured extra tags.
/// Comment and declaration nodes survive in the document but are excluded
/// structurally when the traversal tree is built.
#[must_use]
pub(crate) fn prepare_document(html: &str, options: &Options) -> Document {
    let repaired = STRAY_VOID_END_TAG.replace_all(html, "");
    let doc = Document::from(repaired.as_ref());

    // Single combined selector, one tree scan.
    let selector = clean_selector(options);
    doc.select(&selector).remove();

    doc
}

/// Build the combined removal selector for this call's options.
fn clean_selector(options: &Options) -> String {
    if options.extra_clean_tags.is_empty() {
        return NON_CONTENT_SELECTOR.to_string();
    }
    let mut parts = vec![NON_CONTENT_SELECTOR.to_string()];
    parts.extend(options.extra_clean_tags.iter().cloned());
    parts.join(", ")
}
