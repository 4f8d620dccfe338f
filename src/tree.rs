//! Parsed-tree abstraction consumed by the traversal engine.
//!
//! The DOM crate hands back a full document graph; the chunking walk only
//! needs node kind, tag name, ordered children and raw text. `TreeNode`
//! captures exactly that as a tagged sum type, so the engine stays pure and
//! dispatches by `match` instead of probing node kinds at every step.
//!
//! Comment nodes, doctype declarations and processing instructions are
//! dropped at construction time; they can never contribute article text.

use dom_query::NodeRef;
use tendril::StrTendril;

/// One node of the prepared markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Raw character data, exactly as the parser decoded it.
    Text(StrTendril),
    /// An element with its tag name (lowercase) and ordered children.
    Element {
        /// Tag name as reported by the parser.
        tag: String,
        /// Child nodes in document order.
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Build a `TreeNode` from a parsed DOM node.
    ///
    /// Returns `None` for nodes that are neither text nor element
    /// (comments, doctypes, processing instructions).
    #[must_use]
    pub fn from_node(node: &NodeRef) -> Option<Self> {
        if node.is_text() {
            return Some(Self::Text(node.text()));
        }
        if !node.is_element() {
            return None;
        }
        let tag = node.node_name()?.to_string();
        let children = node
            .children()
            .iter()
            .filter_map(Self::from_node)
            .collect();
        Some(Self::Element { tag, children })
    }

    /// Collect the raw content of every text leaf, in document order.
    pub(crate) fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Text(content) => out.push(content),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn body_tree(html: &str) -> TreeNode {
        let doc = Document::from(html);
        let sel = doc.select("body");
        let node = sel.nodes().first().unwrap();
        TreeNode::from_node(node).unwrap()
    }

    #[test]
    fn builds_text_and_element_nodes() {
        let tree = body_tree("<body>foo<p>bar</p></body>");
        let TreeNode::Element { tag, children } = &tree else {
            panic!("body should be an element");
        };
        assert_eq!(tag, "body");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], TreeNode::Text("foo".into()));
        let TreeNode::Element { tag, children } = &children[1] else {
            panic!("second child should be the paragraph");
        };
        assert_eq!(tag, "p");
        assert_eq!(children[0], TreeNode::Text("bar".into()));
    }

    #[test]
    fn comments_are_dropped() {
        let tree = body_tree("<body><p><!-- comment -->kept</p></body>");
        let mut texts = Vec::new();
        tree.collect_text(&mut texts);
        assert_eq!(texts, ["kept"]);
    }

    #[test]
    fn entities_are_decoded_by_the_parser() {
        let tree = body_tree("<body><p>B&auml;r &amp; Co</p></body>");
        let mut texts = Vec::new();
        tree.collect_text(&mut texts);
        assert_eq!(texts, ["Bär & Co"]);
    }

    #[test]
    fn collect_text_preserves_document_order() {
        let tree = body_tree("<body>a<div>b<span>c</span></div>d</body>");
        let mut texts = Vec::new();
        tree.collect_text(&mut texts);
        assert_eq!(texts, ["a", "b", "c", "d"]);
    }
}
