//! Recursive translation helpers handed to every translator.

use crate::flow::{BlockInline, FlowItem};
use crate::node::Node;
use crate::renderable::SharedRenderable;
use crate::translate::registry::TranslatorRegistry;
use crate::widgets::{Rows, Text};
use std::sync::Arc;

const BLOCK_TAGS: &[&str] = &[
    "div",
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "panel",
    "table",
    "ul",
    "ol",
    "pre",
    "blockquote",
];

/// Whether `node` takes its own line in a block/inline flow.
///
/// An explicit `data-display="block"` or `"inline"` wins. Otherwise block
/// tags and component markers are blocks, everything else is inline.
#[must_use]
pub fn is_block(node: &Node) -> bool {
    match node {
        Node::Element { tag, .. } => {
            match node.raw_attr("data-display") {
                Some(d) if d.eq_ignore_ascii_case("block") => return true,
                Some(d) if d.eq_ignore_ascii_case("inline") => return false,
                _ => {}
            }
            BLOCK_TAGS.iter().any(|b| tag.eq_ignore_ascii_case(b))
        }
        Node::Component { .. } => true,
        Node::Text(_) => false,
    }
}

/// Short label for a node in logs and error fragments.
#[must_use]
pub fn describe(node: &Node) -> String {
    match node {
        Node::Element { tag, .. } => format!("<{tag}>"),
        Node::Component { kind, .. } => kind.name().to_string(),
        Node::Text(_) => "#text".to_string(),
    }
}

/// Capability passed to translators for recursing into children.
#[derive(Clone, Copy)]
pub struct TranslationContext<'a> {
    registry: &'a TranslatorRegistry,
}

impl<'a> TranslationContext<'a> {
    #[must_use]
    pub const fn new(registry: &'a TranslatorRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &'a TranslatorRegistry {
        self.registry
    }

    /// Translate one node through the full registry.
    #[must_use]
    pub fn translate(&self, node: &Node) -> Option<SharedRenderable> {
        self.registry.dispatch(node, self)
    }

    /// Translate every child, or `None` if any child is unclaimed.
    #[must_use]
    pub fn translate_children(&self, children: &[Node]) -> Option<Vec<SharedRenderable>> {
        children.iter().map(|child| self.translate(child)).collect()
    }

    /// Translate children and lay them out as a block/inline flow.
    ///
    /// `None` if any child is unclaimed. No children gives empty text and a
    /// single child is returned as is.
    #[must_use]
    pub fn translate_flow(&self, children: &[Node]) -> Option<SharedRenderable> {
        let mut items = Vec::with_capacity(children.len());
        for child in children {
            let renderable = self.translate(child)?;
            items.push(FlowItem {
                renderable,
                is_block: is_block(child),
            });
        }
        Some(match items.len() {
            0 => Arc::new(Text::empty()),
            1 => items.swap_remove(0).renderable,
            _ => Arc::new(BlockInline::new(items)),
        })
    }
}

/// Stack renderables vertically; a single one is returned as is.
#[must_use]
pub fn compose(mut children: Vec<SharedRenderable>) -> SharedRenderable {
    if children.len() == 1 {
        children.swap_remove(0)
    } else {
        Arc::new(Rows::new(children))
    }
}
