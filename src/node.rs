//! The per-frame UI tree and typed attribute access.
//!
//! A [`Node`] is one of three shapes: an HTML-like element with string
//! attributes, a component marker identified by a Rust type with arbitrarily
//! typed attributes, or a text leaf. Trees own their children outright and
//! are never mutated once handed to the renderer.
//!
//! # Examples
//!
//! ```
//! use flowterm::node::{AttrLookup, Node};
//! use flowterm::components::Panel;
//!
//! let tree = Node::component::<Panel>()
//!     .with_value(Panel::TITLE, String::from("Status"))
//!     .with_value(Panel::EXPAND, true)
//!     .with_child(Node::element("span").with_child(Node::text("ready")));
//!
//! assert_eq!(tree.try_attr::<bool>(Panel::EXPAND).unwrap(), AttrLookup::Found(true));
//! assert_eq!(tree.try_attr::<u32>(Panel::EXPAND).unwrap(), AttrLookup::Mismatch);
//! assert_eq!(tree.collect_inner_text(), "ready");
//! ```

use crate::error::{Error, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifies the kind of a component marker node.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentKind {
    id: TypeId,
    name: &'static str,
}

impl ComponentKind {
    /// Kind for the marker type `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Check whether this kind is `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Unqualified type name, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKind({})", self.name())
    }
}

/// Type-erased component attribute value.
pub type AttrValue = Arc<dyn Any + Send + Sync>;

/// A node in the UI tree.
#[derive(Clone)]
pub enum Node {
    /// HTML-like element.
    Element {
        tag: String,
        attributes: HashMap<String, String>,
        children: Vec<Node>,
    },
    /// Component marker. A `None` attribute value is an explicit null.
    Component {
        kind: ComponentKind,
        attributes: HashMap<String, Option<AttrValue>>,
        children: Vec<Node>,
    },
    /// Text leaf.
    Text(String),
}

/// Outcome of a typed attribute lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrLookup<T> {
    /// No attribute with that key.
    Missing,
    /// Present but explicitly null.
    Null,
    /// Present with a value of another type.
    Mismatch,
    /// Present with the requested type.
    Found(T),
}

impl<T> AttrLookup<T> {
    /// The value, if found with the requested type.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl Node {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a component marker for `T`.
    #[must_use]
    pub fn component<T: 'static>() -> Self {
        Self::component_of(ComponentKind::of::<T>())
    }

    #[must_use]
    pub fn component_of(kind: ComponentKind) -> Self {
        Self::Component {
            kind,
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Set a string attribute. On components the value is stored as a `String`.
    /// Ignored on text nodes.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Element { attributes, .. } => {
                attributes.insert(key.into(), value.into());
            }
            Self::Component { attributes, .. } => {
                let value: String = value.into();
                attributes.insert(key.into(), Some(Arc::new(value)));
            }
            Self::Text(_) => {}
        }
        self
    }

    /// Set a typed component attribute. Elements only hold strings, so this
    /// is ignored on elements and text nodes.
    #[must_use]
    pub fn with_value<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        if let Self::Component { attributes, .. } = &mut self {
            attributes.insert(key.into(), Some(Arc::new(value)));
        }
        self
    }

    /// Set an explicitly null component attribute.
    #[must_use]
    pub fn with_null_attr(mut self, key: impl Into<String>) -> Self {
        if let Self::Component { attributes, .. } = &mut self {
            attributes.insert(key.into(), None);
        }
        self
    }

    /// Append a child. Ignored on text nodes.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        if let Self::Element { children, .. } | Self::Component { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(self, children: impl IntoIterator<Item = Self>) -> Self {
        children.into_iter().fold(self, Self::with_child)
    }

    /// Element tag, if this is an element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Check for an element with the given tag (ASCII case-insensitive).
    #[must_use]
    pub fn is_element(&self, name: &str) -> bool {
        self.tag().is_some_and(|t| t.eq_ignore_ascii_case(name))
    }

    /// Component kind, if this is a component marker.
    #[must_use]
    pub fn kind(&self) -> Option<ComponentKind> {
        match self {
            Self::Component { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check for a component marker of type `T`.
    #[must_use]
    pub fn is_component<T: 'static>(&self) -> bool {
        self.kind().is_some_and(|k| k.is::<T>())
    }

    /// Text payload, if this is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Ordered children; empty for text nodes.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element { children, .. } | Self::Component { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// Raw string attribute of an element.
    #[must_use]
    pub fn raw_attr(&self, key: &str) -> Option<&str> {
        match self {
            Self::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// Check whether an attribute key is present (null values count).
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        match self {
            Self::Element { attributes, .. } => attributes.contains_key(key),
            Self::Component { attributes, .. } => attributes.contains_key(key),
            Self::Text(_) => false,
        }
    }

    /// Typed attribute lookup across elements and components.
    ///
    /// Element attributes are strings and only match `T = String`; there is
    /// no numeric coercion. Component attributes match when the stored value
    /// has type `T`. A blank key is an error; type mismatch is not.
    pub fn try_attr<T: Any + Clone>(&self, key: &str) -> Result<AttrLookup<T>> {
        if key.trim().is_empty() {
            return Err(Error::InvalidAttributeKey);
        }

        let lookup = match self {
            Self::Element { attributes, .. } => match attributes.get(key) {
                None => AttrLookup::Missing,
                Some(value) => {
                    let value: &dyn Any = value;
                    value.downcast_ref::<T>().cloned().map_or(AttrLookup::Mismatch, AttrLookup::Found)
                }
            },
            Self::Component { attributes, .. } => match attributes.get(key) {
                None => AttrLookup::Missing,
                Some(None) => AttrLookup::Null,
                Some(Some(value)) => {
                    value.downcast_ref::<T>().cloned().map_or(AttrLookup::Mismatch, AttrLookup::Found)
                }
            },
            Self::Text(_) => AttrLookup::Missing,
        };
        Ok(lookup)
    }

    /// Typed lookup with a fallback for anything but a typed hit.
    pub fn attr_or<T: Any + Clone>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.try_attr(key)?.found().unwrap_or(default))
    }

    /// Typed lookup that folds every miss, including a blank key, into `None`.
    #[must_use]
    pub fn attr<T: Any + Clone>(&self, key: &str) -> Option<T> {
        self.try_attr(key).ok().and_then(AttrLookup::found)
    }

    /// Concatenated text of all descendant text nodes, in document order.
    #[must_use]
    pub fn collect_inner_text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            _ => {
                for child in self.children() {
                    child.push_text(out);
                }
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element {
                tag,
                attributes,
                children,
            } => f
                .debug_struct("Element")
                .field("tag", tag)
                .field("attributes", attributes)
                .field("children", children)
                .finish(),
            Self::Component {
                kind,
                attributes,
                children,
            } => {
                let mut keys: Vec<&str> = attributes.keys().map(String::as_str).collect();
                keys.sort_unstable();
                f.debug_struct("Component")
                    .field("kind", kind)
                    .field("attributes", &keys)
                    .field("children", children)
                    .finish()
            }
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;
    struct Other;

    #[test]
    fn test_missing_attribute_is_not_an_error() {
        let node = Node::component::<Marker>();
        assert_eq!(node.try_attr::<i32>("missing").unwrap(), AttrLookup::Missing);
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let node = Node::element("div");
        assert!(matches!(node.try_attr::<i32>(""), Err(Error::InvalidAttributeKey)));
        assert!(matches!(node.try_attr::<String>("  "), Err(Error::InvalidAttributeKey)));
    }

    #[test]
    fn test_element_values_are_not_coerced() {
        let node = Node::element("div").with_attr("key", "42");
        assert_eq!(node.try_attr::<String>("key").unwrap(), AttrLookup::Found("42".to_string()));
        assert_eq!(node.try_attr::<i32>("key").unwrap(), AttrLookup::Mismatch);
    }

    #[test]
    fn test_component_null_and_mismatch() {
        let node = Node::component::<Marker>()
            .with_null_attr("title")
            .with_value("count", 3_usize);
        assert_eq!(node.try_attr::<String>("title").unwrap(), AttrLookup::Null);
        assert_eq!(node.try_attr::<i32>("count").unwrap(), AttrLookup::Mismatch);
        assert_eq!(node.try_attr::<usize>("count").unwrap(), AttrLookup::Found(3));
        assert_eq!(node.attr_or("title", String::from("none")).unwrap(), "none");
        assert!(node.attr_or("", 0).is_err());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let node = Node::element("div").with_attr("data-Flow", "x");
        assert!(node.has_attr("data-Flow"));
        assert!(!node.has_attr("data-flow"));
    }

    #[test]
    fn test_component_kind_identity() {
        let node = Node::component::<Marker>();
        assert!(node.is_component::<Marker>());
        assert!(!node.is_component::<Other>());
        assert_eq!(node.kind().map(|k| k.name()), Some("Marker"));
    }

    #[test]
    fn test_inner_text_in_document_order() {
        let node = Node::element("p")
            .with_child(Node::text("a"))
            .with_child(Node::element("b").with_child(Node::text("b")))
            .with_child(Node::text("c"));
        assert_eq!(node.collect_inner_text(), "abc");
    }

    #[test]
    fn test_text_nodes_ignore_builders() {
        let node = Node::text("x").with_attr("k", "v").with_child(Node::text("y"));
        assert!(node.children().is_empty());
        assert!(!node.has_attr("k"));
    }
}
