//! Node-to-renderable translation.
//!
//! A [`TranslatorRegistry`] holds [`Translator`]s sorted by priority. Each
//! translator looks at one node and either declines or builds a
//! [`Renderable`](crate::Renderable) for it, recursing into children through
//! the [`TranslationContext`] it is handed. The first translator to accept a
//! node wins; ties in priority go to whichever was registered first.
//!
//! The default registry understands a small HTML-like vocabulary (`span`,
//! `p`, `div`, `ul`, `select`, ...) plus the component markers in
//! [`components`](crate::components), and ends with a catch-all that draws
//! a red error fragment so one bad node never blanks the screen.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use flowterm::translate::{TranslationContext, TranslatorRegistry};
//! use flowterm::widgets::Text;
//! use flowterm::{Node, RenderOptions, Renderable, SharedRenderable};
//!
//! let mut registry = TranslatorRegistry::with_defaults();
//! registry.register_fn(5, |node: &Node, _cx: &TranslationContext<'_>| {
//!     node.is_element("hr")
//!         .then(|| Arc::new(Text::new("----")) as SharedRenderable)
//! });
//!
//! let tree = Node::element("div")
//!     .with_child(Node::element("p").with_child(Node::text("above")))
//!     .with_child(Node::element("hr"));
//! let lines = registry.translate(&tree).render_lines(&RenderOptions::new(40, 10), 40);
//! assert_eq!(lines.len(), 2);
//! ```

mod attrs;
mod components;
mod context;
mod elements;
mod registry;

pub use components::{
    AlignTranslator, ColumnsTranslator, GridTranslator, PadderTranslator, PanelTranslator,
    RowsTranslator,
};
pub use context::{TranslationContext, describe, is_block};
pub use elements::{
    BlockquoteTranslator, DivTranslator, FlowTranslator, InlineTextTranslator, ListTranslator,
    NewlineTranslator, ParagraphTranslator, SelectTranslator, SpacerTranslator,
    TextElementTranslator, TextNodeTranslator,
};
pub use registry::{DEFAULT_PRIORITY, FailToRenderTranslator, TranslatorRegistry, error_fragment};

use crate::node::Node;
use crate::renderable::SharedRenderable;

/// Turns one node shape into a renderable.
///
/// Implementations must only look at `node` and its subtree, and return
/// `None` for anything they do not handle. Child nodes are translated
/// through `cx` so every registered translator gets a chance at them.
pub trait Translator: Send + Sync {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable>;

    /// Name used in trace output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Translator for F
where
    F: Fn(&Node, &TranslationContext<'_>) -> Option<SharedRenderable> + Send + Sync,
{
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        self(node, cx)
    }
}
