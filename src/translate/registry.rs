//! Priority-ordered translator registry.

use crate::color::Color;
use crate::node::Node;
use crate::renderable::SharedRenderable;
use crate::style::Style;
use crate::translate::context::{self, TranslationContext};
use crate::translate::{Translator, components as comp, elements as el};
use crate::widgets::Text;
use std::fmt;
use std::sync::Arc;

/// Priority of the catch-all [`FailToRenderTranslator`].
///
/// Equal priorities keep registration order and the catch-all accepts every
/// node, so a translator added at this priority after
/// [`with_defaults`](TranslatorRegistry::with_defaults) never runs. Use a
/// priority below 1000 to run ahead of the catch-all.
pub const DEFAULT_PRIORITY: i32 = 1000;

struct Entry {
    priority: i32,
    translator: Arc<dyn Translator>,
}

/// Ordered set of translators.
///
/// Entries stay sorted by priority; among equal priorities, registration
/// order is kept. The list is only mutated during setup, so a registry can
/// be shared read-only across threads afterwards.
#[derive(Default)]
pub struct TranslatorRegistry {
    entries: Vec<Entry>,
}

impl TranslatorRegistry {
    /// An empty registry. Nodes that nobody claims come back as `None` from
    /// [`try_translate`](Self::try_translate).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry loaded with every built-in translator.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(10, el::TextElementTranslator)
            .register(15, el::TextNodeTranslator)
            .register(20, el::InlineTextTranslator)
            .register(30, el::ParagraphTranslator)
            .register(40, el::SpacerTranslator)
            .register(45, el::FlowTranslator)
            .register(50, el::NewlineTranslator)
            .register(80, el::SelectTranslator)
            .register(100, comp::PanelTranslator)
            .register(110, comp::RowsTranslator)
            .register(120, comp::ColumnsTranslator)
            .register(130, comp::GridTranslator)
            .register(140, comp::PadderTranslator)
            .register(150, comp::AlignTranslator)
            .register(160, el::BlockquoteTranslator)
            .register(180, el::ListTranslator)
            .register(190, el::DivTranslator)
            .register(DEFAULT_PRIORITY, FailToRenderTranslator);
        registry
    }

    /// Add a translator. Lower priorities are tried first.
    pub fn register<T: Translator + 'static>(&mut self, priority: i32, translator: T) -> &mut Self {
        self.register_shared(priority, Arc::new(translator))
    }

    /// Add a closure translator.
    pub fn register_fn<F>(&mut self, priority: i32, f: F) -> &mut Self
    where
        F: Fn(&Node, &TranslationContext<'_>) -> Option<SharedRenderable> + Send + Sync + 'static,
    {
        self.register(priority, f)
    }

    pub fn register_shared(&mut self, priority: i32, translator: Arc<dyn Translator>) -> &mut Self {
        let at = self.entries.partition_point(|e| e.priority <= priority);
        self.entries.insert(
            at,
            Entry {
                priority,
                translator,
            },
        );
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered (priority, name) pairs in dispatch order.
    pub fn entries(&self) -> impl Iterator<Item = (i32, &str)> {
        self.entries.iter().map(|e| (e.priority, e.translator.name()))
    }

    pub(crate) fn dispatch(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        for entry in &self.entries {
            if let Some(renderable) = entry.translator.try_translate(node, cx) {
                tracing::trace!(
                    priority = entry.priority,
                    translator = entry.translator.name(),
                    node = %context::describe(node),
                    "node claimed"
                );
                return Some(renderable);
            }
        }
        tracing::debug!(node = %context::describe(node), "no translator claimed node");
        None
    }

    /// Translate with the first accepting translator, if any.
    #[must_use]
    pub fn try_translate(&self, node: &Node) -> Option<SharedRenderable> {
        TranslationContext::new(self).translate(node)
    }

    /// Translate, substituting an error fragment when nothing accepts.
    #[must_use]
    pub fn translate(&self, node: &Node) -> SharedRenderable {
        self.try_translate(node)
            .unwrap_or_else(|| error_fragment(node))
    }
}

impl fmt::Debug for TranslatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

/// Visible placeholder for a node nothing could render.
#[must_use]
pub fn error_fragment(node: &Node) -> SharedRenderable {
    Arc::new(Text::styled(
        format!("[failed to render {}]", context::describe(node)),
        Style::fg(Color::RED),
    ))
}

/// Accepts every node and draws an [`error_fragment`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FailToRenderTranslator;

impl Translator for FailToRenderTranslator {
    fn try_translate(&self, node: &Node, _cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        tracing::debug!(node = %context::describe(node), "rendering error fragment");
        Some(error_fragment(node))
    }
}
