//! Translators for the layout component markers.
//!
//! Each one translates the marker's children through the registry (any
//! child left unclaimed declines the marker) and configures the matching
//! widget from the marker's typed attributes.

use crate::components as marker;
use crate::node::Node;
use crate::renderable::SharedRenderable;
use crate::translate::Translator;
use crate::translate::attrs;
use crate::translate::context::{TranslationContext, compose};
use crate::widgets::{
    Align, BoxBorder, Columns, Grid, HorizontalAlignment, Padder, Padding, Panel, Rows,
    VerticalAlignment,
};
use std::sync::Arc;

/// Translated children of a marker of type `T`, or `None` if `node` is not
/// one or a child is unclaimed.
fn children_of<T: 'static>(node: &Node, cx: &TranslationContext<'_>) -> Option<Vec<SharedRenderable>> {
    if !node.is_component::<T>() {
        return None;
    }
    cx.translate_children(node.children())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PanelTranslator;

impl Translator for PanelTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let content = compose(children_of::<marker::Panel>(node, cx)?);
        let mut panel = Panel::new(content)
            .border(node.attr::<BoxBorder>(marker::Panel::BORDER).unwrap_or_default())
            .border_style(attrs::style(node, marker::Panel::BORDER_STYLE).unwrap_or_default())
            .title_style(attrs::style(node, marker::Panel::TITLE_STYLE).unwrap_or_default())
            .expand(attrs::flag(node, marker::Panel::EXPAND, false))
            .width(attrs::number(node, marker::Panel::WIDTH))
            .height(attrs::number(node, marker::Panel::HEIGHT));
        if let Some(padding) = node.attr::<Padding>(marker::Panel::PADDING) {
            panel = panel.padding(padding);
        }
        if let Some(title) = attrs::string(node, marker::Panel::TITLE) {
            panel = panel.title(title);
        }
        Some(Arc::new(panel))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RowsTranslator;

impl Translator for RowsTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let children = children_of::<marker::Rows>(node, cx)?;
        let expand = attrs::flag(node, marker::Rows::EXPAND, false);
        Some(Arc::new(Rows::new(children).expand(expand)))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnsTranslator;

impl Translator for ColumnsTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let children = children_of::<marker::Columns>(node, cx)?;
        let columns = Columns::new(children)
            .gap(attrs::number(node, marker::Columns::GAP).unwrap_or(1))
            .expand(attrs::flag(node, marker::Columns::EXPAND, false));
        Some(Arc::new(columns))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GridTranslator;

impl Translator for GridTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let children = children_of::<marker::Grid>(node, cx)?;
        let columns = attrs::number(node, marker::Grid::COLUMNS).unwrap_or(2);
        let grid = Grid::new(children, columns)
            .expand(attrs::flag(node, marker::Grid::EXPAND, false))
            .width(attrs::number(node, marker::Grid::WIDTH));
        Some(Arc::new(grid))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PadderTranslator;

impl Translator for PadderTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let content = compose(children_of::<marker::Padder>(node, cx)?);
        let padding = node
            .attr::<Padding>(marker::Padder::PADDING)
            .unwrap_or_default();
        Some(Arc::new(Padder::new(content, padding)))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AlignTranslator;

impl Translator for AlignTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let content = compose(children_of::<marker::Align>(node, cx)?);
        let horizontal = node
            .attr::<HorizontalAlignment>(marker::Align::HORIZONTAL)
            .unwrap_or_default();
        let align = Align::new(content, horizontal)
            .vertical(node.attr::<VerticalAlignment>(marker::Align::VERTICAL))
            .width(attrs::number(node, marker::Align::WIDTH))
            .height(attrs::number(node, marker::Align::HEIGHT));
        Some(Arc::new(align))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderable::{RenderOptions, Renderable};
    use crate::style::Style;
    use crate::text::Segment;
    use crate::translate::TranslatorRegistry;

    fn render(node: &Node, width: usize) -> Vec<String> {
        TranslatorRegistry::with_defaults()
            .translate(node)
            .render_lines(&RenderOptions::new(width, 10), width)
            .iter()
            .map(|l| l.iter().map(Segment::as_text).collect())
            .collect()
    }

    fn text(s: &str) -> Node {
        Node::text(s)
    }

    #[test]
    fn test_panel_from_attributes() {
        let node = Node::component::<marker::Panel>()
            .with_value(marker::Panel::BORDER, BoxBorder::Ascii)
            .with_value(marker::Panel::TITLE, String::from("T"))
            .with_value(marker::Panel::BORDER_STYLE, Style::bold())
            .with_child(text("body"));
        assert_eq!(render(&node, 40), vec!["+- T --+", "| body |", "+------+"]);
    }

    #[test]
    fn test_panel_wrong_type_uses_default() {
        let node = Node::component::<marker::Panel>()
            .with_value(marker::Panel::BORDER, "double")
            .with_child(text("x"));
        assert_eq!(render(&node, 40)[0], "┌───┐");
    }

    #[test]
    fn test_rows_and_columns() {
        let rows = Node::component::<marker::Rows>()
            .with_child(text("a"))
            .with_child(text("b"));
        assert_eq!(render(&rows, 40), vec!["a", "b"]);

        let cols = Node::component::<marker::Columns>()
            .with_value(marker::Columns::GAP, 2usize)
            .with_child(text("a"))
            .with_child(text("b"));
        assert_eq!(render(&cols, 40), vec!["a  b"]);
    }

    #[test]
    fn test_grid_defaults_to_two_columns() {
        let grid = Node::component::<marker::Grid>()
            .with_child(text("1"))
            .with_child(text("2"))
            .with_child(text("3"));
        assert_eq!(render(&grid, 40), vec!["1 2", "3  "]);
    }

    #[test]
    fn test_padder_and_align() {
        let padder = Node::component::<marker::Padder>()
            .with_value(marker::Padder::PADDING, Padding::new(2, 0, 0, 0))
            .with_child(text("x"));
        assert_eq!(render(&padder, 40), vec!["  x"]);

        let align = Node::component::<marker::Align>()
            .with_value(marker::Align::HORIZONTAL, HorizontalAlignment::Right)
            .with_value(marker::Align::WIDTH, 4usize)
            .with_child(text("ab"));
        assert_eq!(render(&align, 40), vec!["  ab"]);
    }

    #[test]
    fn test_unclaimed_child_declines_marker() {
        let registry = TranslatorRegistry::new();
        let cx = TranslationContext::new(&registry);
        let node = Node::component::<marker::Rows>().with_child(text("a"));
        assert!(RowsTranslator.try_translate(&node, &cx).is_none());
        assert!(RowsTranslator.try_translate(&Node::text("a"), &cx).is_none());
    }

    #[test]
    fn test_unknown_component_is_error_fragment() {
        struct Chart;
        let node = Node::component::<Chart>();
        assert_eq!(render(&node, 40), vec!["[failed to render Chart]"]);
    }
}
