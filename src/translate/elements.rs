//! Translators for HTML-like elements and text.

use crate::color::Color;
use crate::flow::{BlockInline, FlowItem};
use crate::node::Node;
use crate::renderable::SharedRenderable;
use crate::style::{Style, TextAttributes};
use crate::text::Segment;
use crate::translate::attrs;
use crate::translate::context::{TranslationContext, compose, is_block};
use crate::translate::Translator;
use crate::widgets::{BoxBorder, Columns, Newline, Padding, Panel, Rows, Spacer, Text};
use std::sync::Arc;

/// `<span data-text="true">` carrying markup in `data-content` or its inner
/// text, styled by `data-style`.
///
/// Declines when `data-content` is combined with children, or when there is
/// no content attribute and the inner text is blank.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextElementTranslator;

impl Translator for TextElementTranslator {
    fn try_translate(&self, node: &Node, _cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if !node.is_element("span") {
            return None;
        }
        if !attrs::string(node, "data-text").is_some_and(|v| v.eq_ignore_ascii_case("true")) {
            return None;
        }

        let text = if let Some(content) = attrs::string(node, "data-content") {
            if !node.children().is_empty() {
                return None;
            }
            content
        } else {
            let inner = node.collect_inner_text();
            if inner.trim().is_empty() {
                return None;
            }
            inner
        };

        let base = attrs::style(node, "data-style").unwrap_or_default();
        Some(Arc::new(Text::from_markup(&text, base)))
    }
}

/// Bare text nodes, shown literally.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextNodeTranslator;

impl Translator for TextNodeTranslator {
    fn try_translate(&self, node: &Node, _cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        node.as_text()
            .map(|text| Arc::new(Text::new(text)) as SharedRenderable)
    }
}

fn inline_tag_style(tag: &str) -> Option<Style> {
    let style = match tag.to_ascii_lowercase().as_str() {
        "span" => Style::NONE,
        "strong" | "b" => Style::bold(),
        "em" | "i" => Style::italic(),
        "u" => Style::underline(),
        "s" | "del" => Style::with_attributes(TextAttributes::STRIKETHROUGH),
        "code" => Style::fg(Color::YELLOW),
        "mark" => Style::with_attributes(TextAttributes::INVERSE),
        _ => return None,
    };
    Some(style)
}

/// Style an inline element adds, including its own `data-style`.
fn inline_style(node: &Node) -> Option<Style> {
    let own = inline_tag_style(node.tag()?)?;
    Some(match attrs::style(node, "data-style") {
        Some(extra) => own.merge(extra),
        None => own,
    })
}

/// Gather styled runs from nested inline elements. False if anything other
/// than text or inline elements is found.
fn collect_spans(node: &Node, style: Style, out: &mut Vec<Segment>) -> bool {
    for child in node.children() {
        match child {
            Node::Text(text) => {
                if !text.is_empty() {
                    out.push(Segment::styled(text.clone(), style));
                }
            }
            Node::Element { .. } => {
                let Some(extra) = inline_style(child) else {
                    return false;
                };
                if !collect_spans(child, style.merge(extra), out) {
                    return false;
                }
            }
            Node::Component { .. } => return false,
        }
    }
    true
}

/// `strong b em i u s del code mark span` holding only text and other
/// inline elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineTextTranslator;

impl Translator for InlineTextTranslator {
    fn try_translate(&self, node: &Node, _cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let style = inline_style(node)?;
        let mut spans = Vec::new();
        if !collect_spans(node, style, &mut spans) {
            return None;
        }
        Some(Arc::new(Text::from_segments(spans)))
    }
}

/// `<p>`: its children as a block/inline flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParagraphTranslator;

impl Translator for ParagraphTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if !node.is_element("p") {
            return None;
        }
        cx.translate_flow(node.children())
    }
}

/// Any element with `data-spacer`: `data-lines` blank lines (default 1).
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacerTranslator;

impl Translator for SpacerTranslator {
    fn try_translate(&self, node: &Node, _cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if node.tag().is_none() || !node.has_attr("data-spacer") {
            return None;
        }
        let lines = attrs::number(node, "data-lines").unwrap_or(1);
        Some(Arc::new(Spacer::new(lines)))
    }
}

/// Any element with a non-empty `data-flow`.
///
/// Children nobody can translate are left out; if none remain the element
/// is declined.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlowTranslator;

impl Translator for FlowTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if node.tag().is_none() || attrs::string(node, "data-flow").is_none_or(|f| f.is_empty()) {
            return None;
        }

        let items: Vec<FlowItem> = node
            .children()
            .iter()
            .filter_map(|child| {
                cx.translate(child).map(|renderable| FlowItem {
                    renderable,
                    is_block: is_block(child),
                })
            })
            .collect();

        if items.is_empty() {
            return None;
        }
        Some(Arc::new(BlockInline::new(items)))
    }
}

/// `<br>` or any element with `data-newline`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NewlineTranslator;

impl Translator for NewlineTranslator {
    fn try_translate(&self, node: &Node, _cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if !node.is_element("br") && !(node.tag().is_some() && node.has_attr("data-newline")) {
            return None;
        }
        let count = attrs::number(node, "data-lines").unwrap_or(1);
        Some(Arc::new(Newline::new(count)))
    }
}

struct SelectOption {
    value: String,
    label: String,
}

fn select_options(node: &Node) -> Vec<SelectOption> {
    node.children()
        .iter()
        .filter(|child| child.is_element("option"))
        .filter_map(|option| {
            let inner = option.collect_inner_text();
            let value = attrs::string(option, "value").unwrap_or_else(|| inner.clone());
            if value.is_empty() {
                return None;
            }
            let label = if inner.is_empty() { value.clone() } else { inner };
            Some(SelectOption { value, label })
        })
        .collect()
}

/// `<select value=..>` shown as a static option list with `> ` before the
/// selected entry.
///
/// Colors come from `data-selected-color` (default green),
/// `data-option-color` (white), and for an empty list `data-empty-label`
/// and `data-empty-color` (grey70).
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectTranslator;

impl Translator for SelectTranslator {
    fn try_translate(&self, node: &Node, _cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if !node.is_element("select") {
            return None;
        }

        let options = select_options(node);
        if options.is_empty() {
            let label = attrs::string(node, "data-empty-label")
                .unwrap_or_else(|| "No options available".to_string());
            let style = attrs::style_or(node, "data-empty-color", "grey70").with_italic();
            let empty: SharedRenderable = Arc::new(Text::styled(label, style));
            return Some(Arc::new(Rows::new(vec![empty])));
        }

        let selected = attrs::string(node, "value").filter(|v| !v.is_empty());
        let selected_style = attrs::style_or(node, "data-selected-color", "green").with_bold();
        let option_style = attrs::style_or(node, "data-option-color", "white");

        let rows = options
            .into_iter()
            .map(|option| {
                let is_selected = selected.as_deref() == Some(option.value.as_str());
                let (marker, style) = if is_selected {
                    ("> ", selected_style)
                } else {
                    ("  ", option_style)
                };
                Arc::new(Text::styled(format!("{marker}{}", option.label), style)) as SharedRenderable
            })
            .collect();
        Some(Arc::new(Rows::new(rows)))
    }
}

/// `<blockquote>`: children indented by two cells inside a borderless panel.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockquoteTranslator;

impl Translator for BlockquoteTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if !node.is_element("blockquote") {
            return None;
        }
        if node.children().is_empty() {
            return Some(Arc::new(Text::empty()));
        }
        let content = compose(cx.translate_children(node.children())?);
        Some(Arc::new(
            Panel::new(content)
                .border(BoxBorder::None)
                .padding(Padding::new(2, 0, 0, 0))
                .border_style(Style::fg(Color::GREY)),
        ))
    }
}

/// `<ul>` and `<ol>` with `<li>` children, one row per item.
///
/// Ordered lists count from `start` (default 1). Whitespace-only text
/// between items is ignored; any other non-`li` child declines the list.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListTranslator;

impl Translator for ListTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        let ordered = node.is_element("ol");
        if !ordered && !node.is_element("ul") {
            return None;
        }

        let items: Vec<&Node> = node
            .children()
            .iter()
            .filter(|child| !child.as_text().is_some_and(|t| t.trim().is_empty()))
            .collect();
        // Decline before translating any item
        if !items.iter().all(|child| child.is_element("li")) {
            return None;
        }

        let start = attrs::number(node, "start").unwrap_or(1);
        let mut rows: Vec<SharedRenderable> = Vec::with_capacity(items.len());
        for (n, child) in items.into_iter().enumerate() {
            let marker = if ordered {
                format!("{}. ", start + n)
            } else {
                "• ".to_string()
            };
            let item = cx.translate_flow(child.children())?;
            let marker: SharedRenderable = Arc::new(Text::new(marker).no_wrap());
            rows.push(Arc::new(Columns::new(vec![marker, item]).gap(0)));
        }

        if rows.is_empty() {
            return Some(Arc::new(Text::empty()));
        }
        Some(Arc::new(Rows::new(rows)))
    }
}

/// `<div>`, and any other element with children: a block/inline flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct DivTranslator;

impl Translator for DivTranslator {
    fn try_translate(&self, node: &Node, cx: &TranslationContext<'_>) -> Option<SharedRenderable> {
        if node.tag().is_none() {
            return None;
        }
        if !node.is_element("div") && node.children().is_empty() {
            return None;
        }
        cx.translate_flow(node.children())
    }
}
