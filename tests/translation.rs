//! End-to-end translation of realistic node trees through the default
//! registry, including custom translators and graceful degradation.

use flowterm::components::{Columns, Panel};
use flowterm::text::{Segment, SegmentLine};
use flowterm::translate::{TranslationContext, TranslatorRegistry};
use flowterm::widgets::{BoxBorder, Text};
use flowterm::{Node, RenderOptions, Renderable, SharedRenderable};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn plain(lines: &[SegmentLine]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.iter().map(Segment::as_text).collect())
        .collect()
}

fn render_with(registry: &TranslatorRegistry, node: &Node, width: usize) -> Vec<String> {
    plain(
        &registry
            .translate(node)
            .render_lines(&RenderOptions::new(width, 24), width),
    )
}

fn render(node: &Node) -> Vec<String> {
    render_with(&TranslatorRegistry::with_defaults(), node, 40)
}

fn p(text: &str) -> Node {
    Node::element("p").with_child(Node::text(text))
}

// ============================================================================
// Graceful degradation
// ============================================================================

#[test]
fn unknown_child_degrades_in_place() {
    let tree = Node::element("div")
        .with_child(p("before"))
        .with_child(Node::element("hr"))
        .with_child(p("after"));
    assert_eq!(
        render(&tree),
        vec!["before", "[failed to render <hr>]", "after"]
    );
}

#[test]
fn error_fragment_is_red() {
    let registry = TranslatorRegistry::with_defaults();
    let segments = registry
        .translate(&Node::element("canvas"))
        .render(&RenderOptions::new(40, 24), 40);
    let Segment::Text { style, .. } = &segments[0] else {
        panic!("expected text segment");
    };
    assert_eq!(style.fg, Some(flowterm::Color::RED));
}

#[test]
fn empty_registry_declines_everything() {
    let registry = TranslatorRegistry::new();
    assert!(registry.try_translate(&Node::text("x")).is_none());
    assert_eq!(
        render_with(&registry, &Node::text("x"), 40),
        vec!["[failed to render #text]"]
    );
}

// ============================================================================
// Custom translators
// ============================================================================

#[test]
fn higher_priority_closure_overrides_builtin() {
    let mut registry = TranslatorRegistry::with_defaults();
    registry.register_fn(1, |node: &Node, _cx: &TranslationContext<'_>| {
        node.is_element("p")
            .then(|| Arc::new(Text::new("override")) as SharedRenderable)
    });
    assert_eq!(render_with(&registry, &p("ignored"), 40), vec!["override"]);
}

#[test]
fn lower_priority_closure_only_sees_leftovers() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let mut registry = TranslatorRegistry::with_defaults();
    registry.register_fn(500, move |node: &Node, _cx: &TranslationContext<'_>| {
        seen.fetch_add(1, Ordering::SeqCst);
        node.is_element("hr")
            .then(|| Arc::new(Text::new("────")) as SharedRenderable)
    });

    let tree = Node::element("div")
        .with_child(p("a"))
        .with_child(Node::element("hr"));
    assert_eq!(render_with(&registry, &tree, 40), vec!["a", "────"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn custom_translator_recurses_through_context() {
    let mut registry = TranslatorRegistry::with_defaults();
    registry.register_fn(0, |node: &Node, cx: &TranslationContext<'_>| {
        if !node.is_element("shout") {
            return None;
        }
        let inner = cx.translate_children(node.children())?;
        Some(Arc::new(flowterm::widgets::Rows::new(inner)) as SharedRenderable)
    });
    let tree = Node::element("shout").with_child(p("one")).with_child(p("two"));
    assert_eq!(render_with(&registry, &tree, 40), vec!["one", "two"]);
}

// ============================================================================
// Mixed documents
// ============================================================================

#[test]
fn panel_of_columns_with_markup() {
    let tree = Node::component::<Panel>()
        .with_value(Panel::BORDER, BoxBorder::Ascii)
        .with_child(
            Node::component::<Columns>()
                .with_child(p("left"))
                .with_child(p("right")),
        );
    assert_eq!(
        render(&tree),
        vec!["+------------+", "| left right |", "+------------+"]
    );
}

#[test]
fn document_with_lists_and_breaks() {
    let tree = Node::element("div")
        .with_child(
            Node::element("h1")
                .with_attr("data-display", "block")
                .with_child(Node::text("Title")),
        )
        .with_child(
            Node::element("ul")
                .with_child(Node::element("li").with_child(Node::text("first")))
                .with_child(Node::element("li").with_child(Node::text("second"))),
        )
        .with_child(
            Node::element("p")
                .with_child(Node::text("line"))
                .with_child(Node::element("br"))
                .with_child(Node::text("break")),
        );
    assert_eq!(
        render(&tree),
        vec!["Title", "• first", "• second", "line", "break"]
    );
}

#[test]
fn narrow_width_wraps_paragraph() {
    let tree = p("the quick brown fox");
    assert_eq!(
        render_with(&TranslatorRegistry::with_defaults(), &tree, 10),
        vec!["the quick", "brown fox"]
    );
}

#[test]
fn translation_is_deterministic() {
    let registry = TranslatorRegistry::with_defaults();
    let tree = Node::element("div").with_child(p("same")).with_child(p("tree"));
    let options = RenderOptions::new(40, 24);
    let a = registry.translate(&tree).render(&options, 40);
    let b = registry.translate(&tree).render(&options, 40);
    assert_eq!(a, b);
}
