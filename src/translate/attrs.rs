//! Lenient attribute readers shared by the built-in translators.
//!
//! Element attributes are always strings while component attributes are
//! typed, so these accept either the typed value or its string spelling.

use crate::node::Node;
use crate::style::Style;

pub(crate) fn string(node: &Node, key: &str) -> Option<String> {
    node.attr::<String>(key)
}

pub(crate) fn number(node: &Node, key: &str) -> Option<usize> {
    if let Some(n) = node.attr::<usize>(key) {
        return Some(n);
    }
    if let Some(n) = node.attr::<u32>(key) {
        return usize::try_from(n).ok();
    }
    if let Some(n) = node.attr::<i32>(key) {
        return usize::try_from(n).ok();
    }
    string(node, key).and_then(|s| s.trim().parse().ok())
}

pub(crate) fn flag(node: &Node, key: &str, default: bool) -> bool {
    if let Some(b) = node.attr::<bool>(key) {
        return b;
    }
    match string(node, key) {
        Some(s) if s.eq_ignore_ascii_case("true") => true,
        Some(s) if s.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

/// A `Style` value, or a style string that parses.
pub(crate) fn style(node: &Node, key: &str) -> Option<Style> {
    if let Some(style) = node.attr::<Style>(key) {
        return Some(style);
    }
    let spec = string(node, key)?;
    match Style::parse(&spec) {
        Ok(style) => Some(style),
        Err(err) => {
            tracing::debug!(%err, key, "ignoring unparseable style attribute");
            None
        }
    }
}

/// Style string with a fallback used when the attribute is missing or bad.
pub(crate) fn style_or(node: &Node, key: &str, default: &str) -> Style {
    style(node, key)
        .or_else(|| Style::parse(default).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::components::Panel;

    #[test]
    fn test_number_from_any_spelling() {
        let el = Node::element("div").with_attr("data-lines", " 3 ");
        assert_eq!(number(&el, "data-lines"), Some(3));

        let comp = Node::component::<Panel>()
            .with_value("a", 4usize)
            .with_value("b", 5i32)
            .with_value("c", -1i32);
        assert_eq!(number(&comp, "a"), Some(4));
        assert_eq!(number(&comp, "b"), Some(5));
        assert_eq!(number(&comp, "c"), None);
        assert_eq!(number(&comp, "missing"), None);
    }

    #[test]
    fn test_flag_and_style() {
        let el = Node::element("span")
            .with_attr("x", "TRUE")
            .with_attr("s", "bold red")
            .with_attr("bad", "not a style at all");
        assert!(flag(&el, "x", false));
        assert!(flag(&el, "missing", true));
        assert_eq!(style(&el, "s").and_then(|s| s.fg), Some(Color::RED));
        assert_eq!(style(&el, "bad"), None);
        assert_eq!(style_or(&el, "bad", "green").fg, Some(Color::Ansi(2)));
    }
}
