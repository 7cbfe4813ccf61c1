//! Bordered panel with an optional title.

use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable};
use crate::style::Style;
use crate::text::{Segment, SegmentLine, join_lines};
use crate::unicode::{display_width, truncate_to_width};
use crate::widgets::padder::{Padding, pad_lines};

/// Border drawing style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxBorder {
    #[default]
    Square,
    Rounded,
    Double,
    Heavy,
    Ascii,
    /// Border cells are blank but still take up space.
    None,
}

/// Glyphs for one border style.
struct BorderGlyphs {
    top_left: char,
    top: char,
    top_right: char,
    side: char,
    bottom_left: char,
    bottom: char,
    bottom_right: char,
}

impl BoxBorder {
    const fn glyphs(self) -> BorderGlyphs {
        let (top_left, top, top_right, side, bottom_left, bottom, bottom_right) = match self {
            Self::Square => ('┌', '─', '┐', '│', '└', '─', '┘'),
            Self::Rounded => ('╭', '─', '╮', '│', '╰', '─', '╯'),
            Self::Double => ('╔', '═', '╗', '║', '╚', '═', '╝'),
            Self::Heavy => ('┏', '━', '┓', '┃', '┗', '━', '┛'),
            Self::Ascii => ('+', '-', '+', '|', '+', '-', '+'),
            Self::None => (' ', ' ', ' ', ' ', ' ', ' ', ' '),
        };
        BorderGlyphs {
            top_left,
            top,
            top_right,
            side,
            bottom_left,
            bottom,
            bottom_right,
        }
    }
}

/// A child inside a border.
///
/// Hugs its content unless expanded or given a fixed width. A fixed height
/// counts the border rows; content beyond it is cut, short content is padded.
#[derive(Clone)]
pub struct Panel {
    child: SharedRenderable,
    border: BoxBorder,
    border_style: Style,
    title: Option<String>,
    title_style: Style,
    padding: Padding,
    expand: bool,
    width: Option<usize>,
    height: Option<usize>,
}

impl Panel {
    #[must_use]
    pub fn new(child: SharedRenderable) -> Self {
        Self {
            child,
            border: BoxBorder::Square,
            border_style: Style::NONE,
            title: None,
            title_style: Style::NONE,
            padding: Padding::new(1, 0, 1, 0),
            expand: false,
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub fn border(mut self, border: BoxBorder) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Title shown in the top border. Blank titles are ignored.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.trim().is_empty()).then_some(title);
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    #[must_use]
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn height(mut self, height: Option<usize>) -> Self {
        self.height = height;
        self
    }

    /// Border plus padding columns.
    fn chrome(&self) -> usize {
        2 + self.padding.horizontal()
    }

    fn title_width(&self) -> usize {
        // " title " plus one border cell on each side
        self.title.as_deref().map_or(0, |t| display_width(t) + 4)
    }

    fn top_line(&self, inner: usize) -> SegmentLine {
        let g = self.border.glyphs();
        let mut line = vec![Segment::styled(g.top_left.to_string(), self.border_style)];
        let mut remaining = inner;

        if let Some(title) = self.title.as_deref() {
            if inner >= 4 {
                let text = truncate_to_width(title, inner - 3);
                let used = display_width(text) + 3;
                line.push(Segment::styled(format!("{} ", g.top), self.border_style));
                line.push(Segment::styled(text, self.title_style));
                line.push(Segment::styled(" ", self.border_style));
                remaining = inner - used;
            }
        }

        line.push(Segment::styled(
            g.top.to_string().repeat(remaining),
            self.border_style,
        ));
        line.push(Segment::styled(g.top_right.to_string(), self.border_style));
        line
    }

    fn bottom_line(&self, inner: usize) -> SegmentLine {
        let g = self.border.glyphs();
        vec![Segment::styled(
            format!(
                "{}{}{}",
                g.bottom_left,
                g.bottom.to_string().repeat(inner),
                g.bottom_right
            ),
            self.border_style,
        )]
    }
}

impl Renderable for Panel {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        if let Some(w) = self.width {
            let w = w.min(max_width);
            return Measurement::new(w, w);
        }
        if self.expand {
            return Measurement::new(max_width, max_width);
        }
        let chrome = self.chrome();
        let content = self.child.measure(options, max_width.saturating_sub(chrome));
        let mut m = content.grow(chrome);
        m.max = m.max.max(self.title_width());
        m.clamp(max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let chrome = self.chrome();
        let outer = if let Some(w) = self.width {
            w.min(max_width)
        } else if self.expand {
            max_width
        } else {
            self.measure(options, max_width).max
        };
        let outer = outer.max(2).min(max_width.max(2));
        let content_width = outer.saturating_sub(chrome);
        let inner = outer - 2;

        let mut content = self.child.render_lines(options, content_width);
        if let Some(h) = self.height {
            let rows = h.saturating_sub(2 + self.padding.vertical());
            content.resize_with(rows, SegmentLine::new);
        }

        let body = pad_lines(content, content_width, self.padding, Style::NONE);
        let g = self.border.glyphs();
        let side = Segment::styled(g.side.to_string(), self.border_style);

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(self.top_line(inner));
        for row in body {
            let mut line = SegmentLine::with_capacity(row.len() + 2);
            line.push(side.clone());
            line.extend(row);
            line.push(side.clone());
            lines.push(line);
        }
        lines.push(self.bottom_line(inner));
        join_lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::cell_count;
    use crate::widgets::Text;
    use std::sync::Arc;

    fn opts() -> RenderOptions {
        RenderOptions::new(80, 24)
    }

    fn plain(lines: &[SegmentLine]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.iter().map(Segment::as_text).collect())
            .collect()
    }

    #[test]
    fn test_hugs_content() {
        let panel = Panel::new(Arc::new(Text::new("hi")));
        let lines = panel.render_lines(&opts(), 80);
        assert_eq!(plain(&lines), vec!["┌────┐", "│ hi │", "└────┘"]);
    }

    #[test]
    fn test_title_in_top_border() {
        let panel = Panel::new(Arc::new(Text::new("content here")))
            .title("Info")
            .border(BoxBorder::Rounded);
        let lines = panel.render_lines(&opts(), 80);
        assert_eq!(plain(&lines)[0], format!("╭─ Info {}╮", "─".repeat(7)));
        assert!(lines.iter().all(|l| cell_count(l) == 16));
    }

    #[test]
    fn test_expand_and_fixed_width() {
        let panel = Panel::new(Arc::new(Text::new("x"))).expand(true);
        assert!(panel.render_lines(&opts(), 20).iter().all(|l| cell_count(l) == 20));

        let panel = Panel::new(Arc::new(Text::new("x"))).width(Some(8));
        assert!(panel.render_lines(&opts(), 20).iter().all(|l| cell_count(l) == 8));
        assert_eq!(panel.measure(&opts(), 20), Measurement::new(8, 8));
    }

    #[test]
    fn test_fixed_height_pads_and_cuts() {
        let panel = Panel::new(Arc::new(Text::new("a\nb\nc"))).height(Some(4));
        let lines = panel.render_lines(&opts(), 80);
        assert_eq!(lines.len(), 4);

        let panel = Panel::new(Arc::new(Text::new("a"))).height(Some(5));
        assert_eq!(panel.render_lines(&opts(), 80).len(), 5);
    }

    #[test]
    fn test_borderless_keeps_geometry() {
        let panel = Panel::new(Arc::new(Text::new("q")))
            .border(BoxBorder::None)
            .padding(Padding::new(2, 0, 0, 0));
        let lines = panel.render_lines(&opts(), 80);
        assert_eq!(lines.len(), 3);
        assert_eq!(plain(&lines)[1], "   q ");
    }

    #[test]
    fn test_narrow_width_does_not_panic() {
        let panel = Panel::new(Arc::new(Text::new("hello"))).title("Title");
        for width in 0..8 {
            let _ = panel.render(&opts(), width);
        }
    }
}
