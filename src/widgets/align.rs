//! Horizontal and vertical placement of a child inside a box.

use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable};
use crate::style::Style;
use crate::text::{Segment, SegmentLine, fit_line, join_lines};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Split `extra` cells into (before, after) for an alignment.
fn split_extra(extra: usize, center: bool, end: bool) -> (usize, usize) {
    if end {
        (extra, 0)
    } else if center {
        (extra / 2, extra - extra / 2)
    } else {
        (0, extra)
    }
}

/// A child positioned within a box.
///
/// The box is `width` wide (default: all available width). Vertical
/// alignment needs a height; without an explicit one the viewport height is
/// used.
#[derive(Clone)]
pub struct Align {
    child: SharedRenderable,
    horizontal: HorizontalAlignment,
    vertical: Option<VerticalAlignment>,
    width: Option<usize>,
    height: Option<usize>,
}

impl Align {
    #[must_use]
    pub fn new(child: SharedRenderable, horizontal: HorizontalAlignment) -> Self {
        Self {
            child,
            horizontal,
            vertical: None,
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub fn center(child: SharedRenderable) -> Self {
        Self::new(child, HorizontalAlignment::Center)
    }

    #[must_use]
    pub fn vertical(mut self, vertical: Option<VerticalAlignment>) -> Self {
        self.vertical = vertical;
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

    fn box_width(&self, max_width: usize) -> usize {
        self.width.map_or(max_width, |w| w.min(max_width))
    }
}

impl Renderable for Align {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        let width = self.box_width(max_width);
        let child = self.child.measure(options, width);
        Measurement::new(child.min, width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let width = self.box_width(max_width);
        let child_width = self.child.measure(options, width).max.min(width);
        let lines = self.child.render_lines(options, child_width);

        let (left, right) = split_extra(
            width - child_width,
            self.horizontal == HorizontalAlignment::Center,
            self.horizontal == HorizontalAlignment::Right,
        );
        let mut out: Vec<SegmentLine> = lines
            .into_iter()
            .map(|line| {
                let mut aligned = SegmentLine::with_capacity(line.len() + 2);
                if left > 0 {
                    aligned.push(Segment::padding(left, Style::NONE));
                }
                aligned.extend(fit_line(&line, child_width, Style::NONE));
                if right > 0 {
                    aligned.push(Segment::padding(right, Style::NONE));
                }
                aligned
            })
            .collect();

        let height = self
            .height
            .or_else(|| self.vertical.map(|_| options.size.height));
        if let Some(height) = height {
            let blank = || vec![Segment::padding(width, Style::NONE)];
            if out.len() > height {
                out.truncate(height);
            } else {
                let vertical = self.vertical.unwrap_or_default();
                let (top, bottom) = split_extra(
                    height - out.len(),
                    vertical == VerticalAlignment::Middle,
                    vertical == VerticalAlignment::Bottom,
                );
                let mut framed = Vec::with_capacity(height);
                framed.extend((0..top).map(|_| blank()));
                framed.append(&mut out);
                framed.extend((0..bottom).map(|_| blank()));
                out = framed;
            }
        }

        join_lines(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_horizontal_alignment() {
        let text: SharedRenderable = Arc::new(Text::new("ab"));
        let center = Align::center(text.clone());
        assert_eq!(plain(&center.render_lines(&opts(), 7)), vec!["  ab   "]);

        let right = Align::new(text, HorizontalAlignment::Right);
        assert_eq!(plain(&right.render_lines(&opts(), 5)), vec!["   ab"]);
    }

    #[test]
    fn test_vertical_alignment_with_height() {
        let align = Align::new(Arc::new(Text::new("x")), HorizontalAlignment::Left)
            .vertical(Some(VerticalAlignment::Bottom))
            .width(Some(3))
            .height(Some(3));
        let lines = align.render_lines(&opts(), 80);
        assert_eq!(plain(&lines), vec!["   ", "   ", "x  "]);
    }

    #[test]
    fn test_vertical_without_height_uses_viewport() {
        let align = Align::center(Arc::new(Text::new("x")))
            .vertical(Some(VerticalAlignment::Middle));
        let lines = align.render_lines(&RenderOptions::new(10, 5), 10);
        assert_eq!(lines.len(), 5);
        assert_eq!(plain(&lines)[2].trim(), "x");
    }

    #[test]
    fn test_height_cuts_tall_content() {
        let align = Align::new(Arc::new(Text::new("a\nb\nc")), HorizontalAlignment::Left)
            .height(Some(2));
        assert_eq!(align.render_lines(&opts(), 80).len(), 2);
    }
}
