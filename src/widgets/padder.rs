//! Whitespace around a child.

use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable};
use crate::style::Style;
use crate::text::{Segment, SegmentLine, SegmentShape, fit_line, join_lines};

/// Cells of padding on each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Padding {
    #[must_use]
    pub const fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on every side.
    #[must_use]
    pub const fn uniform(n: usize) -> Self {
        Self::new(n, n, n, n)
    }

    /// Left plus right.
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

/// Pad a block of lines to `inner_width` and surround it with `padding`.
pub(crate) fn pad_lines(
    lines: Vec<SegmentLine>,
    inner_width: usize,
    padding: Padding,
    style: Style,
) -> Vec<SegmentLine> {
    let full = inner_width + padding.horizontal();
    let blank = || vec![Segment::padding(full, style)];

    let mut out = Vec::with_capacity(lines.len() + padding.vertical());
    out.extend((0..padding.top).map(|_| blank()));
    for line in lines {
        let mut padded = SegmentLine::with_capacity(line.len() + 2);
        if padding.left > 0 {
            padded.push(Segment::padding(padding.left, style));
        }
        padded.extend(fit_line(&line, inner_width, style));
        if padding.right > 0 {
            padded.push(Segment::padding(padding.right, style));
        }
        out.push(padded);
    }
    out.extend((0..padding.bottom).map(|_| blank()));
    out
}

/// A child surrounded by blank cells.
#[derive(Clone)]
pub struct Padder {
    child: SharedRenderable,
    padding: Padding,
    expand: bool,
}

impl Padder {
    #[must_use]
    pub fn new(child: SharedRenderable, padding: Padding) -> Self {
        Self {
            child,
            padding,
            expand: false,
        }
    }

    /// Fill the available width instead of hugging the child.
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
}

impl Renderable for Padder {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        if self.expand {
            return Measurement::new(max_width, max_width);
        }
        let h = self.padding.horizontal();
        self.child
            .measure(options, max_width.saturating_sub(h))
            .grow(h)
            .clamp(max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let available = max_width.saturating_sub(self.padding.horizontal());
        let lines = self.child.render_lines(options, available);
        let inner = if self.expand {
            available
        } else {
            let natural = self.child.measure(options, available).max;
            natural.max(SegmentShape::calculate(&lines).width).min(available)
        };
        join_lines(pad_lines(lines, inner, self.padding, Style::NONE))
    }
}
