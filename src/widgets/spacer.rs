//! Blank vertical space and explicit line breaks.

use crate::renderable::{Measurement, RenderOptions, Renderable};
use crate::text::Segment;

/// A number of empty lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spacer {
    lines: usize,
}

impl Spacer {
    #[must_use]
    pub const fn new(lines: usize) -> Self {
        Self { lines }
    }

    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }
}

impl Renderable for Spacer {
    fn measure(&self, _options: &RenderOptions, _max_width: usize) -> Measurement {
        Measurement::default()
    }

    fn render(&self, _options: &RenderOptions, _max_width: usize) -> Vec<Segment> {
        // An empty text run keeps each blank line from being dropped as trailing
        let mut out = Vec::with_capacity(self.lines * 2);
        for i in 0..self.lines {
            if i > 0 {
                out.push(Segment::LineBreak);
            }
            out.push(Segment::text(""));
        }
        out
    }
}

/// Hard line breaks. Inside an inline run this ends the current line
/// without adding a blank one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Newline {
    count: usize,
}

impl Newline {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for Newline {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Renderable for Newline {
    fn measure(&self, _options: &RenderOptions, _max_width: usize) -> Measurement {
        Measurement::default()
    }

    fn render(&self, _options: &RenderOptions, _max_width: usize) -> Vec<Segment> {
        vec![Segment::LineBreak; self.count]
    }
}
