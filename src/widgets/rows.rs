//! Vertical stacking.

use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable};
use crate::style::Style;
use crate::text::{Segment, fit_line, join_lines};

/// Children rendered one below another.
#[derive(Clone, Default)]
pub struct Rows {
    children: Vec<SharedRenderable>,
    expand: bool,
}

impl Rows {
    #[must_use]
    pub fn new(children: Vec<SharedRenderable>) -> Self {
        Self {
            children,
            expand: false,
        }
    }

    /// Pad every line to the full available width.
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Renderable for Rows {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        if self.expand {
            return Measurement::new(max_width, max_width);
        }
        self.children
            .iter()
            .map(|c| c.measure(options, max_width))
            .fold(Measurement::default(), Measurement::union)
            .clamp(max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let lines = self
            .children
            .iter()
            .flat_map(|c| c.render_lines(options, max_width));
        if self.expand {
            join_lines(lines.map(|l| fit_line(&l, max_width, Style::NONE)))
        } else {
            join_lines(lines)
        }
    }
}
