//! Block/inline flow composition.
//!
//! [`BlockInline`] lays out a mix of block and inline children the way a
//! document does: consecutive inline items share a line, every block starts
//! on its own line, and one line break separates each block from whatever
//! came before it. No break is emitted after the last item.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use flowterm::flow::{BlockInline, FlowItem};
//! use flowterm::widgets::Text;
//! use flowterm::{RenderOptions, Renderable};
//!
//! let flow = BlockInline::new(vec![
//!     FlowItem::inline(Arc::new(Text::new("Hello, "))),
//!     FlowItem::inline(Arc::new(Text::new("world"))),
//!     FlowItem::block(Arc::new(Text::new("Next paragraph"))),
//! ]);
//! let lines = flow.render_lines(&RenderOptions::new(80, 24), 80);
//! assert_eq!(lines.len(), 2);
//! ```

use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable};
use crate::text::Segment;

/// A child tagged with its layout category.
#[derive(Clone)]
pub struct FlowItem {
    pub renderable: SharedRenderable,
    pub is_block: bool,
}

impl FlowItem {
    /// An item that occupies its own line(s).
    #[must_use]
    pub fn block(renderable: SharedRenderable) -> Self {
        Self {
            renderable,
            is_block: true,
        }
    }

    /// An item that shares a line with adjacent inline items.
    #[must_use]
    pub fn inline(renderable: SharedRenderable) -> Self {
        Self {
            renderable,
            is_block: false,
        }
    }
}

/// Mixed block/inline content rendered as one unit.
#[derive(Clone, Default)]
pub struct BlockInline {
    items: Vec<FlowItem>,
}

impl BlockInline {
    #[must_use]
    pub fn new(items: Vec<FlowItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[FlowItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Renderable for BlockInline {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        self.items
            .iter()
            .map(|item| item.renderable.measure(options, max_width))
            .fold(Measurement::default(), Measurement::union)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut emitted = false;
        let mut run_start = None;

        for (i, item) in self.items.iter().enumerate() {
            if !item.is_block {
                run_start.get_or_insert(i);
                continue;
            }
            if let Some(start) = run_start.take() {
                emit_unit(&self.items[start..i], options, max_width, &mut out, &mut emitted);
            }
            emit_unit(std::slice::from_ref(item), options, max_width, &mut out, &mut emitted);
        }
        if let Some(start) = run_start {
            emit_unit(&self.items[start..], options, max_width, &mut out, &mut emitted);
        }
        out
    }
}

/// Emit one unit (a block, or a run of inline items) starting on a fresh line.
fn emit_unit(
    unit: &[FlowItem],
    options: &RenderOptions,
    max_width: usize,
    out: &mut Vec<Segment>,
    emitted: &mut bool,
) {
    if *emitted {
        out.push(Segment::LineBreak);
    }
    for item in unit {
        out.extend(item.renderable.render(options, max_width));
    }
    *emitted = true;
}
