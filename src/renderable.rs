//! The measure/render contract shared by every drawable object.
//!
//! A [`Renderable`] reports how wide it would like to be and produces a
//! segment stream for a given width. Widgets, the block/inline composer and
//! the frame differ all implement it, so any of them nests inside any other.

use crate::text::{Segment, SegmentLine, split_lines};
use std::sync::Arc;

/// Viewport dimensions in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Per-pass render options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Visible terminal viewport.
    pub size: Size,
    /// Rows available above the cursor, i.e. how far relative cursor-up
    /// movement can reach before hitting the top of the screen.
    pub cursor_row: usize,
}

impl RenderOptions {
    /// Options for a viewport with the cursor on the top row.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            size: Size::new(width, height),
            cursor_row: 0,
        }
    }

    #[must_use]
    pub const fn with_cursor_row(self, cursor_row: usize) -> Self {
        Self { cursor_row, ..self }
    }
}

/// Width range a renderable can occupy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    /// Narrowest width that avoids breaking words.
    pub min: usize,
    /// Width needed to render without wrapping.
    pub max: usize,
}

impl Measurement {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Clamp both ends to `max_width` and keep `min <= max`.
    #[must_use]
    pub fn clamp(self, max_width: usize) -> Self {
        let max = self.max.min(max_width);
        Self {
            min: self.min.min(max),
            max,
        }
    }

    /// Widen by a fixed amount (borders, padding).
    #[must_use]
    pub const fn grow(self, by: usize) -> Self {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Anything that can measure itself and render to segments.
///
/// Implementations must be pure with respect to their inputs: rendering the
/// same value twice with the same options yields the same segments. That is
/// what makes frame diffing meaningful.
pub trait Renderable: Send + Sync {
    /// Report the width range this renderable would occupy given `max_width`.
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement;

    /// Produce segments, with [`Segment::LineBreak`] between lines.
    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment>;

    /// Render and split into lines.
    fn render_lines(&self, options: &RenderOptions, max_width: usize) -> Vec<SegmentLine> {
        split_lines(self.render(options, max_width))
    }
}

/// Reference-counted renderable, the currency of translation.
pub type SharedRenderable = Arc<dyn Renderable>;

impl<T: Renderable + ?Sized> Renderable for Arc<T> {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        (**self).measure(options, max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        (**self).render(options, max_width)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        (**self).measure(options, max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        (**self).render(options, max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl Renderable for Fixed {
        fn measure(&self, _: &RenderOptions, max_width: usize) -> Measurement {
            Measurement::new(self.0.len(), self.0.len()).clamp(max_width)
        }

        fn render(&self, _: &RenderOptions, _: usize) -> Vec<Segment> {
            vec![Segment::text(self.0), Segment::LineBreak, Segment::text(self.0)]
        }
    }

    #[test]
    fn test_measurement_clamp_keeps_order() {
        assert_eq!(Measurement::new(10, 20).clamp(5), Measurement::new(5, 5));
        assert_eq!(Measurement::new(2, 20).clamp(8), Measurement::new(2, 8));
    }

    #[test]
    fn test_measurement_union_and_grow() {
        let m = Measurement::new(1, 9).union(Measurement::new(4, 6)).grow(2);
        assert_eq!(m, Measurement::new(6, 11));
    }

    #[test]
    fn test_shared_renderable_delegates() {
        let shared: SharedRenderable = Arc::new(Fixed("abc"));
        let opts = RenderOptions::new(80, 24);
        assert_eq!(shared.measure(&opts, 2), Measurement::new(2, 2));
        assert_eq!(shared.render_lines(&opts, 80).len(), 2);
    }
}
