//! Side-by-side and tabular layout.

use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable};
use crate::text::{Segment, join_lines};
use crate::widgets::layout::{column_widths, render_row};
use crate::widgets::Text;
use std::sync::Arc;

/// Children rendered next to each other on the same lines.
#[derive(Clone)]
pub struct Columns {
    children: Vec<SharedRenderable>,
    gap: usize,
    expand: bool,
}

impl Columns {
    #[must_use]
    pub fn new(children: Vec<SharedRenderable>) -> Self {
        Self {
            children,
            gap: 1,
            expand: false,
        }
    }

    /// Spaces between adjacent columns.
    #[must_use]
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Stretch columns to fill the available width.
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    fn gaps(&self) -> usize {
        self.gap * self.children.len().saturating_sub(1)
    }
}

impl Renderable for Columns {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        if self.expand {
            return Measurement::new(max_width, max_width);
        }
        let (min, max) = self
            .children
            .iter()
            .map(|c| c.measure(options, max_width))
            .fold((0, 0), |(min, max), m| (min + m.min, max + m.max));
        Measurement::new(min, max).grow(self.gaps()).clamp(max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let available = max_width.saturating_sub(self.gaps());
        let measurements: Vec<Measurement> = self
            .children
            .iter()
            .map(|c| c.measure(options, available))
            .collect();
        let widths = column_widths(&measurements, available, self.expand);
        join_lines(render_row(&self.children, &widths, self.gap, options))
    }
}

/// Children laid out row-major into a fixed number of columns.
///
/// Column widths are shared by every row. A short final row is filled with
/// empty cells.
#[derive(Clone)]
pub struct Grid {
    rows: Vec<Vec<SharedRenderable>>,
    columns: usize,
    gap: usize,
    expand: bool,
    width: Option<usize>,
}

impl Grid {
    /// Chunk `children` into rows of `columns` cells. Zero columns is treated as one.
    #[must_use]
    pub fn new(children: Vec<SharedRenderable>, columns: usize) -> Self {
        let columns = columns.max(1);
        let mut rows: Vec<Vec<SharedRenderable>> = children
            .chunks(columns)
            .map(<[SharedRenderable]>::to_vec)
            .collect();
        if let Some(last) = rows.last_mut() {
            while last.len() < columns {
                last.push(Arc::new(Text::empty()));
            }
        }
        Self {
            rows,
            columns,
            gap: 1,
            expand: false,
            width: None,
        }
    }

    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Fixed total width.
    #[must_use]
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    fn gaps(&self) -> usize {
        self.gap * (self.columns - 1)
    }

    fn column_measurements(&self, options: &RenderOptions, max_width: usize) -> Vec<Measurement> {
        let mut out = vec![Measurement::default(); self.columns];
        for row in &self.rows {
            for (slot, cell) in out.iter_mut().zip(row) {
                *slot = slot.union(cell.measure(options, max_width));
            }
        }
        out
    }

    fn outer_width(&self, max_width: usize) -> usize {
        self.width.map_or(max_width, |w| w.min(max_width))
    }
}

impl Renderable for Grid {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        let outer = self.outer_width(max_width);
        if self.expand || self.width.is_some() {
            return Measurement::new(outer, outer);
        }
        let (min, max) = self
            .column_measurements(options, outer)
            .into_iter()
            .fold((0, 0), |(min, max), m| (min + m.min, max + m.max));
        Measurement::new(min, max).grow(self.gaps()).clamp(outer)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let outer = self.outer_width(max_width);
        let available = outer.saturating_sub(self.gaps());
        let measurements = self.column_measurements(options, available);
        let expand = self.expand || self.width.is_some();
        let widths = column_widths(&measurements, available, expand);
        join_lines(
            self.rows
                .iter()
                .flat_map(|row| render_row(row, &widths, self.gap, options)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{SegmentLine, cell_count};

    fn opts() -> RenderOptions {
        RenderOptions::new(80, 24)
    }

    fn text(s: &str) -> SharedRenderable {
        Arc::new(Text::new(s))
    }

    fn plain(lines: &[SegmentLine]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.iter().map(Segment::as_text).collect())
            .collect()
    }

    #[test]
    fn test_columns_side_by_side() {
        let columns = Columns::new(vec![text("ab"), text("cd")]);
        let lines = columns.render_lines(&opts(), 80);
        assert_eq!(plain(&lines), vec!["ab cd"]);
        assert_eq!(columns.measure(&opts(), 80), Measurement::new(5, 5));
    }

    #[test]
    fn test_columns_expand_fills_width() {
        let columns = Columns::new(vec![text("ab"), text("cd")]).expand(true);
        let lines = columns.render_lines(&opts(), 11);
        assert_eq!(cell_count(&lines[0]), 11);
    }

    #[test]
    fn test_grid_chunks_rows_and_pads_last() {
        let grid = Grid::new(vec![text("a"), text("bb"), text("c")], 2);
        let lines = grid.render_lines(&opts(), 80);
        assert_eq!(plain(&lines), vec!["a bb", "c   "]);
    }

    #[test]
    fn test_grid_zero_columns_is_one() {
        let grid = Grid::new(vec![text("a"), text("b")], 0);
        assert_eq!(grid.render_lines(&opts(), 80).len(), 2);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(Vec::new(), 3);
        assert!(grid.render(&opts(), 80).is_empty());
    }
}
