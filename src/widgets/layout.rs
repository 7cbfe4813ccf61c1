//! Column width distribution shared by columns and grids.

use crate::renderable::{Measurement, RenderOptions, SharedRenderable};
use crate::style::Style;
use crate::text::{Segment, SegmentLine, fit_line};

/// Distribute `available` cells across columns.
///
/// Columns get their natural (max) width when everything fits; `expand`
/// hands out the leftover evenly. Otherwise columns shrink toward their min
/// width in proportion to how much they can give, and below that the space
/// is split evenly.
#[must_use]
pub fn column_widths(measurements: &[Measurement], available: usize, expand: bool) -> Vec<usize> {
    let n = measurements.len();
    if n == 0 {
        return Vec::new();
    }

    let natural: usize = measurements.iter().map(|m| m.max).sum();
    if natural <= available {
        let mut widths: Vec<usize> = measurements.iter().map(|m| m.max).collect();
        if expand {
            spread(&mut widths, available - natural);
        }
        return widths;
    }

    let minimum: usize = measurements.iter().map(|m| m.min).sum();
    if minimum >= available {
        let mut widths = vec![available / n; n];
        spread(&mut widths, available % n);
        return widths;
    }

    // Shrink proportionally between min and max
    let room = available - minimum;
    let slack = natural - minimum;
    let mut widths: Vec<usize> = measurements
        .iter()
        .map(|m| m.min + (m.max - m.min) * room / slack)
        .collect();
    let used: usize = widths.iter().sum();
    spread(&mut widths, available - used);
    widths
}

/// Add `extra` cells one at a time, left to right.
fn spread(widths: &mut [usize], extra: usize) {
    let n = widths.len();
    for i in 0..extra {
        widths[i % n] += 1;
    }
}

/// Render cells side by side at fixed widths, separated by `gap` spaces.
///
/// Cells shorter than the tallest are padded with blank lines.
#[must_use]
pub fn render_row(
    cells: &[SharedRenderable],
    widths: &[usize],
    gap: usize,
    options: &RenderOptions,
) -> Vec<SegmentLine> {
    let rendered: Vec<Vec<SegmentLine>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| cell.render_lines(options, w))
        .collect();
    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|row| {
            let mut line = SegmentLine::new();
            for (col, (lines, &w)) in rendered.iter().zip(widths).enumerate() {
                if col > 0 && gap > 0 {
                    line.push(Segment::padding(gap, Style::NONE));
                }
                let cell_line = lines.get(row).map_or(&[][..], Vec::as_slice);
                line.extend(fit_line(cell_line, w, Style::NONE));
            }
            line
        })
        .collect()
}
