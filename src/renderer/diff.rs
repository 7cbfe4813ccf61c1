//! Line-level frame diffing.
//!
//! [`FrameDiffer`] remembers the lines it drew last pass. Each new pass
//! renders the wrapped renderable again, finds the first line that changed,
//! moves the cursor back up to it and repaints from there down, skipping the
//! unchanged prefix of each line with a cursor-forward.
//!
//! The cursor is assumed to sit at column 0 of the row just below the
//! previous frame, which is where every pass leaves it.

use crate::ansi::sequences;
use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable};
use crate::text::{Segment, SegmentLine, SegmentShape, cell_count, split_lines};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Summary of one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// The screen was erased and the frame redrawn from the top.
    pub full_clear: bool,
    /// First line repainted this pass.
    pub render_from_line: usize,
    /// Cursor-up steps taken to reach `render_from_line`.
    pub lines_moved_up: usize,
    /// Lines whose content was rewritten.
    pub changed_lines: usize,
    /// Shape of the previous frame.
    pub previous_shape: SegmentShape,
    /// Shape of this frame.
    pub shape: SegmentShape,
    /// The frame is taller or wider than the viewport.
    pub overflow: bool,
}

/// Output of one render pass: the control and text stream to write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FramePass {
    pub segments: Vec<Segment>,
    pub stats: FrameStats,
}

struct FrameState {
    renderable: SharedRenderable,
    lines: Vec<SegmentLine>,
    shape: SegmentShape,
    force_clear: bool,
}

/// Incremental renderer for one output stream.
///
/// All state lives behind one lock, so passes from different threads are
/// serialized and never interleave their output.
pub struct FrameDiffer {
    state: Mutex<FrameState>,
    overflow: AtomicBool,
}

impl FrameDiffer {
    #[must_use]
    pub fn new(renderable: SharedRenderable) -> Self {
        Self {
            state: Mutex::new(FrameState {
                renderable,
                lines: Vec::new(),
                shape: SegmentShape::default(),
                force_clear: false,
            }),
            overflow: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FrameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap in the renderable for the next pass. The previous frame is kept,
    /// so the next pass diffs against what is on screen.
    pub fn set_renderable(&self, renderable: SharedRenderable) {
        self.lock().renderable = renderable;
    }

    /// The renderable drawn by the next pass.
    #[must_use]
    pub fn renderable(&self) -> SharedRenderable {
        self.lock().renderable.clone()
    }

    /// Force the next pass to clear the screen and redraw everything.
    pub fn invalidate(&self) {
        self.lock().force_clear = true;
    }

    /// Whether the last pass overflowed the viewport.
    #[must_use]
    pub fn did_overflow(&self) -> bool {
        self.overflow.load(Ordering::Acquire)
    }

    /// Shape of the last frame drawn.
    #[must_use]
    pub fn previous_shape(&self) -> SegmentShape {
        self.lock().shape
    }

    /// Run one pass at the viewport width.
    #[must_use]
    pub fn render_pass(&self, options: &RenderOptions) -> FramePass {
        self.pass(options, options.size.width)
    }

    fn pass(&self, options: &RenderOptions, width: usize) -> FramePass {
        let mut state = self.lock();
        let mut out = vec![Segment::control(sequences::CURSOR_HIDE)];

        let lines = split_lines(state.renderable.render(options, width));
        let shape = SegmentShape::calculate(&lines);
        let overflow = shape.height > options.size.height || shape.width > options.size.width;
        self.overflow.store(overflow, Ordering::Release);

        let previous_shape = state.shape;
        let previous = std::mem::take(&mut state.lines);
        let mut render_from_line = first_changed_line(&lines, &previous);
        let mut lines_moved_up = previous_shape.height - render_from_line;

        let full_clear = state.force_clear || lines_moved_up > options.cursor_row;
        if full_clear {
            tracing::info!(
                previous_height = previous_shape.height,
                cursor_row = options.cursor_row,
                forced = state.force_clear,
                "clearing screen for full redraw"
            );
            out.push(Segment::control(sequences::clear_and_home()));
            render_from_line = 0;
            lines_moved_up = 0;
            state.force_clear = false;
        } else {
            for i in 0..lines_moved_up {
                out.push(Segment::control(sequences::cursor_up(1)));
                let old_index = previous_shape.height - 1 - i;
                if old_index >= lines.len() {
                    out.push(Segment::control(sequences::CLEAR_LINE));
                }
            }
        }

        let mut changed_lines = 0;
        for (i, line) in lines.iter().enumerate().skip(render_from_line) {
            let before = match previous.get(i) {
                Some(prev) if !full_clear => prev.as_slice(),
                _ => &[],
            };
            let diff = render_line_diff(line, before);
            if !diff.is_empty() {
                changed_lines += 1;
                out.extend(diff);
            }
            out.push(Segment::LineBreak);
        }

        out.push(Segment::control(sequences::CURSOR_SHOW));

        let stats = FrameStats {
            full_clear,
            render_from_line,
            lines_moved_up,
            changed_lines,
            previous_shape,
            shape,
            overflow,
        };
        tracing::debug!(
            height = shape.height,
            width = shape.width,
            render_from_line,
            changed_lines,
            overflow,
            "frame pass"
        );

        state.lines = lines;
        state.shape = shape;
        FramePass {
            segments: out,
            stats,
        }
    }
}

/// Index of the first line to repaint.
///
/// Lines are compared segment by segment (text and style). Past the end of
/// the shorter frame nothing is compared: new lines below the old frame are
/// always drawn, and old lines below the new frame are erased while moving
/// up.
fn first_changed_line(lines: &[SegmentLine], previous: &[SegmentLine]) -> usize {
    lines
        .iter()
        .zip(previous)
        .position(|(new, old)| new != old)
        .unwrap_or_else(|| lines.len().min(previous.len()))
}

/// Segments that turn `previous` into `line` on a row where the cursor
/// starts at column 0.
///
/// The shared prefix is skipped with a cursor-forward, everything from the
/// first differing segment on is written, and an erase-to-end-of-line
/// follows when the new line is narrower. Identical lines yield nothing.
#[must_use]
pub fn render_line_diff(line: &[Segment], previous: &[Segment]) -> Vec<Segment> {
    let common = line
        .iter()
        .zip(previous)
        .take_while(|(new, old)| new == old)
        .count();
    if common == line.len() && common == previous.len() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(line.len() - common + 2);
    let skip = cell_count(&line[..common]);
    if skip > 0 {
        out.push(Segment::control(sequences::cursor_forward(skip)));
    }
    out.extend_from_slice(&line[common..]);
    if cell_count(line) < cell_count(previous) {
        out.push(Segment::control(sequences::CLEAR_LINE_RIGHT));
    }
    out
}

impl Renderable for FrameDiffer {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        let renderable = self.renderable();
        renderable.measure(options, max_width)
    }

    /// One diff pass at `max_width`; the result is control output, not a
    /// plain frame.
    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        self.pass(options, max_width).segments
    }
}
