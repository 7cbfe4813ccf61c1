//! Live terminal output driven by the frame differ.
//!
//! This module provides [`LiveDisplay`], which owns one [`FrameDiffer`] and
//! an [`AnsiWriter`] and turns each presented renderable into the minimal
//! terminal update.
//!
//! # Cursor tracking
//!
//! The differ only moves the cursor relative to where the previous pass left
//! it, and needs to know how many rows there are above the cursor before it
//! moves up. The display tracks that row itself: after each pass the cursor
//! sits just below the frame, clamped to the last screen row because line
//! advances at the bottom scroll the screen instead of moving further down.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use flowterm::renderer::{LiveDisplay, LiveDisplayOptions};
//! use flowterm::widgets::Text;
//! use flowterm::Size;
//!
//! let options = LiveDisplayOptions {
//!     alternate_screen: false,
//!     ..LiveDisplayOptions::default()
//! };
//! let mut display = LiveDisplay::new(Vec::new(), Size::new(40, 10), options).unwrap();
//! display.present(Arc::new(Text::new("Loading..."))).unwrap();
//! let stats = display.present(Arc::new(Text::new("Loaded"))).unwrap();
//! assert_eq!(stats.render_from_line, 0);
//! assert_eq!(display.cursor_row(), 1);
//! ```

mod diff;

pub use diff::{FrameDiffer, FramePass, FrameStats, render_line_diff};

use crate::ansi::{AnsiWriter, ColorMode, sequences};
use crate::error::Result;
use crate::renderable::{Measurement, RenderOptions, Renderable, SharedRenderable, Size};
use crate::text::{Segment, join_lines};
use std::io::{self, Stdout, Write};
use std::sync::Arc;

/// What to do when a frame does not fit the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Write the whole frame and log a warning. Lines scrolled off the top
    /// can no longer be repainted, so later passes fall back to full clears.
    #[default]
    Flag,
    /// Drop lines that would not fit below the top of the screen.
    Crop,
}

/// Live display configuration.
#[derive(Clone, Copy, Debug)]
pub struct LiveDisplayOptions {
    /// Draw on the alternate screen buffer.
    pub alternate_screen: bool,
    /// Clear the screen before the first frame.
    pub auto_clear: bool,
    pub overflow: OverflowPolicy,
    pub color_mode: ColorMode,
}

impl Default for LiveDisplayOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            auto_clear: false,
            overflow: OverflowPolicy::Flag,
            color_mode: ColorMode::detect(),
        }
    }
}

/// Keeps the first `height` lines of a renderable.
struct Cropped {
    inner: SharedRenderable,
    height: usize,
}

impl Renderable for Cropped {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        self.inner.measure(options, max_width)
    }

    fn render(&self, options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let mut lines = self.inner.render_lines(options, max_width);
        lines.truncate(self.height);
        join_lines(lines)
    }
}

/// Incrementally updated region of a terminal.
///
/// Restores the cursor and leaves the alternate screen when dropped.
pub struct LiveDisplay<W: Write> {
    writer: AnsiWriter<W>,
    differ: Option<FrameDiffer>,
    options: LiveDisplayOptions,
    size: Size,
    cursor_row: usize,
    restored: bool,
}

impl LiveDisplay<Stdout> {
    /// Live display on stdout, sized from the terminal (80x24 if unknown).
    pub fn stdout(options: LiveDisplayOptions) -> Result<Self> {
        let size = crate::terminal::terminal_size()
            .map(|(w, h)| Size::new(usize::from(w), usize::from(h)))
            .unwrap_or_else(|err| {
                tracing::debug!(%err, "terminal size unavailable, assuming 80x24");
                Size::new(80, 24)
            });
        Self::new(io::stdout(), size, options)
    }
}

impl<W: Write> LiveDisplay<W> {
    /// Set up the terminal and wrap `writer`.
    pub fn new(writer: W, size: Size, options: LiveDisplayOptions) -> Result<Self> {
        let mut display = Self {
            writer: AnsiWriter::with_color_mode(writer, options.color_mode),
            differ: None,
            options,
            size,
            cursor_row: 0,
            restored: false,
        };
        if options.alternate_screen {
            display.writer.write_str(sequences::ALT_SCREEN_ON);
        }
        if options.alternate_screen || options.auto_clear {
            display.writer.write_str(&sequences::clear_and_home());
        }
        display.writer.flush()?;
        Ok(display)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Rows between the top of the screen and the cursor.
    #[must_use]
    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    #[must_use]
    pub fn options(&self) -> &LiveDisplayOptions {
        &self.options
    }

    /// Whether the last frame overflowed the viewport.
    #[must_use]
    pub fn did_overflow(&self) -> bool {
        self.differ.as_ref().is_some_and(FrameDiffer::did_overflow)
    }

    /// The underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    fn apply_policy(&self, renderable: SharedRenderable) -> SharedRenderable {
        match self.options.overflow {
            OverflowPolicy::Flag => renderable,
            OverflowPolicy::Crop => Arc::new(Cropped {
                inner: renderable,
                height: self.size.height.saturating_sub(1),
            }),
        }
    }

    /// Draw `renderable`, repainting only what changed since the last frame.
    pub fn present(&mut self, renderable: SharedRenderable) -> Result<FrameStats> {
        let renderable = self.apply_policy(renderable);
        match &self.differ {
            Some(differ) => differ.set_renderable(renderable),
            None => self.differ = Some(FrameDiffer::new(renderable)),
        }
        self.refresh()
    }

    /// Run another pass over the current renderable. Without one this does
    /// nothing and reports an empty pass.
    pub fn refresh(&mut self) -> Result<FrameStats> {
        let Some(differ) = &self.differ else {
            return Ok(FrameStats::default());
        };

        let options = RenderOptions {
            size: self.size,
            cursor_row: self.cursor_row,
        };
        let pass = differ.render_pass(&options);
        let stats = pass.stats;

        if stats.overflow && self.options.overflow == OverflowPolicy::Flag {
            tracing::warn!(
                height = stats.shape.height,
                width = stats.shape.width,
                rows = self.size.height,
                columns = self.size.width,
                "frame overflows the viewport"
            );
        }

        self.writer.write_segments(&pass.segments);
        self.writer.flush()?;

        let base = self.cursor_row - stats.lines_moved_up;
        let drawn = stats.shape.height - stats.render_from_line;
        let base = if stats.full_clear { 0 } else { base };
        self.cursor_row = (base + drawn).min(self.size.height.saturating_sub(1));
        Ok(stats)
    }

    /// Adopt a new viewport size. The next pass redraws from a cleared
    /// screen, since the terminal may have reflowed the old frame.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.cursor_row = self.cursor_row.min(size.height.saturating_sub(1));
        if let Some(differ) = &self.differ {
            differ.invalidate();
        }
    }

    /// Show the cursor, reset attributes and leave the alternate screen.
    /// Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        self.writer.reset();
        self.writer.write_str(sequences::CURSOR_SHOW);
        if self.options.alternate_screen {
            self.writer.write_str(sequences::ALT_SCREEN_OFF);
        }
        self.writer.flush()
    }
}

impl<W: Write> Drop for LiveDisplay<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
