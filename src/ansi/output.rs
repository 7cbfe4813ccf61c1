//! Buffered ANSI output writer with style state tracking.

use crate::ansi::{self, ColorMode};
use crate::color::Color;
use crate::style::{Style, TextAttributes};
use crate::text::Segment;
use std::io::{self, Write};

/// Buffered writer that turns segments into bytes, emitting only style deltas.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,

    color_mode: ColorMode,

    // Current SGR state for delta encoding
    current_fg: Option<Color>,
    current_bg: Option<Color>,
    current_attrs: TextAttributes,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::TrueColor)
    }

    /// Create a new ANSI writer with specified color mode.
    pub fn with_color_mode(writer: W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            color_mode,
            current_fg: None,
            current_bg: None,
            current_attrs: TextAttributes::empty(),
        }
    }

    /// Set the color output mode.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Write one segment.
    ///
    /// Text switches to the segment's style first. Controls run with all
    /// attributes reset so erase sequences never paint a background. Line
    /// breaks are written as `\r\n`.
    pub fn write_segment(&mut self, segment: &Segment) {
        match segment {
            Segment::Text { text, style } => {
                if text.is_empty() {
                    return;
                }
                self.set_style(*style);
                self.write_str(text);
            }
            Segment::Control(sequence) => {
                self.set_style(Style::NONE);
                self.write_str(sequence);
            }
            Segment::LineBreak => {
                self.set_style(Style::NONE);
                self.write_str("\r\n");
            }
        }
    }

    /// Write a sequence of segments.
    pub fn write_segments<'a>(&mut self, segments: impl IntoIterator<Item = &'a Segment>) {
        for segment in segments {
            self.write_segment(segment);
        }
    }

    /// Switch to `style`, writing only what changed.
    pub fn set_style(&mut self, style: Style) {
        self.set_attributes(style.attributes);
        self.set_fg(style.fg);
        self.set_bg(style.bg);
    }

    /// Set foreground color if different from current (`None` restores default).
    pub fn set_fg(&mut self, color: Option<Color>) {
        if self.current_fg == color {
            return;
        }
        match color {
            Some(c) => {
                let _ = ansi::write_fg_color(&mut self.buffer, c, self.color_mode);
            }
            None => self.write_str("\x1b[39m"),
        }
        self.current_fg = color;
    }

    /// Set background color if different from current (`None` restores default).
    pub fn set_bg(&mut self, color: Option<Color>) {
        if self.current_bg == color {
            return;
        }
        match color {
            Some(c) => {
                let _ = ansi::write_bg_color(&mut self.buffer, c, self.color_mode);
            }
            None => self.write_str("\x1b[49m"),
        }
        self.current_bg = color;
    }

    /// Set text attributes, only writing changes.
    pub fn set_attributes(&mut self, attrs: TextAttributes) {
        if self.current_attrs == attrs {
            return;
        }

        let removed = self.current_attrs - attrs;
        if !removed.is_empty() {
            let mut codes = Vec::new();
            // 22 turns off both bold and dim
            if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                codes.push("22");
            }
            for (flag, code) in [
                (TextAttributes::ITALIC, "23"),
                (TextAttributes::UNDERLINE, "24"),
                (TextAttributes::BLINK, "25"),
                (TextAttributes::INVERSE, "27"),
                (TextAttributes::HIDDEN, "28"),
                (TextAttributes::STRIKETHROUGH, "29"),
            ] {
                if removed.contains(flag) {
                    codes.push(code);
                }
            }
            self.buffer.extend_from_slice(b"\x1b[");
            self.buffer.extend_from_slice(codes.join(";").as_bytes());
            self.buffer.push(b'm');

            // 22 may have dropped an intensity flag we still want
            self.current_attrs = if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                self.current_attrs - removed - (TextAttributes::BOLD | TextAttributes::DIM)
            } else {
                self.current_attrs - removed
            };
        }

        let to_add = attrs - self.current_attrs;
        if !to_add.is_empty() {
            let _ = ansi::write_attributes(&mut self.buffer, to_add);
        }
        self.current_attrs = attrs;
    }

    /// Reset all ANSI attributes.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the underlying writer. Unflushed bytes are discarded.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Bytes written since the last flush.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer without flushing.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(writer: &AnsiWriter<Vec<u8>>) -> String {
        String::from_utf8_lossy(writer.buffer()).into_owned()
    }

    #[test]
    fn test_plain_text_has_no_escapes() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_segment(&Segment::text("Hello"));
        assert_eq!(writer.buffer(), b"Hello");
    }

    #[test]
    fn test_style_caching() {
        let mut writer = AnsiWriter::new(Vec::new());
        let red = Style::fg(Color::RED);
        writer.write_segments(&[Segment::styled("a", red), Segment::styled("b", red)]);
        assert_eq!(output(&writer), "\x1b[91mab");
    }

    #[test]
    fn test_control_resets_style_first() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_segments(&[
            Segment::styled("x", Style::bg(Color::BLUE)),
            Segment::control(ansi::CLEAR_LINE_RIGHT),
        ]);
        assert_eq!(output(&writer), "\x1b[104mx\x1b[49m\x1b[K");
    }

    #[test]
    fn test_line_break_is_crlf() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_segments(&[Segment::text("a"), Segment::LineBreak, Segment::text("b")]);
        assert_eq!(output(&writer), "a\r\nb");
    }

    #[test]
    fn test_attribute_removal() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_attributes(TextAttributes::BOLD | TextAttributes::ITALIC);
        writer.clear_buffer();
        writer.set_attributes(TextAttributes::ITALIC);
        assert_eq!(output(&writer), "\x1b[22m");

        writer.clear_buffer();
        writer.set_attributes(TextAttributes::DIM);
        // Italic off, then dim on
        assert_eq!(output(&writer), "\x1b[23m\x1b[2m");
    }

    #[test]
    fn test_flush_moves_bytes_to_writer() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_str("abc");
        writer.flush().unwrap();
        assert!(writer.buffer().is_empty());
        assert_eq!(writer.into_inner(), b"abc");
    }
}
