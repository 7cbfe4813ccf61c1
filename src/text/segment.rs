//! Styled segments, the atomic unit of terminal output.

use crate::style::Style;
use crate::unicode::{display_width, split_at_width};

/// A styled text run, a zero-width control sequence, or a line break.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text painted with a style. Should not contain `\n`; use
    /// [`Segment::LineBreak`] instead ([`split_lines`] tolerates it anyway).
    Text { text: String, style: Style },
    /// Raw terminal control sequence. Occupies no cells.
    Control(String),
    /// Explicit line break between two lines.
    LineBreak,
}

impl Segment {
    /// Create an unstyled text segment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: Style::NONE,
        }
    }

    /// Create a styled text segment.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    /// Create a control segment.
    #[must_use]
    pub fn control(sequence: impl Into<String>) -> Self {
        Self::Control(sequence.into())
    }

    /// Create a run of `width` spaces.
    #[must_use]
    pub fn padding(width: usize, style: Style) -> Self {
        Self::styled(" ".repeat(width), style)
    }

    #[must_use]
    pub const fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }

    #[must_use]
    pub const fn is_control(&self) -> bool {
        matches!(self, Self::Control(_))
    }

    /// Text content; empty for controls and breaks.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
            _ => "",
        }
    }

    /// Number of terminal cells this segment occupies.
    #[must_use]
    pub fn cell_width(&self) -> usize {
        match self {
            Self::Text { text, .. } => display_width(text),
            Self::Control(_) | Self::LineBreak => 0,
        }
    }
}

/// One rendered line: segments up to (not including) a line break.
pub type SegmentLine = Vec<Segment>;

/// Cell width of a sequence of segments.
#[must_use]
pub fn cell_count(segments: &[Segment]) -> usize {
    segments.iter().map(Segment::cell_width).sum()
}

/// Split a segment stream into lines.
///
/// Breaks come from [`Segment::LineBreak`] and from `\n` inside text. A
/// trailing empty line is not reported, so `["a", LineBreak]` is one line
/// and an empty stream is zero lines.
pub fn split_lines(segments: impl IntoIterator<Item = Segment>) -> Vec<SegmentLine> {
    let mut lines = Vec::new();
    let mut line = SegmentLine::new();

    for segment in segments {
        match segment {
            Segment::LineBreak => lines.push(std::mem::take(&mut line)),
            Segment::Text { text, style } if text.contains('\n') => {
                let mut parts = text.split('\n').peekable();
                while let Some(part) = parts.next() {
                    if !part.is_empty() {
                        line.push(Segment::styled(part, style));
                    }
                    if parts.peek().is_some() {
                        lines.push(std::mem::take(&mut line));
                    }
                }
            }
            other => line.push(other),
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Join lines back into a stream with a break between each pair.
///
/// An empty last line is closed with one more break, so [`split_lines`]
/// gives back exactly the lines that went in.
pub fn join_lines(lines: impl IntoIterator<Item = SegmentLine>) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last_empty = false;
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        last_empty = line.is_empty();
        out.extend(line);
    }
    if last_empty {
        out.push(Segment::LineBreak);
    }
    out
}

/// Cut a line to at most `width` cells without splitting graphemes.
#[must_use]
pub fn crop_line(line: &[Segment], width: usize) -> SegmentLine {
    let mut out = SegmentLine::with_capacity(line.len());
    let mut remaining = width;

    for segment in line {
        match segment {
            Segment::Text { text, style } => {
                if remaining == 0 {
                    break;
                }
                let w = display_width(text);
                if w <= remaining {
                    out.push(segment.clone());
                    remaining -= w;
                } else {
                    let (head, _, used) = split_at_width(text, remaining);
                    if !head.is_empty() {
                        out.push(Segment::styled(head, *style));
                    }
                    remaining -= used;
                    break;
                }
            }
            Segment::Control(_) => out.push(segment.clone()),
            Segment::LineBreak => break,
        }
    }
    out
}

/// Crop or pad a line to exactly `width` cells. Padding uses `pad_style`.
#[must_use]
pub fn fit_line(line: &[Segment], width: usize, pad_style: Style) -> SegmentLine {
    let mut out = crop_line(line, width);
    let used = cell_count(&out);
    if used < width {
        out.push(Segment::padding(width - used, pad_style));
    }
    out
}

/// Measured extent of a block of lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentShape {
    /// Widest line in cells.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
}

impl SegmentShape {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Compute the shape of a set of lines.
    #[must_use]
    pub fn calculate(lines: &[SegmentLine]) -> Self {
        Self {
            width: lines.iter().map(|l| cell_count(l)).max().unwrap_or(0),
            height: lines.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_split_on_line_breaks() {
        let lines = split_lines(vec![
            Segment::text("a"),
            Segment::LineBreak,
            Segment::text("b"),
            Segment::text("c"),
        ]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 2);
    }

    #[test]
    fn test_split_on_embedded_newlines_keeps_style() {
        let style = Style::fg(Color::RED);
        let lines = split_lines(vec![Segment::styled("one\ntwo", style)]);
        assert_eq!(lines, vec![
            vec![Segment::styled("one", style)],
            vec![Segment::styled("two", style)],
        ]);
    }

    #[test]
    fn test_split_trailing_break_and_empty_lines() {
        assert!(split_lines(Vec::new()).is_empty());
        assert_eq!(split_lines(vec![Segment::text("a"), Segment::LineBreak]).len(), 1);
        assert_eq!(split_lines(vec![Segment::LineBreak, Segment::LineBreak]).len(), 2);
    }

    #[test]
    fn test_join_keeps_trailing_empty_line() {
        let lines = vec![vec![Segment::text("a")], vec![]];
        assert_eq!(
            join_lines(lines.clone()),
            vec![Segment::text("a"), Segment::LineBreak, Segment::LineBreak]
        );
        assert_eq!(split_lines(join_lines(lines.clone())), lines);
        assert_eq!(split_lines(join_lines(vec![vec![]])).len(), 1);
        assert!(join_lines(Vec::new()).is_empty());
    }

    #[test]
    fn test_cell_count_ignores_controls() {
        let line = vec![
            Segment::control("\x1b[2K"),
            Segment::text("ab"),
            Segment::text("漢"),
        ];
        assert_eq!(cell_count(&line), 4);
    }

    #[test]
    fn test_crop_and_fit() {
        let line = vec![Segment::text("hello"), Segment::text("world")];
        assert_eq!(cell_count(&crop_line(&line, 7)), 7);
        assert_eq!(crop_line(&line, 7)[1], Segment::text("wo"));
        let fitted = fit_line(&line[..1], 8, Style::NONE);
        assert_eq!(cell_count(&fitted), 8);
        assert_eq!(fitted[1], Segment::text("   "));
    }

    #[test]
    fn test_shape() {
        let lines = vec![vec![Segment::text("abc")], vec![], vec![Segment::text("abcdef")]];
        assert_eq!(SegmentShape::calculate(&lines), SegmentShape::new(6, 3));
        assert_eq!(SegmentShape::calculate(&[]), SegmentShape::default());
    }

    #[test]
    fn test_join_inverts_split() {
        let lines = vec![vec![Segment::text("a")], vec![Segment::text("b")]];
        let joined = join_lines(lines.clone());
        assert_eq!(joined.iter().filter(|s| s.is_line_break()).count(), 1);
        assert_eq!(split_lines(joined), lines);
    }
}
