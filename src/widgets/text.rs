//! Styled, word-wrapped text.

use crate::renderable::{Measurement, RenderOptions, Renderable};
use crate::style::Style;
use crate::text::{Segment, SegmentShape, join_lines, longest_word, split_lines, wrap_segments};
use crate::widgets::markup::{escape_markup, parse_markup};

/// A block of styled text.
///
/// Wraps at word boundaries to the width it is rendered at; `\n` starts a
/// new line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    spans: Vec<Segment>,
    wrap: bool,
}

impl Text {
    /// Unstyled text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::styled(text, Style::NONE)
    }

    /// Text in a single style.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::styled(text, style)]
        };
        Self { spans, wrap: true }
    }

    /// Text with no content; renders as nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            spans: Vec::new(),
            wrap: true,
        }
    }

    /// Parse markup with `base` under every run.
    ///
    /// Malformed markup is not an error: it is shown literally in `base`.
    #[must_use]
    pub fn from_markup(markup: &str, base: Style) -> Self {
        match parse_markup(markup, base) {
            Ok(spans) => Self { spans, wrap: true },
            Err(err) => {
                tracing::debug!(%err, "markup rejected, rendering literally");
                Self::styled(markup, base)
            }
        }
    }

    /// Build from already styled text segments.
    #[must_use]
    pub fn from_segments(spans: Vec<Segment>) -> Self {
        Self { spans, wrap: true }
    }

    /// Append a styled span.
    #[must_use]
    pub fn with_span(mut self, text: impl Into<String>, style: Style) -> Self {
        self.spans.push(Segment::styled(text, style));
        self
    }

    /// Disable word wrapping; long lines are cropped by whoever lays this out.
    #[must_use]
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }

    /// The styled spans.
    #[must_use]
    pub fn spans(&self) -> &[Segment] {
        &self.spans
    }

    /// Plain text content.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(Segment::as_text).collect()
    }

    /// Plain content escaped for embedding in markup.
    #[must_use]
    pub fn to_markup_escaped(&self) -> String {
        escape_markup(&self.plain())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.as_text().is_empty())
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl Renderable for Text {
    fn measure(&self, _options: &RenderOptions, max_width: usize) -> Measurement {
        let max = SegmentShape::calculate(&split_lines(self.spans.clone())).width;
        let min = if self.wrap { longest_word(&self.spans) } else { max };
        Measurement::new(min, max).clamp(max_width)
    }

    fn render(&self, _options: &RenderOptions, max_width: usize) -> Vec<Segment> {
        let width = if self.wrap { max_width } else { 0 };
        join_lines(wrap_segments(self.spans.clone(), width))
    }
}
