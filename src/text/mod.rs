//! Styled segments and line wrapping.
//!
//! Everything that reaches the terminal is a stream of [`Segment`]s: text
//! runs carrying a [`Style`](crate::Style), zero-width control sequences, and
//! explicit line breaks. Renderables produce segment streams; the frame
//! differ splits them into [`SegmentLine`]s and compares line by line.
//!
//! # Examples
//!
//! ```
//! use flowterm::text::{Segment, SegmentShape, split_lines};
//!
//! let lines = split_lines(vec![
//!     Segment::text("hello"),
//!     Segment::LineBreak,
//!     Segment::text("wide 漢字"),
//! ]);
//! assert_eq!(SegmentShape::calculate(&lines), SegmentShape::new(9, 2));
//! ```

mod segment;
mod wrap;

pub use segment::{
    Segment, SegmentLine, SegmentShape, cell_count, crop_line, fit_line, join_lines, split_lines,
};
pub use wrap::{longest_word, wrap_segments};
