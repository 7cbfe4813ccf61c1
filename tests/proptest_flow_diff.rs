//! Property-based tests for block/inline flow and the frame differ.
//!
//! The differ property replays random frame sequences through a live
//! display into `vt100` and requires the screen to show exactly the last
//! frame, whatever came before it.

use flowterm::ansi::ColorMode;
use flowterm::flow::{BlockInline, FlowItem};
use flowterm::renderer::{LiveDisplay, LiveDisplayOptions, OverflowPolicy, render_line_diff};
use flowterm::text::{Segment, SegmentLine, join_lines};
use flowterm::widgets::Text;
use flowterm::{Measurement, RenderOptions, Renderable, Size};
use proptest::prelude::*;
use std::sync::Arc;

const COLS: u16 = 40;
const ROWS: u16 = 20;

// ============================================================================
// Strategies
// ============================================================================

/// One line as a list of short chunks; each chunk becomes its own segment.
fn line_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,4}", 1..=4)
}

/// A frame that fits the virtual terminal without scrolling.
fn frame_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(line_strategy(), 1..=8)
}

fn flow_strategy() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), "[a-z]{1,5}"), 0..=10)
}

// ============================================================================
// Helpers
// ============================================================================

struct Frame(Vec<SegmentLine>);

impl Frame {
    fn new(lines: &[Vec<String>]) -> Self {
        Self(
            lines
                .iter()
                .map(|chunks| chunks.iter().map(|c| Segment::text(c.as_str())).collect())
                .collect(),
        )
    }

    fn expected(lines: &[Vec<String>]) -> Vec<String> {
        let mut rows: Vec<String> = lines
            .iter()
            .map(|chunks| chunks.concat().trim_end().to_string())
            .collect();
        while rows.last().is_some_and(String::is_empty) {
            rows.pop();
        }
        rows
    }
}

impl Renderable for Frame {
    fn measure(&self, _options: &RenderOptions, max_width: usize) -> Measurement {
        Measurement::new(0, max_width)
    }

    fn render(&self, _options: &RenderOptions, _max_width: usize) -> Vec<Segment> {
        join_lines(self.0.clone())
    }
}

fn visible_rows(parser: &vt100::Parser) -> Vec<String> {
    let mut rows: Vec<String> = parser
        .screen()
        .rows(0, COLS)
        .map(|r| r.trim_end().to_string())
        .collect();
    while rows.last().is_some_and(String::is_empty) {
        rows.pop();
    }
    rows
}

fn unit_count(items: &[(bool, String)]) -> usize {
    let mut count = 0;
    let mut in_run = false;
    for (is_block, _) in items {
        if *is_block {
            count += 1;
            in_run = false;
        } else if !in_run {
            count += 1;
            in_run = true;
        }
    }
    count
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn screen_matches_last_frame(frames in prop::collection::vec(frame_strategy(), 1..=6)) {
        let options = LiveDisplayOptions {
            alternate_screen: false,
            auto_clear: false,
            overflow: OverflowPolicy::Flag,
            color_mode: ColorMode::NoColor,
        };
        let size = Size::new(usize::from(COLS), usize::from(ROWS));
        let mut display = LiveDisplay::new(Vec::new(), size, options).unwrap();

        for frame in &frames {
            let stats = display.present(Arc::new(Frame::new(frame))).unwrap();
            prop_assert!(!stats.full_clear);
        }

        let mut parser = vt100::Parser::new(ROWS, COLS, 0);
        parser.process(display.get_ref());
        let last = frames.last().unwrap();
        prop_assert_eq!(visible_rows(&parser), Frame::expected(last));
        prop_assert_eq!(display.cursor_row(), last.len());
        prop_assert_eq!(parser.screen().cursor_position(), (last.len() as u16, 0));
    }

    #[test]
    fn line_diff_of_identical_lines_is_empty(line in line_strategy()) {
        let segments: SegmentLine = line.iter().map(|c| Segment::text(c.as_str())).collect();
        prop_assert!(render_line_diff(&segments, &segments).is_empty());
    }

    #[test]
    fn flow_line_count_matches_units(items in flow_strategy()) {
        let flow = BlockInline::new(
            items
                .iter()
                .map(|(is_block, word)| {
                    let text = Arc::new(Text::new(word.as_str()));
                    if *is_block { FlowItem::block(text) } else { FlowItem::inline(text) }
                })
                .collect(),
        );
        let lines = flow.render_lines(&RenderOptions::new(200, 24), 200);
        prop_assert_eq!(lines.len(), unit_count(&items));

        let text: String = lines
            .iter()
            .flatten()
            .map(Segment::as_text)
            .collect();
        let words: String = items.iter().map(|(_, w)| w.as_str()).collect();
        prop_assert_eq!(text, words);
    }
}
