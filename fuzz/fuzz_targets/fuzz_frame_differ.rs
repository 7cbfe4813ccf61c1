//! Fuzz target for the frame differ.
//!
//! Random frame sequences at random viewport sizes and cursor rows must
//! never panic, and repeating a frame must not rewrite any text.

#![no_main]

use arbitrary::Arbitrary;
use flowterm::renderer::FrameDiffer;
use flowterm::widgets::Text;
use flowterm::RenderOptions;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
struct Step {
    text: String,
    width: u8,
    height: u8,
    cursor_row: u8,
    invalidate: bool,
}

fuzz_target!(|steps: Vec<Step>| {
    let differ = FrameDiffer::new(Arc::new(Text::empty()));
    for step in steps.iter().take(32) {
        if step.invalidate {
            differ.invalidate();
        }
        differ.set_renderable(Arc::new(Text::new(step.text.as_str())));
        let options = RenderOptions::new(usize::from(step.width), usize::from(step.height))
            .with_cursor_row(usize::from(step.cursor_row));
        let _ = differ.render_pass(&options);

        let repeat = differ.render_pass(&options);
        if !repeat.stats.full_clear {
            assert_eq!(repeat.stats.changed_lines, 0);
        }
    }
});
