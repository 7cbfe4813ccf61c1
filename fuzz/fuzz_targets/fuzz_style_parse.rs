//! Fuzz target for style and color strings.
//!
//! Attribute values come straight from node trees, so parsing must never
//! panic on arbitrary input.

#![no_main]

use flowterm::{Color, Style};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = Style::parse(data);
    let _ = Color::parse(data);

    for word in data.split_whitespace().take(16) {
        if let Ok(color) = Color::parse(word) {
            let _ = color.to_256_color();
            let _ = color.to_16_color();
        }
    }
});
