//! Fuzz target for console markup.
//!
//! Parsing arbitrary markup must either succeed or return an error, and
//! escaped text must always parse back to itself.

#![no_main]

use flowterm::Style;
use flowterm::widgets::{Text, escape_markup, parse_markup};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = parse_markup(data, Style::NONE);

    let escaped = escape_markup(data);
    let segments = parse_markup(&escaped, Style::NONE).expect("escaped text is valid markup");
    let plain: String = segments.iter().map(|s| s.as_text()).collect();
    assert_eq!(plain, data);

    // Fallback path renders literally instead of failing
    let _ = Text::from_markup(data, Style::bold()).plain();
});
