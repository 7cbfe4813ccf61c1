//! Display width calculation for terminal rendering.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the global width method used by `display_width` helpers.
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// Display width of a string in terminal cells (global method).
///
/// This is the cell width segments contribute to a line.
#[must_use]
pub fn display_width(s: &str) -> usize {
    if s.bytes().all(|b| (0x20..0x7f).contains(&b)) {
        return s.len();
    }
    display_width_with_method(s, width_method())
}

/// Display width of a single character (global method).
#[inline]
#[must_use]
pub fn display_width_char(c: char) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' {
        return 0;
    }
    match width_method() {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Display width of a string using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}
