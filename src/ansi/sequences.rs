//! Constant ANSI escape sequences and the parameterized cursor controls.
//!
//! These are the only control sequences the live display emits.

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Erase entire screen (ED 2).
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Erase scrollback (ED 3).
pub const CLEAR_SCROLLBACK: &str = "\x1b[3J";

/// Erase entire line (EL 2).
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Erase from cursor to end of line (EL 0).
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Hide cursor (DECTCEM reset).
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor (DECTCEM set).
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Next line (NEL): first column of the following row, scrolling at the bottom.
pub const NEXT_LINE: &str = "\x1bE";

/// Enable alternative screen buffer.
pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

/// Disable alternative screen buffer.
pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

/// Cursor up `n` rows (CUU). `n == 0` yields an empty string.
#[must_use]
pub fn cursor_up(n: usize) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("\x1b[{n}A")
    }
}

/// Cursor forward `n` columns (CUF). `n == 0` yields an empty string.
#[must_use]
pub fn cursor_forward(n: usize) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("\x1b[{n}C")
    }
}

/// Absolute cursor position (CUP), 1-indexed like the terminal expects.
#[must_use]
pub fn cursor_position(row: usize, col: usize) -> String {
    format!("\x1b[{row};{col}H")
}

/// Full-screen reset used for desync recovery: erase screen and scrollback,
/// then home the cursor.
#[must_use]
pub fn clear_and_home() -> String {
    let mut s = String::with_capacity(14);
    s.push_str(CLEAR_SCREEN);
    s.push_str(CLEAR_SCROLLBACK);
    s.push_str(&cursor_position(1, 1));
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_is_nel() {
        assert_eq!(NEXT_LINE, "\u{1b}E");
    }

    #[test]
    fn test_parameterized_sequences() {
        assert_eq!(cursor_up(3), "\x1b[3A");
        assert_eq!(cursor_forward(12), "\x1b[12C");
        assert_eq!(cursor_position(1, 1), "\x1b[1;1H");
        assert_eq!(cursor_up(0), "");
        assert_eq!(cursor_forward(0), "");
    }

    #[test]
    fn test_clear_and_home() {
        assert_eq!(clear_and_home(), "\x1b[2J\x1b[3J\x1b[1;1H");
    }
}
