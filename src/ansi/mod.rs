//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::Color;
use crate::style::{Style, TextAttributes};
use std::env;
use std::io::{self, Write};

/// Color output mode for SGR sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True color (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-color palette.
    Color256,
    /// 16-color (basic ANSI).
    Color16,
    /// No color output; attributes are still written.
    NoColor,
}

impl ColorMode {
    /// Detect the color mode from `NO_COLOR`, `COLORTERM` and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return Self::NoColor;
        }
        let term = env::var("TERM").unwrap_or_default();
        let colorterm = env::var("COLORTERM").unwrap_or_default();
        Self::from_env_values(&term, &colorterm)
    }

    fn from_env_values(term: &str, colorterm: &str) -> Self {
        if colorterm.eq_ignore_ascii_case("truecolor") || colorterm.eq_ignore_ascii_case("24bit") {
            return Self::TrueColor;
        }
        if term == "dumb" {
            return Self::NoColor;
        }
        let truecolor_terms = ["truecolor", "24bit", "kitty", "alacritty", "wezterm", "ghostty"];
        if truecolor_terms.iter().any(|t| term.contains(t)) {
            return Self::TrueColor;
        }
        if term.contains("256") {
            return Self::Color256;
        }
        if term.is_empty() {
            return Self::NoColor;
        }
        Self::Color16
    }
}

/// Write SGR sequence for a foreground color.
pub fn write_fg_color(w: &mut impl Write, color: Color, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, 30, 90, 38)
}

/// Write SGR sequence for a background color.
pub fn write_bg_color(w: &mut impl Write, color: Color, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, 40, 100, 48)
}

fn write_color(
    w: &mut impl Write,
    color: Color,
    mode: ColorMode,
    normal_base: u8,
    bright_base: u8,
    extended: u8,
) -> io::Result<()> {
    let basic = |w: &mut dyn Write, idx: u8| {
        let code = if idx < 8 {
            normal_base + idx
        } else {
            bright_base + idx - 8
        };
        write!(w, "\x1b[{code}m")
    };

    match (mode, color) {
        (ColorMode::NoColor, _) => Ok(()),
        (_, Color::Ansi(idx)) => basic(w, idx & 0x0F),
        (ColorMode::Color16, c) => basic(w, c.to_16_color()),
        (ColorMode::Color256, c) | (ColorMode::TrueColor, c @ Color::Indexed(_)) => {
            write!(w, "\x1b[{extended};5;{}m", c.to_256_color())
        }
        (ColorMode::TrueColor, c) => {
            let (r, g, b) = c.to_rgb();
            write!(w, "\x1b[{extended};2;{r};{g};{b}m")
        }
    }
}

/// Write SGR sequence for text attributes.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    const CODES: [(TextAttributes, &str); 8] = [
        (TextAttributes::BOLD, "1"),
        (TextAttributes::DIM, "2"),
        (TextAttributes::ITALIC, "3"),
        (TextAttributes::UNDERLINE, "4"),
        (TextAttributes::BLINK, "5"),
        (TextAttributes::INVERSE, "7"),
        (TextAttributes::HIDDEN, "8"),
        (TextAttributes::STRIKETHROUGH, "9"),
    ];

    if attrs.is_empty() {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    let mut first = true;
    for (flag, code) in CODES {
        if attrs.contains(flag) {
            if !first {
                w.write_all(b";")?;
            }
            w.write_all(code.as_bytes())?;
            first = false;
        }
    }
    w.write_all(b"m")
}

/// Write the full SGR state for a style (attributes, then colors).
pub fn write_style(w: &mut impl Write, style: Style, mode: ColorMode) -> io::Result<()> {
    write_attributes(w, style.attributes)?;
    if let Some(fg) = style.fg {
        write_fg_color(w, fg, mode)?;
    }
    if let Some(bg) = style.bg {
        write_bg_color(w, bg, mode)?;
    }
    Ok(())
}

/// Render a style's SGR prefix to a string.
#[must_use]
pub fn style_prefix(style: Style, mode: ColorMode) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_style(&mut buf, style, mode);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;
    use serde::Serialize;

    /// Readable form of an escape sequence for snapshots.
    #[derive(Serialize)]
    struct AnsiSequence {
        description: &'static str,
        readable: String,
    }

    impl AnsiSequence {
        fn new(description: &'static str, sequence: &str) -> Self {
            Self {
                description,
                readable: sequence.replace('\x1b', "ESC"),
            }
        }
    }

    #[test]
    fn snapshot_styles_true_color() {
        let sequences = vec![
            AnsiSequence::new("bold", &style_prefix(Style::bold(), ColorMode::TrueColor)),
            AnsiSequence::new(
                "red_on_blue",
                &style_prefix(Style::fg(Color::RED).with_bg(Color::BLUE), ColorMode::TrueColor),
            ),
            AnsiSequence::new(
                "rgb_italic",
                &style_prefix(
                    Style::fg(Color::Rgb(255, 128, 0)).with_italic(),
                    ColorMode::TrueColor,
                ),
            ),
            AnsiSequence::new(
                "indexed",
                &style_prefix(Style::fg(Color::Indexed(208)), ColorMode::TrueColor),
            ),
        ];
        assert_json_snapshot!(sequences);
    }

    #[test]
    fn test_color_mode_downgrades() {
        let orange = Color::Rgb(255, 135, 0);
        assert_eq!(style_prefix(Style::fg(orange), ColorMode::Color256), "\x1b[38;5;208m");
        assert_eq!(style_prefix(Style::fg(orange), ColorMode::Color16), "\x1b[93m");
        assert_eq!(style_prefix(Style::fg(orange).with_bold(), ColorMode::NoColor), "\x1b[1m");
        assert_eq!(style_prefix(Style::bg(Color::Ansi(1)), ColorMode::Color256), "\x1b[41m");
    }

    #[test]
    fn test_plain_style_writes_nothing() {
        assert_eq!(style_prefix(Style::NONE, ColorMode::TrueColor), "");
    }

    #[test]
    fn test_detect_from_env_values() {
        assert_eq!(ColorMode::from_env_values("xterm", "truecolor"), ColorMode::TrueColor);
        assert_eq!(ColorMode::from_env_values("xterm-256color", ""), ColorMode::Color256);
        assert_eq!(ColorMode::from_env_values("xterm", ""), ColorMode::Color16);
        assert_eq!(ColorMode::from_env_values("dumb", ""), ColorMode::NoColor);
        assert_eq!(ColorMode::from_env_values("", ""), ColorMode::NoColor);
    }
}
