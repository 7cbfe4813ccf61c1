//! Terminal colors and their parsing.
//!
//! [`Color`] covers the three ways a terminal can be told what to paint:
//! one of the 16 standard palette entries, an index into the 256-color
//! palette, or a 24-bit RGB triple. `None` at the style level means "use the
//! terminal default", so there is no `Default` variant here.
//!
//! # Examples
//!
//! ```
//! use flowterm::Color;
//!
//! assert_eq!(Color::parse("red").unwrap(), Color::Ansi(9));
//! assert_eq!(Color::parse("#1a1a2e").unwrap(), Color::Rgb(0x1a, 0x1a, 0x2e));
//! assert_eq!(Color::parse("color(208)").unwrap(), Color::Indexed(208));
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// A terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Standard palette entry 0-15 (8-15 are the bright variants).
    Ansi(u8),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

/// Standard 16-color names, in palette order.
const ANSI_NAMES: [&str; 16] = [
    "black", "maroon", "green", "olive", "navy", "purple", "teal", "silver", "grey", "red", "lime",
    "yellow", "blue", "fuchsia", "aqua", "white",
];

/// Approximate RGB values of the 16 standard colors.
#[rustfmt::skip]
const ANSI_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),       (128, 0, 0),   (0, 128, 0),   (128, 128, 0),
    (0, 0, 128),     (128, 0, 128), (0, 128, 128), (192, 192, 192),
    (128, 128, 128), (255, 0, 0),   (0, 255, 0),   (255, 255, 0),
    (0, 0, 255),     (255, 0, 255), (0, 255, 255), (255, 255, 255),
];

const CUBE_VALUES: [u8; 6] = [0, 95, 135, 175, 215, 255];

impl Color {
    pub const BLACK: Self = Self::Ansi(0);
    pub const RED: Self = Self::Ansi(9);
    pub const GREEN: Self = Self::Ansi(10);
    pub const YELLOW: Self = Self::Ansi(11);
    pub const BLUE: Self = Self::Ansi(12);
    pub const MAGENTA: Self = Self::Ansi(13);
    pub const CYAN: Self = Self::Ansi(14);
    pub const WHITE: Self = Self::Ansi(15);
    pub const GREY: Self = Self::Ansi(8);

    /// Parse a color specification.
    ///
    /// Accepted forms: a standard name (`red`, `navy`, `grey`, with the
    /// aliases `magenta`, `cyan`, `gray`, `darkred`...), `greyNN` / `grayNN`
    /// for a 0-100 grey level, `#rgb`, `#rrggbb`, `rgb(r,g,b)` and
    /// `color(n)` for a 256-palette index. Matching is case-insensitive.
    pub fn parse(spec: &str) -> Result<Self> {
        let lower = spec.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return Err(Error::InvalidColor(spec.to_string()));
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(|| Error::InvalidColor(spec.to_string()));
        }

        if let Some(args) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if let [r, g, b] = parts.as_slice() {
                if let (Ok(r), Ok(g), Ok(b)) = (r.parse(), g.parse(), b.parse()) {
                    return Ok(Self::Rgb(r, g, b));
                }
            }
            return Err(Error::InvalidColor(spec.to_string()));
        }

        if let Some(index) = lower.strip_prefix("color(").and_then(|s| s.strip_suffix(')')) {
            return index
                .trim()
                .parse()
                .map(Self::Indexed)
                .map_err(|_| Error::InvalidColor(spec.to_string()));
        }

        if let Some(color) = Self::from_name(&lower) {
            return Ok(color);
        }

        for prefix in ["grey", "gray"] {
            if let Some(level) = lower.strip_prefix(prefix) {
                if let Ok(level @ 0..=100) = level.parse::<u16>() {
                    let v = (level * 255 / 100) as u8;
                    return Ok(Self::Rgb(v, v, v));
                }
            }
        }

        Err(Error::InvalidColor(spec.to_string()))
    }

    fn from_name(name: &str) -> Option<Self> {
        if let Some(idx) = ANSI_NAMES.iter().position(|n| *n == name) {
            return Some(Self::Ansi(idx as u8));
        }
        let idx = match name {
            "darkred" => 1,
            "darkgreen" => 2,
            "darkyellow" => 3,
            "darkblue" => 4,
            "darkmagenta" => 5,
            "darkcyan" => 6,
            "gray" => 8,
            "magenta" => 13,
            "cyan" => 14,
            _ => return None,
        };
        Some(Self::Ansi(idx))
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Some(Self::Rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Approximate RGB value of this color.
    #[must_use]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Rgb(r, g, b) => (r, g, b),
            Self::Ansi(idx) => ANSI_RGB[usize::from(idx & 0x0F)],
            Self::Indexed(idx) => match idx {
                0..=15 => ANSI_RGB[usize::from(idx)],
                16..=231 => {
                    let i = idx - 16;
                    (
                        CUBE_VALUES[usize::from(i / 36)],
                        CUBE_VALUES[usize::from((i / 6) % 6)],
                        CUBE_VALUES[usize::from(i % 6)],
                    )
                }
                232..=255 => {
                    let v = 8 + (idx - 232) * 10;
                    (v, v, v)
                }
            },
        }
    }

    /// Nearest 256-palette index.
    ///
    /// Near-grey colors use the grayscale ramp (232-255), everything else the
    /// 6x6x6 cube (16-231).
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        match self {
            Self::Ansi(idx) => idx & 0x0F,
            Self::Indexed(idx) => idx,
            Self::Rgb(r, g, b) => {
                let gray = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
                let near = |c: u8| (i16::from(c) - i16::from(gray)).abs() < 10;
                if near(r) && near(g) && near(b) {
                    let step = (u16::from(gray) * 24 / 256) as u8;
                    return 232 + step.min(23);
                }
                16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
            }
        }
    }

    /// Nearest standard palette index (0-15).
    #[must_use]
    pub fn to_16_color(self) -> u8 {
        if let Self::Ansi(idx) = self {
            return idx & 0x0F;
        }
        let (r, g, b) = self.to_rgb();
        let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
        ANSI_RGB
            .iter()
            .enumerate()
            .min_by_key(|(_, (pr, pg, pb))| {
                let (dr, dg, db) = (r - i32::from(*pr), g - i32::from(*pg), b - i32::from(*pb));
                dr * dr + dg * dg + db * db
            })
            .map_or(0, |(i, _)| i as u8)
    }
}

/// Boundaries sit at the midpoints of the cube values.
fn cube_index(v: u8) -> u8 {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        115..=154 => 2,
        155..=194 => 3,
        195..=234 => 4,
        _ => 5,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi(idx) => f.write_str(ANSI_NAMES[usize::from(idx & 0x0F)]),
            Self::Indexed(idx) => write!(f, "color({idx})"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(Color::parse("red").unwrap(), Color::RED);
        assert_eq!(Color::parse("Navy").unwrap(), Color::Ansi(4));
        assert_eq!(Color::parse("cyan").unwrap(), Color::CYAN);
        assert_eq!(Color::parse("gray").unwrap(), Color::GREY);
    }

    #[test]
    fn test_parse_hex_and_functions() {
        assert_eq!(Color::parse("#00F").unwrap(), Color::Rgb(0, 0, 255));
        assert_eq!(Color::parse("#102030").unwrap(), Color::Rgb(16, 32, 48));
        assert_eq!(Color::parse("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
        assert_eq!(Color::parse("color(42)").unwrap(), Color::Indexed(42));
        assert_eq!(Color::parse("grey70").unwrap(), Color::Rgb(178, 178, 178));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#12").is_err());
        assert!(Color::parse("rgb(1,2)").is_err());
        assert!(Color::parse("color(300)").is_err());
        assert!(Color::parse("grey101").is_err());
        assert!(Color::parse("chartreuse9").is_err());
    }

    #[test]
    fn test_palette_conversions() {
        assert_eq!(Color::Rgb(255, 0, 0).to_256_color(), 196);
        assert_eq!(Color::Rgb(128, 128, 128).to_256_color(), 244);
        assert_eq!(Color::Rgb(250, 5, 5).to_16_color(), 9);
        assert_eq!(Color::Indexed(232).to_rgb(), (8, 8, 8));
        assert_eq!(Color::Ansi(12).to_256_color(), 12);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [Color::RED, Color::Indexed(99), Color::Rgb(1, 2, 3)] {
            assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
        }
    }
}
