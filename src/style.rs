//! Text styling with attributes and colors.
//!
//! - [`TextAttributes`]: bitflags for bold, italic, underline, etc.
//! - [`Style`]: foreground, background and attributes, parsed from the
//!   style strings node attributes carry (`"bold red on blue"`).
//!
//! # Examples
//!
//! ```
//! use flowterm::{Color, Style, TextAttributes};
//!
//! let title = Style::fg(Color::WHITE).with_bold();
//! let parsed = Style::parse("bold white").unwrap();
//! assert_eq!(title, parsed);
//!
//! // Overlay wins for colors, attributes are OR-ed
//! let combined = Style::bold().merge(Style::fg(Color::RED));
//! assert!(combined.attributes.contains(TextAttributes::BOLD));
//! assert_eq!(combined.fg, Some(Color::RED));
//! ```

use crate::color::Color;
use crate::error::{Error, Result};
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

impl TextAttributes {
    /// Look up a decoration keyword as used in style strings.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        let attr = match word {
            "bold" => Self::BOLD,
            "dim" => Self::DIM,
            "italic" => Self::ITALIC,
            "underline" => Self::UNDERLINE,
            "blink" | "slowblink" | "rapidblink" => Self::BLINK,
            "invert" | "inverse" | "reverse" => Self::INVERSE,
            "conceal" | "hidden" => Self::HIDDEN,
            "strikethrough" | "strike" => Self::STRIKETHROUGH,
            _ => return None,
        };
        Some(attr)
    }
}

/// Complete text style.
///
/// `None` for a color means "terminal default" so styled text respects the
/// user's theme. Styles are small `Copy` values; equality is exact and is
/// what the frame differ uses to decide whether a segment changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color (None = terminal default).
    pub fg: Option<Color>,
    /// Background color (None = terminal default).
    pub bg: Option<Color>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style carrying only the given attributes.
    #[must_use]
    pub const fn with_attributes(attributes: TextAttributes) -> Self {
        Self {
            fg: None,
            bg: None,
            attributes,
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self::with_attributes(TextAttributes::BOLD)
    }

    /// Create an italic style.
    #[must_use]
    pub const fn italic() -> Self {
        Self::with_attributes(TextAttributes::ITALIC)
    }

    /// Create an underline style.
    #[must_use]
    pub const fn underline() -> Self {
        Self::with_attributes(TextAttributes::UNDERLINE)
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with bold added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    /// Return a new style with italic added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::ITALIC),
            ..self
        }
    }

    /// Check if this style sets nothing.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::NONE
    }

    /// Overlay `other` on top of `self`.
    ///
    /// Colors set in `other` replace ours, attributes are combined.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }

    /// Parse a style string such as `"bold red on blue"` or `"italic #ff8800"`.
    ///
    /// Words are decorations or colors; a color after `on` is the background.
    /// `default` resets the color slot it occupies. An empty string parses to
    /// [`Style::NONE`].
    pub fn parse(spec: &str) -> Result<Self> {
        let mut style = Self::NONE;
        let mut background_next = false;

        for word in spec.split_whitespace() {
            let lower = word.to_ascii_lowercase();
            if lower == "on" {
                if background_next {
                    return Err(Error::InvalidStyle(spec.to_string()));
                }
                background_next = true;
                continue;
            }

            if !background_next {
                if let Some(attr) = TextAttributes::from_keyword(&lower) {
                    style.attributes |= attr;
                    continue;
                }
            }

            let color = if lower == "default" {
                None
            } else {
                Some(Color::parse(&lower).map_err(|_| Error::InvalidStyle(spec.to_string()))?)
            };

            if background_next {
                style.bg = color;
                background_next = false;
            } else {
                style.fg = color;
            }
        }

        if background_next {
            // Dangling "on" with no color
            return Err(Error::InvalidStyle(spec.to_string()));
        }

        Ok(style)
    }
}
