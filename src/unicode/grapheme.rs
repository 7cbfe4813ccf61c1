//! Grapheme-aware width cutting.
//!
//! Wrapping and cropping never split a grapheme cluster, and never let a
//! wide character straddle the cut.

use crate::unicode::width::display_width;
use unicode_segmentation::UnicodeSegmentation;

/// Iterate over extended grapheme clusters.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Split `s` so the head fits in `width` cells.
///
/// Returns `(head, tail, head_width)`. A wide grapheme that would cross the
/// boundary goes to the tail, so `head_width` may be one less than `width`.
#[must_use]
pub fn split_at_width(s: &str, width: usize) -> (&str, &str, usize) {
    let mut used = 0;
    for (idx, g) in s.grapheme_indices(true) {
        let w = display_width(g);
        if used + w > width {
            return (&s[..idx], &s[idx..], used);
        }
        used += w;
    }
    (s, "", used)
}

/// Truncate `s` to at most `width` cells.
#[must_use]
pub fn truncate_to_width(s: &str, width: usize) -> &str {
    split_at_width(s, width).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ascii() {
        assert_eq!(split_at_width("hello world", 5), ("hello", " world", 5));
        assert_eq!(split_at_width("hi", 10), ("hi", "", 2));
        assert_eq!(split_at_width("hi", 0), ("", "hi", 0));
    }

    #[test]
    fn test_wide_char_does_not_straddle() {
        let (head, tail, w) = split_at_width("a漢b", 2);
        assert_eq!(head, "a");
        assert_eq!(tail, "漢b");
        assert_eq!(w, 1);
    }

    #[test]
    fn test_combining_mark_stays_attached() {
        let s = "e\u{0301}x";
        assert_eq!(truncate_to_width(s, 1), "e\u{0301}");
    }
}
