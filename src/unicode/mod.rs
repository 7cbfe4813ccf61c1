//! Unicode utilities for display width and grapheme-safe cutting.

mod grapheme;
mod width;

pub use grapheme::{graphemes, split_at_width, truncate_to_width};
pub use width::{
    WidthMethod, display_width, display_width_char, display_width_with_method, set_width_method,
    width_method,
};
