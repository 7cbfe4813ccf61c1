//! Terminal primitives implementing [`Renderable`](crate::Renderable).
//!
//! These are the concrete widgets the built-in translators build from node
//! attributes: text, vertical and horizontal stacks, grids, padding, bordered
//! panels, alignment boxes and blank space.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use flowterm::widgets::{BoxBorder, Panel, Text};
//! use flowterm::{RenderOptions, Renderable};
//!
//! let panel = Panel::new(Arc::new(Text::new("hi"))).border(BoxBorder::Ascii);
//! let lines = panel.render_lines(&RenderOptions::new(80, 24), 80);
//! assert_eq!(lines.len(), 3);
//! ```

mod align;
mod columns;
mod layout;
pub mod markup;
mod padder;
mod panel;
mod rows;
mod spacer;
mod text;

pub use align::{Align, HorizontalAlignment, VerticalAlignment};
pub use columns::{Columns, Grid};
pub use layout::column_widths;
pub use markup::{escape_markup, parse_markup, remove_markup};
pub use padder::{Padder, Padding};
pub use panel::{BoxBorder, Panel};
pub use rows::Rows;
pub use spacer::{Newline, Spacer};
pub use text::Text;
