//! `flowterm` - retained-mode terminal rendering for node trees
//!
//! A framework-agnostic [`Node`] tree is translated into [`Renderable`]s by a
//! priority-ordered [`TranslatorRegistry`](translate::TranslatorRegistry),
//! and a [`LiveDisplay`](renderer::LiveDisplay) repaints only the lines that
//! changed between frames.
//!
//! # Examples
//!
//! ```
//! use flowterm::translate::TranslatorRegistry;
//! use flowterm::{Node, RenderOptions, Renderable};
//!
//! let registry = TranslatorRegistry::with_defaults();
//! let tree = Node::element("div")
//!     .with_child(Node::element("p").with_child(Node::text("Hello")))
//!     .with_child(Node::element("p").with_child(Node::text("world")));
//! let lines = registry
//!     .translate(&tree)
//!     .render_lines(&RenderOptions::new(80, 24), 80);
//! assert_eq!(lines.len(), 2);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (libc terminal queries)
#![allow(clippy::cast_possible_truncation)] // Terminal dimensions fit in u16
#![allow(clippy::cast_sign_loss)] // Intentional width conversions
#![allow(clippy::cast_possible_wrap)] // Intentional width conversions
#![allow(clippy::module_name_repetitions)] // Allow widgets::Text etc
#![allow(clippy::struct_excessive_bools)] // Display options need multiple flags
#![allow(clippy::missing_errors_doc)] // Errors are io or parse failures
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Builders take owned values
#![allow(clippy::must_use_candidate)] // Builders are obviously used
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod ansi;
pub mod color;
pub mod components;
pub mod error;
pub mod flow;
pub mod node;
pub mod renderable;
pub mod renderer;
pub mod style;
pub mod terminal;
pub mod text;
pub mod translate;
pub mod unicode;
pub mod view;
pub mod widgets;

// Re-export core types at crate root
pub use color::Color;
pub use error::{Error, Result};
pub use node::{AttrLookup, AttrValue, ComponentKind, Node};
pub use renderable::{Measurement, RenderOptions, Renderable, SharedRenderable, Size};
pub use style::{Style, TextAttributes};

// Re-export ANSI types
pub use ansi::ColorMode;

// Re-export commonly used types
pub use renderer::{FrameDiffer, FrameStats, LiveDisplay, LiveDisplayOptions, OverflowPolicy};
pub use terminal::{is_tty, terminal_size};
pub use text::{Segment, SegmentLine, SegmentShape};
pub use translate::{TranslationContext, Translator, TranslatorRegistry};
pub use unicode::{WidthMethod, set_width_method};
pub use view::{RenderSnapshot, SnapshotHub, SnapshotObserver, Subscription, TreeSource, ViewRenderer};
