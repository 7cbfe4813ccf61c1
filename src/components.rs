//! Component marker types understood by the built-in translators.
//!
//! Authoring frameworks emit [`Node::component`](crate::Node::component)
//! markers for these types. Each marker documents the attribute keys it
//! reads and the value type expected under each key; values of any other
//! type are ignored in favor of the default.

/// Bordered box around its children.
///
/// | key | type | default |
/// |---|---|---|
/// | [`TITLE`](Self::TITLE) | `String` | none |
/// | [`TITLE_STYLE`](Self::TITLE_STYLE) | [`Style`](crate::Style) | plain |
/// | [`BORDER`](Self::BORDER) | [`BoxBorder`](crate::widgets::BoxBorder) | `Square` |
/// | [`BORDER_STYLE`](Self::BORDER_STYLE) | [`Style`](crate::Style) | plain |
/// | [`PADDING`](Self::PADDING) | [`Padding`](crate::widgets::Padding) | `(1, 0, 1, 0)` |
/// | [`EXPAND`](Self::EXPAND) | `bool` | `false` |
/// | [`WIDTH`](Self::WIDTH) / [`HEIGHT`](Self::HEIGHT) | `usize` | none |
#[derive(Debug)]
pub struct Panel;

impl Panel {
    pub const TITLE: &'static str = "title";
    pub const TITLE_STYLE: &'static str = "title_style";
    pub const BORDER: &'static str = "border";
    pub const BORDER_STYLE: &'static str = "border_style";
    pub const PADDING: &'static str = "padding";
    pub const EXPAND: &'static str = "expand";
    pub const WIDTH: &'static str = "width";
    pub const HEIGHT: &'static str = "height";
}

/// Children stacked vertically. Reads [`EXPAND`](Self::EXPAND) (`bool`).
#[derive(Debug)]
pub struct Rows;

impl Rows {
    pub const EXPAND: &'static str = "expand";
}

/// Children side by side.
///
/// Reads [`EXPAND`](Self::EXPAND) (`bool`) and [`GAP`](Self::GAP) (`usize`,
/// default 1).
#[derive(Debug)]
pub struct Columns;

impl Columns {
    pub const EXPAND: &'static str = "expand";
    pub const GAP: &'static str = "gap";
}

/// Children laid out row-major in a fixed number of columns.
///
/// Reads [`COLUMNS`](Self::COLUMNS) (`usize`, default 2),
/// [`EXPAND`](Self::EXPAND) (`bool`) and [`WIDTH`](Self::WIDTH) (`usize`).
/// A short last row is padded with empty cells.
#[derive(Debug)]
pub struct Grid;

impl Grid {
    pub const COLUMNS: &'static str = "columns";
    pub const EXPAND: &'static str = "expand";
    pub const WIDTH: &'static str = "width";
}

/// Whitespace around its children. Reads [`PADDING`](Self::PADDING)
/// ([`Padding`](crate::widgets::Padding), default none).
#[derive(Debug)]
pub struct Padder;

impl Padder {
    pub const PADDING: &'static str = "padding";
}

/// Positions its children inside a box.
///
/// Reads [`HORIZONTAL`](Self::HORIZONTAL)
/// ([`HorizontalAlignment`](crate::widgets::HorizontalAlignment), default
/// left), [`VERTICAL`](Self::VERTICAL)
/// ([`VerticalAlignment`](crate::widgets::VerticalAlignment), default none),
/// [`WIDTH`](Self::WIDTH) and [`HEIGHT`](Self::HEIGHT) (`usize`).
#[derive(Debug)]
pub struct Align;

impl Align {
    pub const HORIZONTAL: &'static str = "horizontal";
    pub const VERTICAL: &'static str = "vertical";
    pub const WIDTH: &'static str = "width";
    pub const HEIGHT: &'static str = "height";
}
