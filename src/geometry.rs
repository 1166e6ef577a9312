//! Positioned rectangles and the windows built on top of them.
//!
//! Every navigation decision is made on these two plain types: a [`Rect`]
//! with derived edges and midpoints, and a [`Window`] which adds the
//! identity and focus state taken from the layout tree.

use serde::Deserialize;

/// An axis-aligned rectangle in screen coordinates.
///
/// Deserializes directly from the `rect` object of a layout tree node
/// (`{"x", "y", "width", "height"}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "width")]
    pub w: i32,
    #[serde(rename = "height")]
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Y coordinate of the midpoint; the alignment axis for horizontal moves.
    pub fn vertical_middle(&self) -> i32 {
        self.y + self.h / 2
    }

    /// X coordinate of the midpoint; the alignment axis for vertical moves.
    pub fn horizontal_middle(&self) -> i32 {
        self.x + self.w / 2
    }

    /// A rectangle with no width or no height cannot be seen or focused.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// A focusable window taken from one layout snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Container id as the window manager reports it, in decimal.
    pub id: String,
    pub rect: Rect,
    pub focused: bool,
    pub floating: bool,
}

impl Window {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            focused: false,
            floating: false,
        }
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    pub fn floating(mut self) -> Self {
        self.floating = true;
        self
    }
}

/// Index of the first focused window, if any.
pub fn focused_index(windows: &[Window]) -> Option<usize> {
    windows.iter().position(|w| w.focused)
}

/// Split `windows` into `(floating, tiled)`, preserving order.
pub fn partition_floating(windows: Vec<Window>) -> (Vec<Window>, Vec<Window>) {
    windows.into_iter().partition(|w| w.floating)
}
