//! Cursor and scroll offset over ragged content.
//!
//! A `Viewport` is a fixed-size window onto content whose extent varies per
//! row. The content's shape is given by a `Bounds` implementation that maps an
//! absolute content coordinate to the largest valid `(x, y)` for that row.
//! Bounds are inclusive. All movement is clamped: no request can leave the
//! cursor outside the window or the absolute point outside the bounds.

use std::fmt;

use geom::{Expanse, Point};

use crate::error::{Error, Result};

/// The shape of scrollable content.
pub trait Bounds {
    /// The maximum valid coordinate for the row containing `p`. Must be total:
    /// coordinates past the end of the content return `(0, 0)`.
    fn bounds(&self, p: Point) -> Point;
}

impl<F> Bounds for F
where
    F: Fn(Point) -> Point,
{
    fn bounds(&self, p: Point) -> Point {
        self(p)
    }
}

/// Reposition one axis so that `abs` is visible in a window of `window`
/// cells starting at `offset`. Returns the new offset and cursor.
fn settle(offset: u32, abs: u32, window: u32) -> (u32, u32) {
    if abs < offset {
        (abs, 0)
    } else if abs - offset >= window {
        (abs - (window - 1), window - 1)
    } else {
        (offset, abs - offset)
    }
}

/// A window with a cursor over content of shape `B`.
#[derive(Debug, Clone)]
pub struct Viewport<B> {
    /// Window size, at least 1x1.
    size: Expanse,
    /// Content coordinate of the window's top-left cell.
    offset: Point,
    /// Cursor position relative to the window.
    cursor: Point,
    /// Content shape.
    bounds: B,
}

impl<B: Bounds> Viewport<B> {
    /// Construct a viewport at the origin. The window must be at least 1x1.
    pub fn new(size: impl Into<Expanse>, bounds: B) -> Result<Self> {
        let size = size.into();
        if size.is_empty() {
            return Err(Error::Geometry(format!("empty viewport window {size:?}")));
        }
        Ok(Self {
            size,
            offset: Point::zero(),
            cursor: Point::zero(),
            bounds,
        })
    }

    /// The content shape.
    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    /// Mutable access to the content shape. Call `reclamp` after changing the
    /// content.
    pub fn bounds_mut(&mut self) -> &mut B {
        &mut self.bounds
    }

    /// Content coordinate of the window's top-left cell.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Cursor position within the window.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Absolute content coordinate of the cursor.
    pub fn point(&self) -> Point {
        self.cursor + self.offset
    }

    /// Window size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Bounds for the row the cursor is on.
    fn limit(&self) -> Point {
        self.bounds.bounds(self.point())
    }

    /// Move cursor and offset back to the origin.
    pub fn reset(&mut self) {
        self.offset = Point::zero();
        self.cursor = Point::zero();
    }

    /// Change the window size, keeping the absolute point where possible.
    pub fn resize(&mut self, size: impl Into<Expanse>) -> Result<()> {
        let size = size.into();
        if size.is_empty() {
            return Err(Error::Geometry(format!("empty viewport window {size:?}")));
        }
        self.size = size;
        self.reclamp();
        Ok(())
    }

    /// Pull the absolute point back inside the bounds and the cursor back
    /// inside the window. The vertical axis is settled first, so the
    /// horizontal clamp uses the bounds of the row the cursor ends up on.
    pub fn reclamp(&mut self) {
        let b = self.limit();
        // A zero bound below the first row means the row is gone; clamp to
        // the content's current last row instead.
        let last = if b == Point::zero() && self.point().y > 0 {
            self.bounds.bounds(Point::zero()).y
        } else {
            b.y
        };
        let y = self.point().y.min(last);
        (self.offset.y, self.cursor.y) = settle(self.offset.y, y, self.size.h);

        let b = self.limit();
        let x = self.point().x.min(b.x);
        (self.offset.x, self.cursor.x) = settle(self.offset.x, x, self.size.w);
    }

    /// Move one column right, scrolling at the window's edge.
    pub fn cursor_right(&mut self) {
        if self.point().x >= self.limit().x {
            return;
        }
        if self.cursor.x < self.size.w - 1 {
            self.cursor.x += 1;
        } else {
            self.offset.x += 1;
        }
        self.reclamp();
    }

    /// Move one row down, scrolling at the window's edge.
    pub fn cursor_down(&mut self) {
        if self.point().y >= self.limit().y {
            return;
        }
        if self.cursor.y < self.size.h - 1 {
            self.cursor.y += 1;
        } else {
            self.offset.y += 1;
        }
        self.reclamp();
    }

    /// Move one column left, scrolling at the window's edge.
    pub fn cursor_left(&mut self) {
        if self.cursor.x > 0 {
            self.cursor.x -= 1;
        } else if self.offset.x > 0 {
            self.offset.x -= 1;
        }
        self.reclamp();
    }

    /// Move one row up, scrolling at the window's edge.
    pub fn cursor_up(&mut self) {
        if self.cursor.y > 0 {
            self.cursor.y -= 1;
        } else if self.offset.y > 0 {
            self.offset.y -= 1;
        }
        self.reclamp();
    }

    /// Scroll down one window height. The offset never passes the last full
    /// page of content.
    pub fn page_down(&mut self) {
        let last = (self.limit().y + 1).saturating_sub(self.size.h);
        self.offset.y = (self.offset.y + self.size.h).min(last).max(self.offset.y);
        self.reclamp();
    }

    /// Scroll up one window height, stopping at the top.
    pub fn page_up(&mut self) {
        self.offset.y = self.offset.y.saturating_sub(self.size.h);
        self.reclamp();
    }

    /// Jump to the start of the current row.
    pub fn cursor_home(&mut self) {
        self.cursor.x = 0;
        self.offset.x = 0;
        self.reclamp();
    }

    /// Jump to the start of the current row.
    pub fn start_x(&mut self) {
        self.cursor_home();
    }

    /// Jump to the end of the current row.
    pub fn end_x(&mut self) {
        let b = self.limit();
        self.set_cursor_x(b.x);
    }

    /// Jump to the first row.
    pub fn start_y(&mut self) {
        self.cursor.y = 0;
        self.offset.y = 0;
        self.reclamp();
    }

    /// Jump to the last row.
    pub fn end_y(&mut self) {
        let b = self.limit();
        self.set_cursor_y(b.y);
    }

    /// Move the cursor to absolute column `x` on the current row, scrolling as
    /// needed. Columns past the row's bound are clamped.
    pub fn set_cursor_x(&mut self, x: u32) {
        let x = x.min(self.limit().x);
        (self.offset.x, self.cursor.x) = settle(self.offset.x, x, self.size.w);
        self.reclamp();
    }

    /// Move the cursor to absolute row `y`, scrolling as needed. Rows past the
    /// content are clamped.
    pub fn set_cursor_y(&mut self, y: u32) {
        let y = y.min(self.limit().y);
        (self.offset.y, self.cursor.y) = settle(self.offset.y, y, self.size.h);
        self.reclamp();
    }
}

impl<B> fmt::Display for Viewport<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor{}; offset{}", self.cursor, self.offset)
    }
}
