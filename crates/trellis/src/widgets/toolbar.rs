use geom::{Expanse, Point};

use crate::{
    component::{Component, EventOutcome, FocusState},
    error::Result,
    event::key::{Key, KeyCode},
    render::{Attr, Canvas},
    viewport::{Bounds, Viewport},
};

/// Rows of icon glyphs. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid(pub Vec<Vec<char>>);

impl Bounds for Grid {
    fn bounds(&self, p: Point) -> Point {
        match self.0.get(p.y as usize) {
            Some(row) => Point::new(
                row.len().saturating_sub(1) as u32,
                self.0.len() as u32 - 1,
            ),
            None => Point::zero(),
        }
    }
}

/// A grid of single-glyph icons with an arrow-key selection.
///
/// ```text
///  @ # $ % ^ &
///  A B C D E F
/// ```
#[derive(Debug, Clone)]
pub struct Toolbar {
    /// Icons and selection. The window covers the whole grid.
    view: Viewport<Grid>,
    /// Focus flag.
    focus: FocusState,
}

impl Toolbar {
    /// Construct a toolbar with one row of icons per string.
    pub fn new<'a>(rows: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let grid = Grid(rows.into_iter().map(|r| r.chars().collect()).collect());
        let w = grid.0.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let h = grid.0.len().max(1);
        Ok(Self {
            view: Viewport::new((w as u32, h as u32), grid)?,
            focus: FocusState::default(),
        })
    }

    /// The selected icon, if the grid is not empty.
    pub fn selected(&self) -> Option<char> {
        let p = self.view.point();
        self.view
            .bounds()
            .0
            .get(p.y as usize)
            .and_then(|row| row.get(p.x as usize))
            .copied()
    }

    /// Grid position of the selection as (column, row).
    pub fn position(&self) -> Point {
        self.view.point()
    }
}

impl Component for Toolbar {
    fn size(&self) -> Expanse {
        let grid = &self.view.bounds().0;
        let n = grid.iter().map(Vec::len).max().unwrap_or(0) as u32;
        if grid.is_empty() {
            Expanse::default()
        } else {
            Expanse::new(n * 2 + 1, grid.len() as u32)
        }
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let sel = self.view.point();
        let base = if self.is_focused() {
            Attr::Focused
        } else {
            Attr::Normal
        };
        for (y, row) in self.view.bounds().0.iter().enumerate() {
            let y = y as u32;
            for (x, c) in row.iter().enumerate() {
                let x = x as u32;
                let attr = if Point::new(x, y) == sel {
                    Attr::Selected
                } else {
                    base
                };
                canvas.put((x * 2, y), ' ', base);
                canvas.put((x * 2 + 1, y), *c, attr);
            }
        }
    }

    fn on_key(&mut self, key: Key) -> EventOutcome {
        match key.key {
            KeyCode::Up => self.view.cursor_up(),
            KeyCode::Down => self.view.cursor_down(),
            KeyCode::Left => self.view.cursor_left(),
            KeyCode::Right => self.view.cursor_right(),
            _ => return EventOutcome::Ignore,
        }
        EventOutcome::Handle
    }

    fn wants_capture(&self) -> bool {
        true
    }

    fn focus(&mut self) {
        self.focus.focus();
    }

    fn unfocus(&mut self) {
        self.focus.unfocus();
    }

    fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TermBuf;

    #[test]
    fn ragged_rows() -> Result<()> {
        let mut t = Toolbar::new(["@#$%", "AB"])?;
        assert_eq!(t.size(), Expanse::new(9, 2));
        for _ in 0..3 {
            t.on_key(KeyCode::Right.into());
        }
        assert_eq!(t.selected(), Some('%'));
        t.on_key(KeyCode::Right.into());
        assert_eq!(t.selected(), Some('%'));
        t.on_key(KeyCode::Down.into());
        assert_eq!(t.selected(), Some('B'));
        assert_eq!(t.position(), Point::new(1, 1));
        t.on_key(KeyCode::Down.into());
        t.on_key(KeyCode::Left.into());
        assert_eq!(t.selected(), Some('A'));

        let mut buf = TermBuf::new((9, 2));
        t.render(&mut buf.full_canvas());
        assert_eq!(buf.lines(), vec![" @ # $ % ", " A B     "]);
        assert!(buf.get((1, 1)).is_some_and(|c| c.attr == Attr::Selected));
        Ok(())
    }

    #[test]
    fn empty_toolbar() -> Result<()> {
        let mut t = Toolbar::new([])?;
        t.on_key(KeyCode::Right.into());
        assert_eq!(t.selected(), None);
        assert_eq!(t.size(), Expanse::default());
        Ok(())
    }
}
