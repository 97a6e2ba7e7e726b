//! Cell buffers, clipped canvases and intrinsic-size composition of a layout
//! tree.

use geom::{Expanse, Point, Rect};
use unicode_width::UnicodeWidthChar;

use crate::{
    error::Result,
    tree::{GroupId, GroupKind, LayoutTree},
};

/// Semantic cell attributes. Backends decide what each looks like.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Plain content.
    #[default]
    Normal,
    /// Content of a focused component.
    Focused,
    /// A selected item inside a component.
    Selected,
    /// The text cursor.
    Cursor,
}

/// A terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Glyph.
    pub ch: char,
    /// Attribute applied to the cell.
    pub attr: Attr,
    /// True when this cell continues a wide glyph from the previous column.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: Attr::Normal,
            continuation: false,
        }
    }
}

/// A 2D buffer of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermBuf {
    /// Buffer size in cells.
    size: Expanse,
    /// Row-major cell storage.
    cells: Vec<Cell>,
}

impl TermBuf {
    /// Construct a blank buffer.
    pub fn new(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell::default(); size.area() as usize],
        }
    }

    /// Buffer size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// The buffer as a rectangle at the origin.
    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Index of a point in the cell storage.
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < self.size.w && p.y < self.size.h {
            Some((p.y * self.size.w + p.x) as usize)
        } else {
            None
        }
    }

    /// The cell at a point, if it is inside the buffer.
    pub fn get(&self, p: impl Into<Point>) -> Option<&Cell> {
        self.idx(p.into()).map(|i| &self.cells[i])
    }

    /// Write a cell. Points outside the buffer are ignored.
    fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = cell;
        }
    }

    /// A canvas covering `area`, which must lie within the buffer.
    pub fn canvas(&mut self, area: Rect) -> Result<Canvas<'_>> {
        self.rect().rebase_rect(&area)?;
        Ok(Canvas { buf: self, area })
    }

    /// A canvas covering the whole buffer.
    pub fn full_canvas(&mut self) -> Canvas<'_> {
        let area = self.rect();
        Canvas { buf: self, area }
    }

    /// The text of each row, with wide-glyph continuation cells skipped.
    pub fn lines(&self) -> Vec<String> {
        if self.size.w == 0 {
            return vec![String::new(); self.size.h as usize];
        }
        self.cells
            .chunks(self.size.w as usize)
            .map(|row| {
                row.iter()
                    .filter(|c| !c.continuation)
                    .map(|c| c.ch)
                    .collect()
            })
            .collect()
    }

    /// Does any row contain `txt`?
    pub fn contains_text(&self, txt: &str) -> bool {
        self.lines().iter().any(|l| l.contains(txt))
    }
}

/// A clipped drawing surface over a region of a `TermBuf`. All coordinates
/// are relative to the region's top-left corner.
#[derive(Debug)]
pub struct Canvas<'a> {
    /// Backing buffer.
    buf: &'a mut TermBuf,
    /// Absolute region of the buffer this canvas draws to.
    area: Rect,
}

impl Canvas<'_> {
    /// Size of the drawable region.
    pub fn size(&self) -> Expanse {
        self.area.expanse()
    }

    /// Draw a single glyph. Returns the number of columns it occupies, or 0
    /// if nothing was drawn.
    pub fn put(&mut self, p: impl Into<Point>, ch: char, attr: Attr) -> u32 {
        let p = p.into();
        let width = ch.width().unwrap_or(0) as u32;
        if width == 0 || p.x + width > self.area.w || p.y >= self.area.h {
            return 0;
        }
        let abs = Point::new(self.area.tl.x + p.x, self.area.tl.y + p.y);
        self.buf.set(
            abs,
            Cell {
                ch,
                attr,
                continuation: false,
            },
        );
        for i in 1..width {
            self.buf.set(
                Point::new(abs.x + i, abs.y),
                Cell {
                    ch: ' ',
                    attr,
                    continuation: true,
                },
            );
        }
        width
    }

    /// Draw text starting at `p`, clipped at the right edge. Returns the
    /// number of columns written.
    pub fn text(&mut self, p: impl Into<Point>, txt: &str, attr: Attr) -> u32 {
        let p = p.into();
        let mut x = p.x;
        for ch in txt.chars() {
            if x >= self.area.w {
                break;
            }
            let w = self.put((x, p.y), ch, attr);
            if w == 0 && ch.width().unwrap_or(0) > 0 {
                break;
            }
            x += w;
        }
        x - p.x
    }

    /// Fill a region with a glyph.
    pub fn fill(&mut self, r: Rect, ch: char, attr: Attr) {
        for y in r.tl.y..r.tl.y + r.h {
            let mut x = r.tl.x;
            while x < r.tl.x + r.w {
                let w = self.put((x, y), ch, attr);
                x += w.max(1);
            }
        }
    }

    /// Fill a row from column `x` to the right edge.
    pub fn fill_row(&mut self, x: u32, y: u32, attr: Attr) {
        if x < self.area.w {
            self.fill(Rect::new(x, y, self.area.w - x, 1), ' ', attr);
        }
    }
}

/// Intrinsic size of a group: leaves report their component size,
/// horizontal sequences sum widths, vertical sequences sum heights.
pub fn measure(tree: &LayoutTree, id: GroupId) -> Expanse {
    match tree.kind(id) {
        GroupKind::Leaf => tree.component(id).size(),
        GroupKind::Horizontal => tree.children(id).iter().fold(Expanse::default(), |acc, c| {
            let s = measure(tree, *c);
            Expanse::new(acc.w + s.w, acc.h.max(s.h))
        }),
        GroupKind::Vertical => tree.children(id).iter().fold(Expanse::default(), |acc, c| {
            let s = measure(tree, *c);
            Expanse::new(acc.w.max(s.w), acc.h + s.h)
        }),
        GroupKind::Nil => Expanse::default(),
    }
}

/// Render the tree under `root` into `buf`, stacking sequences at their
/// children's intrinsic sizes. Anything that falls outside the buffer is
/// clipped.
pub fn compose(tree: &LayoutTree, root: GroupId, buf: &mut TermBuf) -> Result<()> {
    place(tree, root, Point::zero(), buf)
}

/// Render one group with its top-left corner at `tl`.
fn place(tree: &LayoutTree, id: GroupId, tl: Point, buf: &mut TermBuf) -> Result<()> {
    match tree.kind(id) {
        GroupKind::Leaf => {
            let size = tree.component(id).size();
            let r = Rect::new(tl.x, tl.y, size.w, size.h);
            if let Some(area) = buf.rect().intersect(&r) {
                let mut canvas = buf.canvas(area)?;
                tree.component(id).render(&mut canvas);
            }
        }
        GroupKind::Horizontal => {
            let mut x = tl.x;
            for c in tree.children(id) {
                place(tree, *c, Point::new(x, tl.y), buf)?;
                x += measure(tree, *c).w;
            }
        }
        GroupKind::Vertical => {
            let mut y = tl.y;
            for c in tree.children(id) {
                place(tree, *c, Point::new(tl.x, y), buf)?;
                y += measure(tree, *c).h;
            }
        }
        GroupKind::Nil => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::widgets::Label;

    #[test]
    fn canvas_clips() -> Result<()> {
        let mut buf = TermBuf::new((6, 2));
        {
            let mut c = buf.canvas(Rect::new(1, 0, 3, 1))?;
            assert_eq!(c.text((0, 0), "abcdef", Attr::Normal), 3);
            assert_eq!(c.put((0, 1), 'z', Attr::Normal), 0);
        }
        assert_eq!(buf.lines(), vec![" abc  ".to_string(), "      ".to_string()]);
        assert!(buf.canvas(Rect::new(5, 0, 3, 1)).is_err());
        Ok(())
    }

    #[test]
    fn wide_glyphs() {
        let mut buf = TermBuf::new((4, 1));
        let mut c = buf.full_canvas();
        assert_eq!(c.text((0, 0), "日本語", Attr::Normal), 4);
        assert_eq!(buf.lines(), vec!["日本".to_string()]);
        assert!(buf.get((1, 0)).is_some_and(|c| c.continuation));
    }

    #[test]
    fn compose_stacks() -> Result<()> {
        let mut tree = LayoutTree::new();
        let a = tree.leaf(Label::new("aa"));
        let b = tree.leaf(Label::new("b\nb"));
        let c = tree.leaf(Label::new("ccc"));
        let row = tree.horizontal([a, b]);
        let root = tree.vertical([row, c]);

        assert_eq!(measure(&tree, root), Expanse::new(3, 3));

        let mut buf = TermBuf::new((4, 3));
        compose(&tree, root, &mut buf)?;
        assert_eq!(
            buf.lines(),
            vec!["aab ".to_string(), "  b ".to_string(), "ccc ".to_string()]
        );
        Ok(())
    }
}
