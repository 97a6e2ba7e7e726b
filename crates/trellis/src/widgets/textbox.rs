use geom::{Expanse, Point};
use unicode_width::UnicodeWidthChar;

use crate::{
    component::{Component, EventOutcome, FocusState},
    error::Result,
    event::key::{Key, KeyCode},
    render::{Attr, Canvas},
    viewport::{Bounds, Viewport},
};

use super::split_lines;

/// Lines of editable text. The cursor may sit one column past the end of a
/// line, so each row's column bound is its length in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines(pub Vec<String>);

impl Default for Lines {
    fn default() -> Self {
        Self(vec![String::new()])
    }
}

impl Lines {
    /// Number of characters in row `y`.
    fn row_len(&self, y: usize) -> usize {
        self.0.get(y).map_or(0, |l| l.chars().count())
    }
}

impl Bounds for Lines {
    fn bounds(&self, p: Point) -> Point {
        match self.0.get(p.y as usize) {
            Some(l) => Point::new(l.chars().count() as u32, self.0.len() as u32 - 1),
            None => Point::zero(),
        }
    }
}

/// Byte offset of character `col` in `s`, or the end of the string.
fn byte_idx(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map_or(s.len(), |(i, _)| i)
}

/// An editable text buffer.
#[derive(Debug, Clone)]
pub struct TextBox {
    /// Text and cursor.
    view: Viewport<Lines>,
    /// Single-line fields drop newlines.
    single_line: bool,
    /// Focus flag.
    focus: FocusState,
}

impl TextBox {
    /// Construct an empty multi-line editor with a window of `size` cells.
    pub fn new(size: impl Into<Expanse>) -> Result<Self> {
        Ok(Self {
            view: Viewport::new(size, Lines::default())?,
            single_line: false,
            focus: FocusState::default(),
        })
    }

    /// Construct a single-line input field `width` cells wide.
    pub fn field(width: u32) -> Result<Self> {
        let mut t = Self::new((width, 1))?;
        t.single_line = true;
        Ok(t)
    }

    /// The text, lines joined with newlines.
    pub fn text(&self) -> String {
        self.view.bounds().0.join("\n")
    }

    /// The text split into lines.
    pub fn lines(&self) -> &[String] {
        &self.view.bounds().0
    }

    /// Replace the text and move the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        let lines = if self.single_line {
            vec![text.replace('\n', "")]
        } else {
            split_lines(text)
        };
        self.view.bounds_mut().0 = lines;
        self.view.reset();
    }

    /// The cursor's position in the text as (column, line).
    pub fn position(&self) -> Point {
        self.view.point()
    }

    /// The editor's viewport.
    pub fn viewport(&self) -> &Viewport<Lines> {
        &self.view
    }

    /// Mutable access to the viewport, for cursor movement.
    pub fn viewport_mut(&mut self) -> &mut Viewport<Lines> {
        &mut self.view
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let p = self.view.point();
        if let Some(line) = self.view.bounds_mut().0.get_mut(p.y as usize) {
            let i = byte_idx(line, p.x as usize);
            line.insert(i, c);
        }
        self.view.cursor_right();
    }

    /// Split the line at the cursor and move to the start of the new line.
    pub fn insert_newline(&mut self) {
        if self.single_line {
            return;
        }
        let p = self.view.point();
        let lines = &mut self.view.bounds_mut().0;
        let y = p.y as usize;
        let Some(line) = lines.get_mut(y) else {
            return;
        };
        let tail = line.split_off(byte_idx(line, p.x as usize));
        lines.insert(y + 1, tail);
        self.view.cursor_down();
        self.view.cursor_home();
    }

    /// Delete the character before the cursor. At the start of a line, join
    /// it onto the previous line and land at the join.
    pub fn delete_back(&mut self) {
        let p = self.view.point();
        let (x, y) = (p.x as usize, p.y as usize);
        let lines = &mut self.view.bounds_mut().0;
        if x > 0 {
            if let Some(line) = lines.get_mut(y) {
                let i = byte_idx(line, x - 1);
                line.remove(i);
            }
            self.view.cursor_left();
        } else if y > 0 && y < lines.len() {
            let prev_len = lines[y - 1].chars().count();
            let line = lines.remove(y);
            lines[y - 1].push_str(&line);
            self.view.cursor_up();
            self.view.set_cursor_x(prev_len as u32);
        }
    }

    /// Delete the character under the cursor. At the end of a line, join the
    /// next line onto it.
    pub fn delete_forward(&mut self) {
        let p = self.view.point();
        let (x, y) = (p.x as usize, p.y as usize);
        let lines = self.view.bounds_mut();
        if x < lines.row_len(y) {
            let line = &mut lines.0[y];
            let i = byte_idx(line, x);
            line.remove(i);
        } else if y + 1 < lines.0.len() {
            let next = lines.0.remove(y + 1);
            lines.0[y].push_str(&next);
        }
        self.view.reclamp();
    }

    /// Draw one visible row. Returns the column the cursor sits at if it is
    /// on this row.
    fn render_line(&self, canvas: &mut Canvas<'_>, y: u32, line: &str) -> Option<u32> {
        let off = self.view.offset().x as usize;
        let cursor_col = self.view.point().x as usize;
        let cursor_row = self.view.cursor().y == y;
        let mut x = 0;
        let mut cursor_at = None;
        for (i, ch) in line.chars().enumerate().skip(off) {
            if cursor_row && i == cursor_col {
                cursor_at = Some(x);
            }
            let w = canvas.put((x, y), ch, Attr::Normal);
            if w == 0 && ch.width().unwrap_or(0) > 0 {
                break;
            }
            x += w;
        }
        if cursor_row && cursor_at.is_none() {
            cursor_at = Some(x);
        }
        cursor_at
    }
}

impl Component for TextBox {
    fn size(&self) -> Expanse {
        self.view.size()
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let off = self.view.offset().y as usize;
        let lines = self.lines();
        let mut cursor = None;
        for y in 0..self.view.size().h {
            let Some(line) = lines.get(off + y as usize) else {
                break;
            };
            if let Some(x) = self.render_line(canvas, y, line) {
                cursor = Some((x, y));
            }
        }
        if self.is_focused()
            && let Some((x, y)) = cursor
        {
            let p = self.view.point();
            let ch = lines
                .get(p.y as usize)
                .and_then(|l| l.chars().nth(p.x as usize))
                .unwrap_or(' ');
            if canvas.put((x, y), ch, Attr::Cursor) == 0 {
                canvas.put((x, y), ' ', Attr::Cursor);
            }
        }
    }

    fn on_key(&mut self, key: Key) -> EventOutcome {
        if let Some(c) = key.text() {
            self.insert_char(c);
            return EventOutcome::Handle;
        }
        match key.key {
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.view.cursor_left(),
            KeyCode::Right => self.view.cursor_right(),
            KeyCode::Up => self.view.cursor_up(),
            KeyCode::Down => self.view.cursor_down(),
            KeyCode::Home => self.view.cursor_home(),
            KeyCode::End => self.view.end_x(),
            KeyCode::PageUp => self.view.page_up(),
            KeyCode::PageDown => self.view.page_down(),
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
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::render::TermBuf;

    fn typed(t: &mut TextBox, s: &str) {
        for c in s.chars() {
            let k = if c == '\n' {
                KeyCode::Enter.into()
            } else {
                Key::from(c)
            };
            t.on_key(k);
        }
    }

    #[test]
    fn typing_and_newlines() -> Result<()> {
        let mut t = TextBox::new((5, 3))?;
        typed(&mut t, "hello world\nab");
        assert_eq!(t.text(), "hello world\nab");
        assert_eq!(t.position(), Point::new(2, 1));
        assert_eq!(t.viewport().offset(), Point::new(0, 0));

        t.on_key(KeyCode::Up.into());
        assert_eq!(t.position(), Point::new(2, 0));
        t.on_key(KeyCode::End.into());
        assert_eq!(t.position(), Point::new(11, 0));
        assert_eq!(t.viewport().offset(), Point::new(7, 0));
        t.on_key(KeyCode::Home.into());
        assert_eq!(t.position(), Point::zero());
        assert_eq!(t.viewport().offset(), Point::zero());
        Ok(())
    }

    #[test]
    fn split_and_join() -> Result<()> {
        let mut t = TextBox::new((10, 3))?;
        t.set_text("abcd");
        t.viewport_mut().set_cursor_x(2);
        t.on_key(KeyCode::Enter.into());
        assert_eq!(t.lines(), &["ab", "cd"]);
        assert_eq!(t.position(), Point::new(0, 1));

        t.on_key(KeyCode::Backspace.into());
        assert_eq!(t.lines(), &["abcd"]);
        assert_eq!(t.position(), Point::new(2, 0));

        t.on_key(KeyCode::Backspace.into());
        assert_eq!(t.text(), "acd");
        assert_eq!(t.position(), Point::new(1, 0));

        t.on_key(KeyCode::Delete.into());
        assert_eq!(t.text(), "ad");
        t.on_key(KeyCode::Backspace.into());
        t.on_key(KeyCode::Backspace.into());
        assert_eq!(t.text(), "d");
        assert_eq!(t.position(), Point::zero());
        Ok(())
    }

    #[test]
    fn delete_forward_joins() -> Result<()> {
        let mut t = TextBox::new((10, 3))?;
        t.set_text("ab\ncd");
        t.on_key(KeyCode::End.into());
        t.on_key(KeyCode::Delete.into());
        assert_eq!(t.text(), "abcd");
        assert_eq!(t.position(), Point::new(2, 0));
        t.on_key(KeyCode::End.into());
        t.on_key(KeyCode::Delete.into());
        assert_eq!(t.text(), "abcd");
        Ok(())
    }

    #[test]
    fn field_is_single_line() -> Result<()> {
        let mut t = TextBox::field(4)?;
        typed(&mut t, "ab\ncdef");
        assert_eq!(t.text(), "abcdef");
        assert_eq!(t.size(), Expanse::new(4, 1));
        assert_eq!(t.viewport().offset(), Point::new(3, 0));
        t.set_text("x\ny");
        assert_eq!(t.text(), "xy");
        Ok(())
    }

    #[test]
    fn renders_past_control_chars() -> Result<()> {
        let mut t = TextBox::new((4, 1))?;
        t.set_text("a\u{7}bc");
        let mut buf = TermBuf::new((4, 1));
        t.render(&mut buf.full_canvas());
        assert_eq!(buf.lines(), vec!["abc "]);
        Ok(())
    }

    #[test]
    fn renders_scrolled_with_cursor() -> Result<()> {
        let mut t = TextBox::new((4, 2))?;
        t.set_text("abcdef\ngh");
        t.focus();
        t.viewport_mut().set_cursor_x(5);
        let mut buf = TermBuf::new((4, 2));
        t.render(&mut buf.full_canvas());
        assert_eq!(buf.lines(), vec!["cdef", "    "]);
        assert!(buf.get((3, 0)).is_some_and(|c| c.attr == Attr::Cursor && c.ch == 'f'));
        Ok(())
    }
}
