use geom::{Expanse, Point};

use crate::{
    component::{Component, EventOutcome, FocusState},
    error::{Error, Result},
    event::key::{Ctrl, Key, KeyCode},
    render::{Attr, Canvas},
    viewport::{Bounds, Viewport},
};

use super::{split_lines, text_size};

/// The range of scroll positions over a block of text: every position up
/// to the one that shows the last column and last line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ScrollRange(Point);

impl Bounds for ScrollRange {
    fn bounds(&self, _p: Point) -> Point {
        self.0
    }
}

/// A read-only text viewer in the manner of `less`.
///
/// Scrolling moves a 1x1 viewport over the space of scroll positions, so the
/// viewport's point is the top-left character shown.
#[derive(Debug, Clone)]
pub struct Pager {
    /// Text lines.
    lines: Vec<String>,
    /// Display size.
    size: Expanse,
    /// Scroll position.
    view: Viewport<ScrollRange>,
    /// Focus flag.
    focus: FocusState,
}

impl Pager {
    /// Construct an empty pager of the given display size.
    pub fn new(size: impl Into<Expanse>) -> Result<Self> {
        let size = size.into();
        if size.is_empty() {
            return Err(Error::Geometry(format!("empty pager {size:?}")));
        }
        Ok(Self {
            lines: Vec::new(),
            size,
            view: Viewport::new((1, 1), ScrollRange::default())?,
            focus: FocusState::default(),
        })
    }

    /// Replace the text and scroll back to the top-left.
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
        let extent = text_size(&self.lines);
        self.view.bounds_mut().0 = Point::new(
            extent.w.saturating_sub(self.size.w),
            extent.h.saturating_sub(self.size.h),
        );
        self.view.reset();
    }

    /// The top-left character shown, as (column, line).
    pub fn scroll(&self) -> Point {
        self.view.point()
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) {
        let y = self.view.point().y.saturating_sub(self.size.h);
        self.view.set_cursor_y(y);
    }

    /// Scroll down one page, stopping where the last line is at the bottom.
    pub fn page_down(&mut self) {
        let y = self.view.point().y + self.size.h;
        self.view.set_cursor_y(y);
    }
}

impl Component for Pager {
    fn size(&self) -> Expanse {
        self.size
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let s = self.scroll();
        let visible = self.lines.iter().skip(s.y as usize).take(self.size.h as usize);
        for (y, line) in visible.enumerate() {
            let rest = line
                .char_indices()
                .nth(s.x as usize)
                .map_or("", |(i, _)| &line[i..]);
            canvas.text((0, y as u32), rest, Attr::Normal);
        }
    }

    fn on_key(&mut self, key: Key) -> EventOutcome {
        if key == Ctrl + 'a' {
            self.view.start_x();
            return EventOutcome::Handle;
        }
        if key == Ctrl + 'e' {
            self.view.end_x();
            return EventOutcome::Handle;
        }
        match key.key {
            KeyCode::Up => self.view.cursor_up(),
            KeyCode::Down => self.view.cursor_down(),
            KeyCode::Left => self.view.cursor_left(),
            KeyCode::Right => self.view.cursor_right(),
            KeyCode::Home => self.view.start_y(),
            KeyCode::End => self.view.end_y(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
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

    fn pager() -> Result<Pager> {
        let mut p = Pager::new((4, 2))?;
        let text: Vec<String> = (0..10).map(|i| format!("line{i}")).collect();
        p.set_text(&text.join("\n"));
        Ok(p)
    }

    #[test]
    fn scroll_range() -> Result<()> {
        let mut p = pager()?;
        p.on_key((Ctrl + 'e').into());
        assert_eq!(p.scroll(), Point::new(1, 0));
        p.on_key(KeyCode::Right.into());
        assert_eq!(p.scroll(), Point::new(1, 0));
        p.on_key((Ctrl + 'a').into());
        assert_eq!(p.scroll(), Point::zero());

        p.on_key(KeyCode::End.into());
        assert_eq!(p.scroll(), Point::new(0, 8));
        p.on_key(KeyCode::PageUp.into());
        assert_eq!(p.scroll(), Point::new(0, 6));
        p.on_key(KeyCode::Home.into());
        p.on_key(KeyCode::PageDown.into());
        p.on_key(KeyCode::PageDown.into());
        assert_eq!(p.scroll(), Point::new(0, 4));
        for _ in 0..5 {
            p.on_key(KeyCode::PageDown.into());
        }
        assert_eq!(p.scroll(), Point::new(0, 8));
        Ok(())
    }

    #[test]
    fn renders_window() -> Result<()> {
        let mut p = pager()?;
        p.on_key(KeyCode::Down.into());
        p.on_key(KeyCode::Right.into());
        let mut buf = TermBuf::new((4, 2));
        p.render(&mut buf.full_canvas());
        assert_eq!(buf.lines(), vec!["ine1", "ine2"]);
        Ok(())
    }

    #[test]
    fn zero_width_glyphs_do_not_truncate() -> Result<()> {
        let mut p = Pager::new((6, 1))?;
        p.set_text("ab\tcdef");
        let mut buf = TermBuf::new((6, 1));
        p.render(&mut buf.full_canvas());
        assert_eq!(buf.lines(), vec!["abcdef"]);
        Ok(())
    }

    #[test]
    fn short_text_does_not_scroll() -> Result<()> {
        let mut p = Pager::new((10, 5))?;
        p.set_text("hi");
        p.on_key(KeyCode::Down.into());
        p.on_key(KeyCode::Right.into());
        p.on_key(KeyCode::PageDown.into());
        assert_eq!(p.scroll(), Point::zero());
        assert!(Pager::new((0, 5)).is_err());
        Ok(())
    }
}
