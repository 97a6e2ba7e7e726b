use geom::{Expanse, Point};

use crate::{
    component::{Component, EventOutcome, FocusState},
    error::Result,
    event::key::{Key, KeyCode},
    render::{Attr, Canvas},
    viewport::{Bounds, Viewport},
};

/// List items. The selection moves only vertically, so every row's column
/// bound is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Items(pub Vec<String>);

impl Bounds for Items {
    fn bounds(&self, _p: Point) -> Point {
        Point::new(0, self.0.len().saturating_sub(1) as u32)
    }
}

/// A scrolling, single-selection list.
#[derive(Debug, Clone)]
pub struct ListBox {
    /// Items and selection.
    view: Viewport<Items>,
    /// Focus flag.
    focus: FocusState,
}

impl ListBox {
    /// Construct a list showing `size` cells of `items`.
    pub fn new<I, S>(size: impl Into<Expanse>, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = Items(items.into_iter().map(Into::into).collect());
        Ok(Self {
            view: Viewport::new(size, items)?,
            focus: FocusState::default(),
        })
    }

    /// The items.
    pub fn items(&self) -> &[String] {
        &self.view.bounds().0
    }

    /// Replace the items, keeping the selection index where it still exists.
    pub fn set_items<S: Into<String>>(&mut self, items: impl IntoIterator<Item = S>) {
        self.view.bounds_mut().0 = items.into_iter().map(Into::into).collect();
        self.view.reclamp();
    }

    /// The index and text of the selected item, or `None` if the list is
    /// empty.
    pub fn selected(&self) -> Option<(usize, &str)> {
        let i = self.view.point().y as usize;
        self.items().get(i).map(|s| (i, s.as_str()))
    }

    /// Select an item by index. Out-of-range indices select the last item.
    pub fn set_index(&mut self, i: usize) {
        self.view.set_cursor_y(i as u32);
    }

    /// Select the next item.
    pub fn select_down(&mut self) {
        self.view.cursor_down();
    }

    /// Select the previous item.
    pub fn select_up(&mut self) {
        self.view.cursor_up();
    }

    /// The list's viewport.
    pub fn viewport(&self) -> &Viewport<Items> {
        &self.view
    }
}

impl Component for ListBox {
    fn size(&self) -> Expanse {
        self.view.size()
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let off = self.view.offset().y as usize;
        let cursor = self.view.cursor().y;
        let items = self.items();
        for y in 0..self.view.size().h {
            let Some(item) = items.get(off + y as usize) else {
                break;
            };
            let attr = if y == cursor {
                Attr::Selected
            } else if self.is_focused() {
                Attr::Focused
            } else {
                Attr::Normal
            };
            let w = canvas.text((0, y), item, attr);
            canvas.fill_row(w, y, attr);
        }
    }

    fn on_key(&mut self, key: Key) -> EventOutcome {
        match key.key {
            KeyCode::Up => self.view.cursor_up(),
            KeyCode::Down => self.view.cursor_down(),
            KeyCode::PageUp => self.view.page_up(),
            KeyCode::PageDown => self.view.page_down(),
            KeyCode::Home => self.view.start_y(),
            KeyCode::End => self.view.end_y(),
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
