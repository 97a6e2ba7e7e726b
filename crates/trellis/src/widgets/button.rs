use std::fmt;

use geom::Expanse;

use crate::{
    component::{Component, EventOutcome, FocusState},
    event::key::{Key, KeyCode},
    render::{Attr, Canvas},
};

use super::{split_lines, text_size};

/// A labelled button, pressed with Enter or space while focused.
///
/// Buttons never capture input: the host's capture key reaches them as an
/// ordinary key press.
#[derive(Default)]
pub struct Button {
    /// Label lines.
    lines: Vec<String>,
    /// Times the button has been pressed.
    presses: usize,
    /// Called on every press.
    on_press: Option<Box<dyn FnMut()>>,
    /// Focus flag.
    focus: FocusState,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("lines", &self.lines)
            .field("presses", &self.presses)
            .finish_non_exhaustive()
    }
}

impl Button {
    /// Construct a button.
    pub fn new(label: &str) -> Self {
        Self {
            lines: split_lines(label),
            ..Default::default()
        }
    }

    /// Attach a press callback.
    pub fn with_on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// The label text.
    pub fn label(&self) -> String {
        self.lines.join("\n")
    }

    /// Press the button.
    pub fn press(&mut self) {
        self.presses += 1;
        if let Some(f) = self.on_press.as_mut() {
            f();
        }
    }

    /// Number of presses so far.
    pub fn presses(&self) -> usize {
        self.presses
    }
}

impl Component for Button {
    fn size(&self) -> Expanse {
        text_size(&self.lines)
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let attr = if self.is_focused() {
            Attr::Focused
        } else {
            Attr::Normal
        };
        for (y, line) in self.lines.iter().enumerate() {
            let w = canvas.text((0, y as u32), line, attr);
            canvas.fill_row(w, y as u32, attr);
        }
    }

    fn on_key(&mut self, key: Key) -> EventOutcome {
        if key == KeyCode::Enter || key == ' ' {
            self.press();
            EventOutcome::Handle
        } else {
            EventOutcome::Ignore
        }
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
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn press() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut b = Button::new("ok").with_on_press(move || h.set(h.get() + 1));
        assert!(!b.wants_capture());
        assert_eq!(b.on_key(KeyCode::Enter.into()), EventOutcome::Handle);
        assert_eq!(b.on_key(' '.into()), EventOutcome::Handle);
        assert_eq!(b.on_key('x'.into()), EventOutcome::Ignore);
        assert_eq!(b.presses(), 2);
        assert_eq!(hits.get(), 2);
        assert_eq!(b.label(), "ok");
        assert_eq!(b.name(), "Button");
    }
}
