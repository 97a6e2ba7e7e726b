use geom::Expanse;

use crate::{
    component::{Component, FocusState},
    render::{Attr, Canvas},
};

use super::{split_lines, text_size};

/// Static multi-line text. Labels take focus but ignore keys.
#[derive(Debug, Clone, Default)]
pub struct Label {
    /// Raw text.
    text: String,
    /// Text split at newlines.
    lines: Vec<String>,
    /// Focus flag.
    focus: FocusState,
}

impl Label {
    /// Construct a label.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lines: split_lines(&text),
            text,
            focus: FocusState::default(),
        }
    }

    /// The label's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.lines = split_lines(&self.text);
    }
}

impl Component for Label {
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
            canvas.text((0, y as u32), line, attr);
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
