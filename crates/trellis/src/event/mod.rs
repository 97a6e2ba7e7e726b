//! Input events delivered to the host dispatcher.

use crossterm::event as cevent;
use geom::Expanse;

pub mod key;

/// An input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keystroke.
    Key(key::Key),
    /// The terminal was resized.
    Resize(Expanse),
}

impl Event {
    /// Translate a crossterm event. Events the toolkit does not consume
    /// (mouse, focus, paste) and key releases yield `None`.
    pub fn from_crossterm(e: cevent::Event) -> Option<Self> {
        match e {
            cevent::Event::Key(k) if k.kind != cevent::KeyEventKind::Release => {
                Some(Self::Key(k.into()))
            }
            cevent::Event::Resize(w, h) => Some(Self::Resize(Expanse::new(w.into(), h.into()))),
            _ => None,
        }
    }
}

impl From<key::Key> for Event {
    fn from(k: key::Key) -> Self {
        Self::Key(k)
    }
}
