//! Concrete components.

/// Pressable button.
mod button;
/// Static text.
mod label;
/// Scrolling list of items.
mod list;
/// Read-only scrolling text viewer.
mod pager;
/// Editable text.
mod textbox;
/// Grid of icon glyphs.
mod toolbar;

use geom::Expanse;
use unicode_width::UnicodeWidthStr;

pub use button::Button;
pub use label::Label;
pub use list::{Items, ListBox};
pub use pager::Pager;
pub use textbox::{Lines, TextBox};
pub use toolbar::{Grid, Toolbar};

/// The display size of a block of lines: the widest line by its
/// terminal width, by the number of lines.
fn text_size<S: AsRef<str>>(lines: &[S]) -> Expanse {
    let w = lines
        .iter()
        .map(|l| l.as_ref().width())
        .max()
        .unwrap_or(0);
    Expanse::new(w as u32, lines.len() as u32)
}

/// Split text into lines. Empty text is a single empty line.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
