//! Debug dumps of a layout tree.

use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{
    Result,
    tree::{GroupId, GroupKind, LayoutTree},
};

/// Render the tree under `root` as indented text, one group per line, with
/// the `focus` leaf marked. The output carries ANSI colour codes.
pub fn dump(tree: &LayoutTree, root: GroupId, focus: GroupId) -> Result<String> {
    let mut buffer = Buffer::ansi();
    dump_group(&mut buffer, tree, root, focus, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Like `dump`, without colour.
pub fn dump_plain(tree: &LayoutTree, root: GroupId, focus: GroupId) -> Result<String> {
    let mut buffer = Buffer::no_color();
    dump_group(&mut buffer, tree, root, focus, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Write one group and its descendants.
fn dump_group(
    buffer: &mut Buffer,
    tree: &LayoutTree,
    id: GroupId,
    focus: GroupId,
    level: usize,
) -> Result<()> {
    let indent = "    ".repeat(level);
    write!(buffer, "{indent}")?;
    match tree.kind(id) {
        GroupKind::Horizontal | GroupKind::Vertical => {
            buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            let name = if tree.kind(id) == GroupKind::Horizontal {
                "horizontal"
            } else {
                "vertical"
            };
            write!(buffer, "{name}")?;
            buffer.reset()?;
            writeln!(buffer)?;
            for c in tree.children(id) {
                dump_group(buffer, tree, *c, focus, level + 1)?;
            }
        }
        GroupKind::Leaf => {
            let c = tree.component(id);
            write!(buffer, "{}", c.name())?;
            if id == focus {
                buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(buffer, " FOCUSED")?;
                buffer.reset()?;
            }
            let size = c.size();
            writeln!(buffer, " {}x{}", size.w, size.h)?;
        }
        GroupKind::Nil => {
            writeln!(buffer, "nil")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::widgets::{Button, Label};

    #[test]
    fn marks_focus() -> Result<()> {
        let mut t = LayoutTree::new();
        let a = t.leaf(Label::new("a"));
        let b = t.leaf(Button::new("ok"));
        let row = t.horizontal([b]);
        let root = t.vertical([a, row]);
        assert_eq!(
            dump_plain(&t, root, b)?,
            "vertical\n    Label 1x1\n    horizontal\n        Button FOCUSED 2x1\n"
        );
        assert!(dump(&t, root, b)?.contains("\u{1b}["));
        assert_eq!(dump_plain(&t, t.nil(), b)?, "nil\n");
        Ok(())
    }
}
