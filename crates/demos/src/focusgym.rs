//! A form that exercises every widget: three captioned columns over a help
//! pager and a row of buttons.

use std::{cell::Cell, rc::Rc};

use trellis::{
    GroupId, LayoutTree, Result, Ui,
    widgets::{Button, Label, ListBox, Pager, TextBox, Toolbar},
};

/// Help text shown in the pager.
pub const HELP: &str = "\
arrows move focus between components
enter captures the focused component, esc releases it
while captured, keys go to the component
ctrl-c quits

the pager scrolls with arrows, home, end, ctrl-a and ctrl-e once captured";

/// Colours offered by the list.
const COLOURS: [&str; 6] = ["default", "red", "green", "blue", "yellow", "magenta"];

/// The focus gym layout and the handles the demo inspects.
pub struct FocusGym {
    /// The dispatcher owning the tree.
    pub ui: Ui,
    /// Multi-line editor.
    pub notes: GroupId,
    /// Colour list.
    pub colours: GroupId,
    /// Glyph toolbar.
    pub tools: GroupId,
    /// Help pager.
    pub help: GroupId,
    /// Confirmation button.
    pub ok: GroupId,
    /// Cancellation button.
    pub cancel: GroupId,
    /// Number of times ok was pressed.
    pub confirmed: Rc<Cell<u32>>,
}

impl FocusGym {
    /// Build the layout.
    pub fn new() -> Result<Self> {
        let confirmed = Rc::new(Cell::new(0));
        let mut t = LayoutTree::new();

        let notes = t.leaf(TextBox::new((24, 4))?);
        let colours = t.leaf(ListBox::new((9, 4), COLOURS)?);
        let tools = t.leaf(Toolbar::new(["+-*/", "<>^v"])?);
        let mut pager = Pager::new((60, 4))?;
        pager.set_text(HELP);
        let help = t.leaf(pager);

        let counter = confirmed.clone();
        let ok = t.leaf(Button::new("[ok]").with_on_press(move || counter.set(counter.get() + 1)));
        let cancel = t.leaf(Button::new("[cancel]"));

        let cols = [("notes ", notes), ("colour ", colours), ("tools", tools)]
            .map(|(caption, body)| {
                let caption = t.leaf(Label::new(caption));
                t.vertical([caption, body])
            });
        let top = t.horizontal(cols);
        let buttons = t.horizontal([ok, cancel]);
        let root = t.vertical([top, help, buttons]);

        Ok(Self {
            ui: Ui::new(t, root),
            notes,
            colours,
            tools,
            help,
            ok,
            cancel,
            confirmed,
        })
    }
}
