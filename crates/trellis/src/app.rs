//! The host: owns a layout tree and decides who receives each key.

use geom::Direction;
use tracing::{debug, trace};

use crate::{
    component::{Component, EventOutcome},
    dump,
    error::Result,
    event::{Event, key::Key},
    focus::Focuser,
    inputmap::{InputMap, NavAction},
    render::{TermBuf, compose},
    tree::{GroupId, LayoutTree},
};

/// A layout tree with focus, key bindings and an input-capture session.
///
/// Outside a capture session, bound keys move focus, start a capture or quit,
/// and everything else goes to the focused component. During a session every
/// key except the release key goes to the focused component, which keeps
/// focus until the session ends.
pub struct Ui {
    /// The layout.
    tree: LayoutTree,
    /// Root of the layout.
    root: GroupId,
    /// Focus state.
    focuser: Focuser,
    /// Host bindings.
    inputs: InputMap,
    /// True while the focused component owns input.
    captured: bool,
    /// Set when a quit key is pressed.
    exit: bool,
}

impl Ui {
    /// Take ownership of a tree and focus its first leaf.
    pub fn new(mut tree: LayoutTree, root: GroupId) -> Self {
        let focuser = Focuser::new(&mut tree, root);
        Self {
            tree,
            root,
            focuser,
            inputs: InputMap::default(),
            captured: false,
            exit: false,
        }
    }

    /// Replace the default key bindings.
    pub fn with_input_map(mut self, inputs: InputMap) -> Self {
        self.inputs = inputs;
        self
    }

    /// The key bindings.
    pub fn input_map(&self) -> &InputMap {
        &self.inputs
    }

    /// The layout.
    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// Mutable access to the layout, for updating component state.
    pub fn tree_mut(&mut self) -> &mut LayoutTree {
        &mut self.tree
    }

    /// Root of the layout.
    pub fn root(&self) -> GroupId {
        self.root
    }

    /// Focus state.
    pub fn focuser(&self) -> &Focuser {
        &self.focuser
    }

    /// The focused leaf.
    pub fn current(&self) -> GroupId {
        self.focuser.current()
    }

    /// The focused component.
    pub fn current_component(&self) -> &dyn Component {
        self.focuser.current_component(&self.tree)
    }

    /// Is the focused component holding a capture session?
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Has a quit key been pressed?
    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    /// Move focus. Ends any capture session.
    pub fn focus(&mut self, dir: Direction) {
        self.captured = false;
        self.focuser.focus_dir(&mut self.tree, dir);
    }

    /// Focus a specific leaf. Ends any capture session if the leaf is
    /// focusable.
    pub fn set_focus(&mut self, leaf: GroupId) -> bool {
        let ok = self.focuser.set_focus(&mut self.tree, leaf);
        if ok {
            self.captured = false;
        }
        ok
    }

    /// Dispatch an input event.
    pub fn event(&mut self, event: Event) -> EventOutcome {
        match event {
            Event::Key(k) => self.key(k),
            Event::Resize(_) => EventOutcome::Ignore,
        }
    }

    /// Dispatch a key.
    pub fn key(&mut self, key: impl Into<Key>) -> EventOutcome {
        let key = key.into();
        let action = self.inputs.lookup(key);
        trace!("key {key} action {action:?} captured {}", self.captured);

        if self.captured {
            if action == Some(NavAction::Release) {
                self.captured = false;
                debug!("input released by {}", self.current_component().name());
                return EventOutcome::Handle;
            }
            let outcome = self.forward(key);
            if outcome == EventOutcome::Ignore && action == Some(NavAction::Quit) {
                self.exit = true;
                return EventOutcome::Handle;
            }
            return outcome;
        }

        let dir = match action {
            Some(NavAction::FocusUp) => Direction::Up,
            Some(NavAction::FocusDown) => Direction::Down,
            Some(NavAction::FocusLeft) => Direction::Left,
            Some(NavAction::FocusRight) => Direction::Right,
            Some(NavAction::Capture) => {
                if self.current_component().wants_capture() {
                    self.captured = true;
                    debug!("input captured by {}", self.current_component().name());
                    return EventOutcome::Handle;
                }
                return self.forward(key);
            }
            Some(NavAction::Quit) => {
                self.exit = true;
                return EventOutcome::Handle;
            }
            Some(NavAction::Release) | None => return self.forward(key),
        };
        let before = self.current();
        self.focuser.focus_dir(&mut self.tree, dir);
        if self.current() == before {
            EventOutcome::Consume
        } else {
            EventOutcome::Handle
        }
    }

    /// Hand a key to the focused component.
    fn forward(&mut self, key: Key) -> EventOutcome {
        match self.tree.component_mut(self.focuser.current()) {
            Some(c) => c.on_key(key),
            None => EventOutcome::Ignore,
        }
    }

    /// Draw the layout into a buffer, clearing it first.
    pub fn render(&self, buf: &mut TermBuf) -> Result<()> {
        buf.clear();
        compose(&self.tree, self.root, buf)
    }

    /// Coloured debug dump of the layout with the focused leaf marked.
    pub fn dump(&self) -> Result<String> {
        dump::dump(&self.tree, self.root, self.current())
    }
}
