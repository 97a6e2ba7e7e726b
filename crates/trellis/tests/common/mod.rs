//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use trellis::{
    Canvas, Component, Expanse, FocusState, GroupId, LayoutTree, render::Attr,
};

/// A named leaf that counts how often it is focused.
#[derive(Debug, Default)]
pub struct Probe {
    /// Name reported to the focuser and in assertions.
    pub name: String,
    /// Number of `focus` calls received.
    pub focus_calls: usize,
    /// Focus flag.
    focus: FocusState,
}

impl Probe {
    /// Construct a probe.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Component for Probe {
    fn size(&self) -> Expanse {
        Expanse::new(self.name.len() as u32, 1)
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        canvas.text((0, 0), &self.name, Attr::Normal);
    }

    fn focus(&mut self) {
        self.focus_calls += 1;
        self.focus.focus();
    }

    fn unfocus(&mut self) {
        self.focus.unfocus();
    }

    fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// The reference layout, leaves named a through j:
///
/// ```text
/// |              a              |
/// |    b    |    c    |    d    |
/// |    e    |         |    g    |
/// |---------|    f    |---------|
/// |    h    |         |    i    |
/// |              j              |
/// ```
pub fn reference() -> (LayoutTree, GroupId, HashMap<String, GroupId>) {
    let mut t = LayoutTree::new();
    let mut ids = HashMap::new();
    for n in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"] {
        ids.insert(n.to_string(), t.leaf(Probe::new(n)));
    }
    let id = |n: &str| ids[n];
    let row1 = t.horizontal([id("b"), id("c"), id("d")]);
    let eh = t.vertical([id("e"), id("h")]);
    let gi = t.vertical([id("g"), id("i")]);
    let row2 = t.horizontal([eh, id("f"), gi]);
    let root = t.vertical([id("a"), row1, row2, id("j")]);
    (t, root, ids)
}

/// Names of the focused leaves under `root`.
pub fn focused(t: &LayoutTree, root: GroupId) -> Vec<String> {
    t.leaves(root)
        .into_iter()
        .map(|l| t.component(l))
        .filter(|c| c.is_focused())
        .map(|c| c.name())
        .collect()
}
