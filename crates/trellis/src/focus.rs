//! Directional focus navigation over a layout tree.
//!
//! A `Focuser` tracks one focused leaf under a root group. Directional moves
//! climb from the focused leaf until they find an ancestor whose parent is a
//! sequence along the requested axis and which has a sibling in the requested
//! direction, then descend into that sibling. Descent prefers the branch each
//! sequence was last entered through, so focus returns to where it left a
//! subtree.

use geom::Direction;
use slotmap::SecondaryMap;
use tracing::debug;

use crate::{
    component::Component,
    tree::{GroupId, GroupKind, LayoutTree},
};

/// Focus state for a layout tree.
#[derive(Debug, Clone)]
pub struct Focuser {
    /// The group navigation is confined to.
    root: GroupId,
    /// The focused leaf, or the tree's sentinel if there are no leaves.
    current: GroupId,
    /// For each sequence, the child branch most recently entered.
    sticky: SecondaryMap<GroupId, GroupId>,
}

impl Focuser {
    /// Create a focuser over `root`, focusing the first leaf reached by
    /// descending through first children. If there is no such leaf, nothing
    /// is focused and the current component is the null component.
    pub fn new(tree: &mut LayoutTree, root: GroupId) -> Self {
        let mut focuser = Self {
            root,
            current: tree.nil(),
            sticky: SecondaryMap::new(),
        };
        let first = focuser.descend(tree, root, true);
        if tree.kind(first) == GroupKind::Leaf {
            focuser.current = first;
            if let Some(c) = tree.component_mut(first) {
                c.focus();
            }
            debug!("initial focus on {}", tree.component(first).name());
        } else {
            debug!("no focusable leaf under root");
        }
        focuser
    }

    /// The root group.
    pub fn root(&self) -> GroupId {
        self.root
    }

    /// The focused leaf. This is the tree's sentinel if the tree has no
    /// leaves.
    pub fn current(&self) -> GroupId {
        self.current
    }

    /// The focused component, or the null component.
    pub fn current_component<'a>(&self, tree: &'a LayoutTree) -> &'a dyn Component {
        tree.component(self.current)
    }

    /// The child branch `seq` was last entered through, if any.
    pub fn last_visited(&self, seq: GroupId) -> Option<GroupId> {
        self.sticky.get(seq).copied()
    }

    /// Move focus up.
    pub fn focus_up<'a>(&mut self, tree: &'a mut LayoutTree) -> &'a dyn Component {
        self.focus_dir(tree, Direction::Up)
    }

    /// Move focus down.
    pub fn focus_down<'a>(&mut self, tree: &'a mut LayoutTree) -> &'a dyn Component {
        self.focus_dir(tree, Direction::Down)
    }

    /// Move focus left.
    pub fn focus_left<'a>(&mut self, tree: &'a mut LayoutTree) -> &'a dyn Component {
        self.focus_dir(tree, Direction::Left)
    }

    /// Move focus right.
    pub fn focus_right<'a>(&mut self, tree: &'a mut LayoutTree) -> &'a dyn Component {
        self.focus_dir(tree, Direction::Right)
    }

    /// Move focus in a direction and return the focused component.
    ///
    /// When there is no target the focused leaf is kept and its component's
    /// `focus` is invoked again.
    pub fn focus_dir<'a>(&mut self, tree: &'a mut LayoutTree, dir: Direction) -> &'a dyn Component {
        let target = self.search(tree, dir);
        if tree.kind(target) == GroupKind::Leaf {
            self.move_to(tree, target);
            debug!("focus {dir:?} to {}", tree.component(target).name());
        } else {
            if let Some(c) = tree.component_mut(self.current) {
                c.focus();
            }
            debug!("focus {dir:?}: no target");
        }
        tree.component(self.current)
    }

    /// Focus a specific leaf under the root. Returns false, leaving focus
    /// unchanged, if `leaf` is not a leaf reachable from the root.
    pub fn set_focus(&mut self, tree: &mut LayoutTree, leaf: GroupId) -> bool {
        if tree.kind(leaf) != GroupKind::Leaf || !tree.ancestors(leaf).any(|g| g == self.root) {
            return false;
        }
        self.move_to(tree, leaf);
        true
    }

    /// Climb from the current leaf looking for a sibling in `dir`, then
    /// descend into it. Returns the sentinel when there is no target.
    fn search(&self, tree: &LayoutTree, dir: Direction) -> GroupId {
        let axis = dir.axis();
        let mut g = self.current;
        while !tree.is_nil(g) && g != self.root {
            let parent = tree.parent(g);
            if tree.kind(parent).axis() == Some(axis) {
                let sibling = if dir.is_forward() {
                    tree.next(g)
                } else {
                    tree.prev(g)
                };
                if !tree.is_nil(sibling) {
                    return self.descend(tree, sibling, dir.is_forward());
                }
            }
            g = parent;
        }
        tree.nil()
    }

    /// Descend from `g` to a leaf, following remembered branches first and
    /// otherwise the first or last child. A childless sequence yields the
    /// sentinel.
    fn descend(&self, tree: &LayoutTree, mut g: GroupId, first: bool) -> GroupId {
        loop {
            if matches!(tree.kind(g), GroupKind::Leaf | GroupKind::Nil) {
                return g;
            }
            if let Some(&remembered) = self.sticky.get(g) {
                g = remembered;
                continue;
            }
            let children = tree.children(g);
            let next = if first {
                children.first()
            } else {
                children.last()
            };
            match next {
                Some(&c) => g = c,
                None => return tree.nil(),
            }
        }
    }

    /// Shift focus to `target` and record the path to it.
    fn move_to(&mut self, tree: &mut LayoutTree, target: GroupId) {
        if let Some(c) = tree.component_mut(self.current) {
            c.unfocus();
        }
        self.current = target;
        if let Some(c) = tree.component_mut(target) {
            c.focus();
        }
        self.remember(tree);
    }

    /// Record, for every sequence from the current leaf up to the root, the
    /// branch that leads to the current leaf.
    fn remember(&mut self, tree: &LayoutTree) {
        let mut g = self.current;
        while g != self.root {
            let parent = tree.parent(g);
            if tree.is_nil(parent) {
                break;
            }
            self.sticky.insert(parent, g);
            g = parent;
        }
    }
}
