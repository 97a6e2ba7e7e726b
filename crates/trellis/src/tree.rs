//! The layout tree: an arena of groups addressed by stable ids.
//!
//! Groups are horizontal sequences, vertical sequences, or leaves wrapping a
//! single component. Parent and sibling links are plain ids and never own
//! anything; only a sequence's child list is owning. Every tree carries one
//! nil sentinel group which is its own parent, next and previous sibling, so
//! that every traversal query is total.

use std::iter;

use geom::Axis;
use slotmap::{SlotMap, new_key_type};

use crate::component::{Component, NULL_COMPONENT, downcast_mut, downcast_ref};

new_key_type! {
    /// Opaque identifier for a group stored in a layout tree.
    pub struct GroupId;
}

/// The kind of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Children laid out left to right.
    Horizontal,
    /// Children laid out top to bottom.
    Vertical,
    /// A single component.
    Leaf,
    /// The "no such group" sentinel.
    Nil,
}

impl GroupKind {
    /// The axis of a sequence kind.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Horizontal => Some(Axis::Horizontal),
            Self::Vertical => Some(Axis::Vertical),
            Self::Leaf | Self::Nil => None,
        }
    }
}

/// What a group holds.
enum Content {
    /// An ordered sequence of owned children along an axis.
    Sequence(Axis, Vec<GroupId>),
    /// A wrapped component.
    Leaf(Box<dyn Component>),
    /// Nothing. Only the sentinel holds this.
    Nil,
}

/// A node in the layout tree.
struct Group {
    /// Parent sequence, or the sentinel.
    parent: GroupId,
    /// Previous sibling, or the sentinel.
    prev: GroupId,
    /// Next sibling, or the sentinel.
    next: GroupId,
    /// Payload.
    content: Content,
}

/// An arena-backed layout tree.
///
/// Trees are built bottom-up: create leaves, then wrap them in sequences.
/// Wrapping a group in a sequence sets its parent and sibling links.
pub struct LayoutTree {
    /// Group storage.
    groups: SlotMap<GroupId, Group>,
    /// The sentinel group.
    nil: GroupId,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    /// Construct an empty tree holding only the sentinel.
    pub fn new() -> Self {
        let mut groups = SlotMap::with_key();
        let nil = groups.insert_with_key(|k| Group {
            parent: k,
            prev: k,
            next: k,
            content: Content::Nil,
        });
        Self { groups, nil }
    }

    /// The sentinel group id.
    pub fn nil(&self) -> GroupId {
        self.nil
    }

    /// Is this the sentinel, or an id this tree does not know?
    pub fn is_nil(&self, id: GroupId) -> bool {
        id == self.nil || !self.groups.contains_key(id)
    }

    /// Number of groups, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.groups.len() - 1
    }

    /// True if the tree holds no groups besides the sentinel.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a group. Unknown ids resolve to the sentinel.
    fn group(&self, id: GroupId) -> &Group {
        self.groups.get(id).unwrap_or(&self.groups[self.nil])
    }

    /// Insert a fresh, unattached group.
    fn insert(&mut self, content: Content) -> GroupId {
        let nil = self.nil;
        self.groups.insert(Group {
            parent: nil,
            prev: nil,
            next: nil,
            content,
        })
    }

    /// Wrap a component in a new leaf.
    pub fn leaf(&mut self, component: impl Component) -> GroupId {
        self.leaf_boxed(Box::new(component))
    }

    /// Wrap an already boxed component in a new leaf.
    pub fn leaf_boxed(&mut self, component: Box<dyn Component>) -> GroupId {
        self.insert(Content::Leaf(component))
    }

    /// Create a horizontal sequence over `children`, in the given order.
    pub fn horizontal(&mut self, children: impl IntoIterator<Item = GroupId>) -> GroupId {
        self.sequence(Axis::Horizontal, children)
    }

    /// Create a vertical sequence over `children`, in the given order.
    pub fn vertical(&mut self, children: impl IntoIterator<Item = GroupId>) -> GroupId {
        self.sequence(Axis::Vertical, children)
    }

    /// Create a sequence and wire parent and sibling links on its children.
    /// Children are neither re-ordered nor checked for duplicates. The
    /// sentinel's links are never rewritten.
    pub fn sequence(&mut self, axis: Axis, children: impl IntoIterator<Item = GroupId>) -> GroupId {
        let children: Vec<GroupId> = children.into_iter().collect();
        let id = self.insert(Content::Sequence(axis, children.clone()));
        let mut last = self.nil;
        for child in children {
            if self.is_nil(child) {
                last = self.nil;
                continue;
            }
            if let Some(g) = self.groups.get_mut(child) {
                g.parent = id;
                g.prev = last;
                g.next = self.nil;
            }
            if let Some(g) = self.groups.get_mut(last)
                && last != self.nil
            {
                g.next = child;
            }
            last = child;
        }
        id
    }

    /// The kind of a group.
    pub fn kind(&self, id: GroupId) -> GroupKind {
        match &self.group(id).content {
            Content::Sequence(Axis::Horizontal, _) => GroupKind::Horizontal,
            Content::Sequence(Axis::Vertical, _) => GroupKind::Vertical,
            Content::Leaf(_) => GroupKind::Leaf,
            Content::Nil => GroupKind::Nil,
        }
    }

    /// The parent of a group, or the sentinel.
    pub fn parent(&self, id: GroupId) -> GroupId {
        self.group(id).parent
    }

    /// The next sibling of a group, or the sentinel.
    pub fn next(&self, id: GroupId) -> GroupId {
        self.group(id).next
    }

    /// The previous sibling of a group, or the sentinel.
    pub fn prev(&self, id: GroupId) -> GroupId {
        self.group(id).prev
    }

    /// The children of a group. Empty for leaves and the sentinel.
    pub fn children(&self, id: GroupId) -> &[GroupId] {
        match &self.group(id).content {
            Content::Sequence(_, children) => children,
            Content::Leaf(_) | Content::Nil => &[],
        }
    }

    /// The component of a leaf. Any other group yields the null component.
    pub fn component(&self, id: GroupId) -> &dyn Component {
        match &self.group(id).content {
            Content::Leaf(c) => c.as_ref(),
            Content::Sequence(..) | Content::Nil => &NULL_COMPONENT,
        }
    }

    /// Mutable access to the component of a leaf.
    pub fn component_mut(&mut self, id: GroupId) -> Option<&mut dyn Component> {
        match &mut self.groups.get_mut(id)?.content {
            Content::Leaf(c) => Some(c.as_mut()),
            Content::Sequence(..) | Content::Nil => None,
        }
    }

    /// The component of a leaf as its concrete type.
    pub fn component_as<T: Component>(&self, id: GroupId) -> Option<&T> {
        downcast_ref(self.component(id))
    }

    /// The component of a leaf as its concrete type, mutably.
    pub fn component_as_mut<T: Component>(&mut self, id: GroupId) -> Option<&mut T> {
        downcast_mut(self.component_mut(id)?)
    }

    /// All leaves under `root`, in pre-order.
    pub fn leaves(&self, root: GroupId) -> Vec<GroupId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            match self.kind(id) {
                GroupKind::Leaf => out.push(id),
                GroupKind::Nil => {}
                GroupKind::Horizontal | GroupKind::Vertical => {
                    stack.extend(self.children(id).iter().rev());
                }
            }
        }
        out
    }

    /// Walk from `id` up to the root, yielding `id` and then each ancestor.
    pub fn ancestors(&self, id: GroupId) -> impl Iterator<Item = GroupId> + '_ {
        let mut current = if self.is_nil(id) { None } else { Some(id) };
        iter::from_fn(move || {
            let id = current?;
            let parent = self.parent(id);
            current = if self.is_nil(parent) { None } else { Some(parent) };
            Some(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;

    #[test]
    fn sentinel_is_total() {
        let tree = LayoutTree::new();
        let nil = tree.nil();
        assert_eq!(tree.kind(nil), GroupKind::Nil);
        assert_eq!(tree.parent(nil), nil);
        assert_eq!(tree.next(nil), nil);
        assert_eq!(tree.prev(nil), nil);
        assert!(tree.children(nil).is_empty());
        assert!(!tree.component(nil).is_focused());
        assert!(tree.is_empty());
    }

    #[test]
    fn sibling_links() {
        let mut tree = LayoutTree::new();
        let a = tree.leaf(Label::new("a"));
        let b = tree.leaf(Label::new("b"));
        let c = tree.leaf(Label::new("c"));
        let row = tree.horizontal([a, b, c]);
        let nil = tree.nil();

        assert_eq!(tree.kind(row), GroupKind::Horizontal);
        assert_eq!(tree.children(row), &[a, b, c]);
        for id in [a, b, c] {
            assert_eq!(tree.parent(id), row);
        }
        assert_eq!(tree.prev(a), nil);
        assert_eq!(tree.next(a), b);
        assert_eq!(tree.prev(b), a);
        assert_eq!(tree.next(b), c);
        assert_eq!(tree.prev(c), b);
        assert_eq!(tree.next(c), nil);
        assert_eq!(tree.parent(row), nil);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn leaves_in_preorder() {
        let mut tree = LayoutTree::new();
        let a = tree.leaf(Label::new("a"));
        let b = tree.leaf(Label::new("b"));
        let c = tree.leaf(Label::new("c"));
        let empty = tree.vertical([]);
        let col = tree.vertical([b, c]);
        let root = tree.horizontal([a, empty, col]);
        assert_eq!(tree.leaves(root), vec![a, b, c]);
        assert_eq!(tree.leaves(empty), vec![]);
        assert_eq!(tree.ancestors(c).collect::<Vec<_>>(), vec![c, col, root]);
    }

    #[test]
    fn typed_component_access() {
        let mut tree = LayoutTree::new();
        let a = tree.leaf(Label::new("a"));
        let row = tree.horizontal([a]);
        assert_eq!(tree.component_as::<Label>(a).map(Label::text), Some("a"));
        assert!(tree.component_as::<Label>(row).is_none());
        assert!(tree.component_mut(row).is_none());
        if let Some(l) = tree.component_as_mut::<Label>(a) {
            l.set_text("z");
        }
        assert_eq!(tree.component_as::<Label>(a).map(Label::text), Some("z"));
    }
}
