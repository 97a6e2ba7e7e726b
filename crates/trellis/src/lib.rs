//! Trellis: a terminal widget toolkit built around directional focus and
//! ragged-content viewports.
//!
//! Widgets are leaves of a [`LayoutTree`] of horizontal and vertical
//! sequences. A [`Focuser`] moves focus between leaves with up/down/left/right
//! semantics that follow the nesting of the tree, returning to the leaf a
//! subtree was last left from. Scrollable widgets keep their cursor and scroll
//! offset in a [`Viewport`], whose bounds vary per row of content.
//!
//! [`Ui`] ties these together for a host event loop:
//!
//! ```
//! use trellis::{LayoutTree, Ui, event::key::KeyCode, widgets::{Button, Label}};
//!
//! let mut tree = LayoutTree::new();
//! let name = tree.leaf(Label::new("name"));
//! let ok = tree.leaf(Button::new("ok"));
//! let root = tree.vertical([name, ok]);
//!
//! let mut ui = Ui::new(tree, root);
//! ui.key(KeyCode::Down);
//! assert_eq!(ui.current(), ok);
//! ```

pub mod app;
pub mod component;
pub mod config;
pub mod dump;
pub mod error;
pub mod event;
pub mod focus;
pub mod inputmap;
pub mod render;
pub mod tree;
pub mod viewport;
pub mod widgets;

pub use geom;

pub use app::Ui;
pub use component::{Component, EventOutcome, FocusState, NullComponent};
pub use config::Config;
pub use error::{Error, Result};
pub use focus::Focuser;
pub use inputmap::{InputMap, NavAction};
pub use render::{Attr, Canvas, TermBuf};
pub use tree::{GroupId, GroupKind, LayoutTree};
pub use viewport::{Bounds, Viewport};

pub use geom::{Axis, Direction, Expanse, Point, Rect};
