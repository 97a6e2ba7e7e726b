//! The capability set every layout leaf wraps.

use std::any::{Any, type_name};

use geom::Expanse;

use crate::{event::key::Key, render::Canvas};

/// The result of handing a key to a component.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The key was processed and changed component state.
    Handle,
    /// The key was processed without a state change.
    Consume,
    /// The key was not handled.
    Ignore,
}

/// Components are the widgets wrapped by the leaves of a layout tree.
///
/// The focus navigator only ever touches `focus`, `unfocus` and
/// `is_focused`. The host dispatcher uses `on_key` and `wants_capture`, and
/// the renderer uses `size` and `render`.
pub trait Component: Any {
    /// Intrinsic size of the component.
    fn size(&self) -> Expanse;

    /// Draw the component. The canvas is clipped to the component's area.
    fn render(&self, canvas: &mut Canvas<'_>);

    /// Handle one key of an interaction session.
    fn on_key(&mut self, _key: Key) -> EventOutcome {
        EventOutcome::Ignore
    }

    /// Should the host hand keyboard control to this component when the
    /// capture key is pressed? Components that return false receive the
    /// capture key itself instead.
    fn wants_capture(&self) -> bool {
        false
    }

    /// Mark the component focused.
    fn focus(&mut self);

    /// Mark the component unfocused.
    fn unfocus(&mut self);

    /// Is the component focused?
    fn is_focused(&self) -> bool;

    /// Name used in logs and debug dumps.
    fn name(&self) -> String {
        let name = type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name).to_string()
    }
}

/// A focused flag for components to embed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FocusState {
    /// Current focus flag.
    focused: bool,
}

impl FocusState {
    /// Set the flag.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Clear the flag.
    pub fn unfocus(&mut self) {
        self.focused = false;
    }

    /// Read the flag.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// The null component: zero-sized, never focused, accepts no input.
///
/// Returned wherever a component is requested for a group that is not a
/// leaf, including a navigator over a tree with no leaves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullComponent;

/// Shared null component instance.
pub static NULL_COMPONENT: NullComponent = NullComponent;

impl Component for NullComponent {
    fn size(&self) -> Expanse {
        Expanse::default()
    }

    fn render(&self, _canvas: &mut Canvas<'_>) {}

    fn focus(&mut self) {}

    fn unfocus(&mut self) {}

    fn is_focused(&self) -> bool {
        false
    }

    fn name(&self) -> String {
        "null".into()
    }
}

/// Downcast a component to its concrete type.
pub fn downcast_ref<T: Component>(c: &dyn Component) -> Option<&T> {
    let any: &dyn Any = c;
    any.downcast_ref::<T>()
}

/// Mutably downcast a component to its concrete type.
pub fn downcast_mut<T: Component>(c: &mut dyn Component) -> Option<&mut T> {
    let any: &mut dyn Any = c;
    any.downcast_mut::<T>()
}
