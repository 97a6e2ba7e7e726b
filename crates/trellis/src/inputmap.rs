//! Host-level key bindings.

use std::{collections::HashMap, fmt, str::FromStr};

use crate::{
    error::{Error, ParseError, Result},
    event::key::{Ctrl, Key, KeyCode},
};

/// Actions the host performs itself instead of handing the key to a
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavAction {
    /// Move focus up.
    FocusUp,
    /// Move focus down.
    FocusDown,
    /// Move focus left.
    FocusLeft,
    /// Move focus right.
    FocusRight,
    /// Hand input to the focused component.
    Capture,
    /// Take input back from a capturing component.
    Release,
    /// Ask the host loop to exit.
    Quit,
}

impl NavAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::FocusUp,
        Self::FocusDown,
        Self::FocusLeft,
        Self::FocusRight,
        Self::Capture,
        Self::Release,
        Self::Quit,
    ];

    /// The action's name as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::FocusUp => "focus_up",
            Self::FocusDown => "focus_down",
            Self::FocusLeft => "focus_left",
            Self::FocusRight => "focus_right",
            Self::Capture => "capture",
            Self::Release => "release",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NavAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseError::new(format!("unknown action: {s}")).into())
    }
}

/// A mapping from keys to host actions. Keys are normalized on insert and
/// lookup, so `shift-a` and `A` are the same binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMap {
    /// Bound keys.
    keys: HashMap<Key, NavAction>,
}

impl Default for InputMap {
    /// Arrows move focus, Enter captures, Esc releases, Ctrl-C quits.
    fn default() -> Self {
        let mut m = Self::empty();
        m.bind(KeyCode::Up, NavAction::FocusUp);
        m.bind(KeyCode::Down, NavAction::FocusDown);
        m.bind(KeyCode::Left, NavAction::FocusLeft);
        m.bind(KeyCode::Right, NavAction::FocusRight);
        m.bind(KeyCode::Enter, NavAction::Capture);
        m.bind(KeyCode::Esc, NavAction::Release);
        m.bind(Ctrl + 'c', NavAction::Quit);
        m
    }
}

impl InputMap {
    /// A map with no bindings.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Bind a key, replacing any previous binding for it.
    pub fn bind(&mut self, key: impl Into<Key>, action: NavAction) {
        self.keys.insert(key.into().normalize(), action);
    }

    /// Bind a key given as a spec such as `"ctrl-c"`.
    pub fn bind_spec(&mut self, spec: &str, action: NavAction) -> Result<()> {
        let key: Key = spec.parse()?;
        self.bind(key, action);
        Ok(())
    }

    /// Remove a key's binding, returning the action it was bound to.
    pub fn unbind(&mut self, key: impl Into<Key>) -> Option<NavAction> {
        self.keys.remove(&key.into().normalize())
    }

    /// Remove every key bound to `action`.
    pub fn clear_action(&mut self, action: NavAction) {
        self.keys.retain(|_, a| *a != action);
    }

    /// The action bound to a key.
    pub fn lookup(&self, key: impl Into<Key>) -> Option<NavAction> {
        self.keys.get(&key.into().normalize()).copied()
    }

    /// All keys bound to an action, sorted by their spec.
    pub fn keys_for(&self, action: NavAction) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .keys
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_cached_key(ToString::to_string);
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::key::Shift;

    #[test]
    fn defaults() {
        let m = InputMap::default();
        assert_eq!(m.lookup(KeyCode::Up), Some(NavAction::FocusUp));
        assert_eq!(m.lookup(KeyCode::Enter), Some(NavAction::Capture));
        assert_eq!(m.lookup(Ctrl + 'c'), Some(NavAction::Quit));
        assert_eq!(m.lookup('c'), None);
        assert_eq!(m.keys_for(NavAction::Release), vec![Key::from(KeyCode::Esc)]);
    }

    #[test]
    fn bind_normalizes() -> Result<()> {
        let mut m = InputMap::empty();
        m.bind(Shift + 'k', NavAction::FocusUp);
        assert_eq!(m.lookup('K'), Some(NavAction::FocusUp));
        m.bind_spec("j", NavAction::FocusDown)?;
        m.bind_spec("down", NavAction::FocusDown)?;
        assert_eq!(m.keys_for(NavAction::FocusDown).len(), 2);
        assert!(m.bind_spec("nosuchkey", NavAction::Quit).is_err());

        m.clear_action(NavAction::FocusDown);
        assert!(m.keys_for(NavAction::FocusDown).is_empty());
        assert_eq!(m.unbind('K'), Some(NavAction::FocusUp));
        assert_eq!(m.lookup('K'), None);
        Ok(())
    }

    #[test]
    fn action_names() -> Result<()> {
        for a in NavAction::ALL {
            assert_eq!(a.to_string().parse::<NavAction>()?, a);
        }
        assert!("jump".parse::<NavAction>().is_err());
        Ok(())
    }
}
