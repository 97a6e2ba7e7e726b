//! This module contains the core primitives to represent keyboard input.
use std::{fmt, ops::Add, str::FromStr};

use crossterm::event as cevent;

use crate::error::{Error, ParseError};

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Self::Output {
        Key {
            mods: self,
            key: other.into(),
        }
    }
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift-only modifier state.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

/// Control-only modifier state.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

/// Alt-only modifier state.
#[allow(non_upper_case_globals)]
pub const Alt: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: true,
};

/// Logical key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up key.
    PageUp,
    /// Page down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift + Tab key.
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
    /// F key.
    ///
    /// `KeyCode::F(1)` represents F1 key, etc.
    F(u8),
    /// A character.
    Char(char),
    /// Any key the toolkit has no name for.
    Null,
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Names accepted by `FromStr` and produced by `Display` for named keys.
const NAMED: &[(&str, KeyCode)] = &[
    ("backspace", KeyCode::Backspace),
    ("enter", KeyCode::Enter),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("delete", KeyCode::Delete),
    ("insert", KeyCode::Insert),
    ("esc", KeyCode::Esc),
    ("space", KeyCode::Char(' ')),
];

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((name, _)) = NAMED.iter().find(|(_, k)| k == self) {
            return write!(f, "{name}");
        }
        match self {
            Self::F(n) => write!(f, "f{n}"),
            Self::Char(c) => write!(f, "{c}"),
            _ => write!(f, "null"),
        }
    }
}

impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.to_ascii_lowercase();
        if let Some((_, k)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*k);
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }
        if let Some(n) = lower.strip_prefix('f')
            && let Ok(n) = n.parse::<u8>()
            && (1..=24).contains(&n)
        {
            return Ok(Self::F(n));
        }
        Err(ParseError::new(format!("unknown key: {s:?}")).into())
    }
}

/// Keys that should be preserved verbatim in text input.
const LEAVE_INTACT: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];

/// A keystroke along with modifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl Key {
    /// Normalise shifted input for binding lookup: a shifted ascii lowercase
    /// letter becomes the uppercase letter without shift, Enter and space keep
    /// their shift, and every other shifted character drops the shift.
    ///
    /// | input             | normalization    |
    /// |-------------------|------------------|
    /// | shift + A         | A                |
    /// | shift + a         | A                |
    /// | shift + )         | )                |
    /// | shift + enter     | shift + enter    |
    /// | shift + ctrl + A  | ctrl + A         |
    pub fn normalize(&self) -> Self {
        if !self.mods.shift {
            return *self;
        }
        let unshifted = Mods {
            shift: false,
            ..self.mods
        };
        match self.key {
            _ if LEAVE_INTACT.contains(&self.key) => *self,
            KeyCode::Char(c) => Self {
                mods: unshifted,
                key: KeyCode::Char(c.to_ascii_uppercase()),
            },
            _ => *self,
        }
    }

    /// The printable character for this key, if it carries one and no
    /// control or alt modifier is held.
    pub fn text(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) if !self.mods.ctrl && !self.mods.alt => Some(c),
            _ => None,
        }
    }
}

impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        // If there are modifiers, we never match.
        if self.mods != Empty {
            return false;
        }
        *c == self.key
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self {
            mods: Empty,
            key: KeyCode::Char(c),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(c: KeyCode) -> Self {
        Self {
            mods: Empty,
            key: c,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.ctrl {
            write!(f, "ctrl-")?;
        }
        if self.mods.alt {
            write!(f, "alt-")?;
        }
        if self.mods.shift {
            write!(f, "shift-")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Parses specs of the form `[ctrl-][alt-][shift-]<key>`, e.g. `"ctrl-c"`,
/// `"pagedown"`, `"f5"`, `"x"`. A trailing `-` is the minus key.
impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(ParseError::new("empty key spec").into());
        }
        let mut mods = Empty;
        let mut rest = s;
        loop {
            let lower = rest.to_ascii_lowercase();
            let (prefix, m) = if lower.starts_with("ctrl-") && rest.len() > 5 {
                ("ctrl-", Ctrl)
            } else if lower.starts_with("alt-") && rest.len() > 4 {
                ("alt-", Alt)
            } else if lower.starts_with("shift-") && rest.len() > 6 {
                ("shift-", Shift)
            } else {
                break;
            };
            mods = mods + m;
            rest = &rest[prefix.len()..];
        }
        Ok(Self {
            mods,
            key: rest.parse()?,
        })
    }
}

/// Translate crossterm modifier flags.
fn translate_mods(mods: cevent::KeyModifiers) -> Mods {
    Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
    }
}

impl From<cevent::KeyEvent> for Key {
    fn from(e: cevent::KeyEvent) -> Self {
        let key = match e.code {
            cevent::KeyCode::Backspace => KeyCode::Backspace,
            cevent::KeyCode::Enter => KeyCode::Enter,
            cevent::KeyCode::Left => KeyCode::Left,
            cevent::KeyCode::Right => KeyCode::Right,
            cevent::KeyCode::Up => KeyCode::Up,
            cevent::KeyCode::Down => KeyCode::Down,
            cevent::KeyCode::Home => KeyCode::Home,
            cevent::KeyCode::End => KeyCode::End,
            cevent::KeyCode::PageUp => KeyCode::PageUp,
            cevent::KeyCode::PageDown => KeyCode::PageDown,
            cevent::KeyCode::Tab => KeyCode::Tab,
            cevent::KeyCode::BackTab => KeyCode::BackTab,
            cevent::KeyCode::Delete => KeyCode::Delete,
            cevent::KeyCode::Insert => KeyCode::Insert,
            cevent::KeyCode::Esc => KeyCode::Esc,
            cevent::KeyCode::F(x) => KeyCode::F(x),
            cevent::KeyCode::Char(c) => KeyCode::Char(c),
            _ => KeyCode::Null,
        };
        Self {
            mods: translate_mods(e.modifiers),
            key,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Result, event::key::*};

    #[test]
    fn normalize() {
        assert_eq!((Shift + 'A').normalize(), 'A');
        assert_eq!((Shift + 'a').normalize(), 'A');
        assert_eq!((Shift + ')').normalize(), ')');
        assert_eq!((Shift + ' ').normalize(), Shift + ' ');
        assert_eq!((Shift + KeyCode::Enter).normalize(), Shift + KeyCode::Enter);
        assert_eq!((Shift + Alt + 'A').normalize(), Alt + 'A');
    }

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("up".parse::<Key>()?, Key::from(KeyCode::Up));
        assert_eq!("PageDown".parse::<Key>()?, Key::from(KeyCode::PageDown));
        assert_eq!("ctrl-c".parse::<Key>()?, Ctrl + 'c');
        assert_eq!("ctrl-alt-x".parse::<Key>()?, Ctrl + Alt + 'x');
        assert_eq!("f12".parse::<Key>()?, Key::from(KeyCode::F(12)));
        assert_eq!("space".parse::<Key>()?, Key::from(' '));
        assert_eq!("-".parse::<Key>()?, Key::from('-'));
        assert_eq!("ctrl--".parse::<Key>()?, Ctrl + '-');
        assert!("".parse::<Key>().is_err());
        assert!("nosuchkey".parse::<Key>().is_err());
        assert!("f99".parse::<Key>().is_err());
        Ok(())
    }

    #[test]
    fn display_round_trips_through_parse() -> Result<()> {
        for spec in ["ctrl-c", "pagedown", "f5", "x", "alt-left", "space"] {
            let key: Key = spec.parse()?;
            assert_eq!(key.to_string(), spec);
        }
        Ok(())
    }

    #[test]
    fn text() {
        assert_eq!(Key::from('a').text(), Some('a'));
        assert_eq!((Shift + 'A').text(), Some('A'));
        assert_eq!((Ctrl + 'a').text(), None);
        assert_eq!(Key::from(KeyCode::Enter).text(), None);
    }

    #[test]
    fn from_crossterm() {
        let ev = cevent::KeyEvent::new(cevent::KeyCode::Char('c'), cevent::KeyModifiers::CONTROL);
        assert_eq!(Key::from(ev), Ctrl + 'c');
        let ev = cevent::KeyEvent::new(cevent::KeyCode::PageUp, cevent::KeyModifiers::NONE);
        assert_eq!(Key::from(ev), Key::from(KeyCode::PageUp));
    }
}
