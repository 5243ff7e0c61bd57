// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcut matching.

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Super.
        const META  = 0b0000_1000;
    }
}

/// A key press as reported by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyEvent {
    /// The logical key, as produced by the active layout.
    pub key: char,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with modifiers.
    pub const fn new(key: char, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Whether the host should suppress its default handling of a key press.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyOutcome {
    /// The key was not consumed.
    Ignored,
    /// The key was consumed; prevent the default action.
    Handled,
}

/// A key combined with any one of a set of modifiers.
///
/// With the `serde` feature a shortcut can be loaded from configuration,
/// with modifiers written as flag names (`"CTRL | META"`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortcut {
    /// Key that must be pressed.
    pub key: char,
    /// At least one of these modifiers must be held.
    pub any_of: Modifiers,
}

impl Shortcut {
    /// Ctrl+B or Cmd+B: toggle the panel.
    pub const TOGGLE_PANEL: Self = Self {
        key: 'b',
        any_of: Modifiers::CTRL.union(Modifiers::META),
    };

    /// True if `event` triggers this shortcut.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key == self.key && event.modifiers.intersects(self.any_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_accepts_ctrl_or_meta() {
        let s = Shortcut::TOGGLE_PANEL;
        assert!(s.matches(&KeyEvent::new('b', Modifiers::CTRL)));
        assert!(s.matches(&KeyEvent::new('b', Modifiers::META)));
        assert!(s.matches(&KeyEvent::new('b', Modifiers::CTRL | Modifiers::SHIFT)));
    }

    #[test]
    fn toggle_requires_modifier_and_key() {
        let s = Shortcut::TOGGLE_PANEL;
        assert!(!s.matches(&KeyEvent::new('b', Modifiers::empty())));
        assert!(!s.matches(&KeyEvent::new('b', Modifiers::ALT)));
        assert!(!s.matches(&KeyEvent::new('n', Modifiers::CTRL)));
        // Shifted layouts report an uppercase key.
        assert!(!s.matches(&KeyEvent::new('B', Modifiers::CTRL | Modifiers::SHIFT)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn custom_shortcut_loads_from_config() {
        let s: Shortcut =
            serde_json::from_str(r#"{ "key": "k", "any_of": "CTRL | META" }"#).unwrap();
        assert_eq!(s.key, 'k');
        assert_eq!(s.any_of, Modifiers::CTRL | Modifiers::META);
        assert!(s.matches(&KeyEvent::new('k', Modifiers::META)));
        assert!(!s.matches(&KeyEvent::new('b', Modifiers::CTRL)));
    }
}
