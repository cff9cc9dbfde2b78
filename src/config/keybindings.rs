//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only non-text keys are bound by default, so every printable character
/// stays available to the filter field.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Key-release and repeat metadata are ignored; only code and modifiers
    /// take part in the lookup.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Reset: the escape key
        bindings.bind(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), KeyAction::Reset);

        // Focus switching
        bindings.bind(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::FocusNext,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::FocusPrev,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            KeyAction::FocusPrev,
        );

        // Arrow keys: scroll, or step the multiplier when it has focus
        bindings.bind(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );

        // Page navigation
        bindings.bind(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );

        // Quit
        bindings.bind(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn escape_maps_to_reset() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(bindings.get(key), Some(KeyAction::Reset));
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get(key), Some(KeyAction::Quit));
    }

    #[test]
    fn plain_characters_are_unbound() {
        let bindings = KeyBindings::default();
        for ch in ['q', 'c', '?', '+', '-', 'j', 'k', ' '] {
            let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            assert_eq!(bindings.get(key), None, "'{ch}' must reach the filter");
        }
    }

    #[test]
    fn tab_cycles_focus() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(KeyAction::FocusNext)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(KeyAction::FocusPrev)
        );
    }

    #[test]
    fn lookup_ignores_event_kind_and_state() {
        let bindings = KeyBindings::default();
        let key = KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(bindings.get(key), Some(KeyAction::Reset));
    }

    #[test]
    fn bind_overrides_existing() {
        let mut bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        bindings.bind(key, KeyAction::Quit);
        assert_eq!(bindings.get(key), Some(KeyAction::Quit));
    }
}
