//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Text entry (characters and Backspace) is not an action: it goes straight to
/// the focused input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // State
    /// Restore default filter and multiplier. Default: Esc
    Reset,

    // Focus
    /// Move focus to the next input field. Default: Tab
    FocusNext,
    /// Move focus to the previous input field. Default: Shift+Tab
    FocusPrev,

    // Multiplier
    /// Increase multiplier by one, up to the suggested maximum. Default: + or ↑ in the multiplier field
    IncrementMultiplier,
    /// Decrease multiplier by one, down to the suggested minimum. Default: - or ↓ in the multiplier field
    DecrementMultiplier,

    // Table scrolling
    /// Scroll table up by one row. Default: ↑
    ScrollUp,
    /// Scroll table down by one row. Default: ↓
    ScrollDown,
    /// Scroll table up by one page. Default: Page Up
    PageUp,
    /// Scroll table down by one page. Default: Page Down
    PageDown,

    // Application
    /// Exit the application. Default: Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_not_equals_quit() {
        assert_ne!(KeyAction::Reset, KeyAction::Quit);
    }

    #[test]
    fn actions_are_copy() {
        let action = KeyAction::IncrementMultiplier;
        let copied = action;
        assert_eq!(action, copied);
    }
}
