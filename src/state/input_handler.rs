//! Input field editing (pure state transitions).
//!
//! Handles the two text inputs of the table: the name filter and the
//! multiplier. These functions only compute new field contents. Turning them
//! into store transitions is up to the binding.

use crate::state::ui_state::{MULTIPLIER_MAX, MULTIPLIER_MIN};

// ===== InputField =====

/// Which input field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    /// The name filter. Focused on startup.
    #[default]
    Filter,
    /// The multiplier.
    Multiplier,
}

impl InputField {
    /// Next field in tab order (wraps).
    pub fn next(self) -> Self {
        match self {
            InputField::Filter => InputField::Multiplier,
            InputField::Multiplier => InputField::Filter,
        }
    }

    /// Previous field in tab order (wraps).
    pub fn prev(self) -> Self {
        // Two fields: previous and next coincide
        self.next()
    }
}

// ===== Filter editing =====

/// Filter text after typing `ch` at the end.
pub fn push_filter_char(filter: &str, ch: char) -> String {
    let mut next = String::with_capacity(filter.len() + ch.len_utf8());
    next.push_str(filter);
    next.push(ch);
    next
}

/// Filter text after Backspace. Empty stays empty.
pub fn pop_filter_char(filter: &str) -> String {
    let mut next = filter.to_string();
    next.pop();
    next
}

// ===== Multiplier editing =====

/// Text buffer behind the multiplier field.
///
/// The buffer may hold text that is not a valid multiplier yet (empty, `"0"`,
/// `"1."`). Only [`MultiplierInput::value`] decides whether it is usable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiplierInput {
    text: String,
}

impl MultiplierInput {
    /// Buffer showing `value`.
    pub fn from_value(value: f64) -> Self {
        Self {
            text: format_multiplier(value),
        }
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the buffer with `value`.
    pub fn sync(&mut self, value: f64) {
        self.text = format_multiplier(value);
    }

    /// Append `ch` if it is a digit or the first `.`. Returns whether the
    /// buffer changed.
    pub fn push(&mut self, ch: char) -> bool {
        let accepted = ch.is_ascii_digit() || (ch == '.' && !self.text.contains('.'));
        if accepted {
            self.text.push(ch);
        }
        accepted
    }

    /// Remove the last character. Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// The buffer as a multiplier: `Some` only for a positive, finite number.
    pub fn value(&self) -> Option<f64> {
        self.text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// Format a multiplier without a trailing `.0` for whole numbers.
pub fn format_multiplier(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Multiplier after stepping by `delta`, clamped to the suggested range.
pub fn step_multiplier(current: f64, delta: f64) -> f64 {
    (current + delta).clamp(MULTIPLIER_MIN, MULTIPLIER_MAX)
}
