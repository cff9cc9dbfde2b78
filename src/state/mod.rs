//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod input_handler;
pub mod store;
pub mod ui_state;

// Re-export for convenience
pub use input_handler::{InputField, MultiplierInput};
pub use store::{Store, Subscriber, SubscriptionId};
pub use ui_state::{
    DEFAULT_FILTER, DEFAULT_MULTIPLIER, EventKind, MULTIPLIER_MAX, MULTIPLIER_MIN, Transition,
    UiState, reduce,
};
