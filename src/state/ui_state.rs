//! Table state and its transitions.
//!
//! `UiState` is the single state record behind every view binding. It changes
//! only through [`reduce`], which is a pure, exhaustive match over
//! [`Transition`].

use crate::model::{Entity, filter_entities};
use tracing::debug;

/// Filter applied when a session starts and after a reset.
pub const DEFAULT_FILTER: &str = "";

/// Multiplier applied when a session starts and after a reset.
pub const DEFAULT_MULTIPLIER: f64 = 10.0;

/// Lower bound of the multiplier range offered by input controls.
///
/// The core accepts any multiplier; only the controls clamp.
pub const MULTIPLIER_MIN: f64 = 1.0;

/// Upper bound of the multiplier range offered by input controls.
pub const MULTIPLIER_MAX: f64 = 20.0;

// ===== UiState =====

/// State of one table session. Pure data, no side effects.
///
/// # Invariant
///
/// `filtered_entities` is exactly `filter_entities(entities, filter)` for the
/// entity collection passed to the most recent `Initialize`, `FilterChanged`
/// or `Reset`. `MultiplierChanged` never touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Current name filter.
    pub filter: String,
    /// Current multiplier for the power column.
    pub multiplier: f64,
    /// Entities whose names match `filter`, in fetch order.
    pub filtered_entities: Vec<Entity>,
}

impl UiState {
    /// Fresh state with the default filter and multiplier and no rows.
    pub fn new() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            multiplier: DEFAULT_MULTIPLIER,
            filtered_entities: Vec::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Transition =====

/// The four ways `UiState` can change.
///
/// Transitions that recompute membership borrow the full entity collection so
/// the filter always runs against the latest data, never a cached copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition<'a> {
    /// Entities have arrived; filter them with the current filter.
    Initialize {
        /// Full entity collection.
        entities: &'a [Entity],
    },
    /// The name filter changed.
    FilterChanged {
        /// New filter text.
        filter: &'a str,
        /// Full entity collection.
        entities: &'a [Entity],
    },
    /// The multiplier changed. Row membership is unaffected.
    MultiplierChanged {
        /// New multiplier.
        multiplier: f64,
    },
    /// Escape was pressed: restore defaults.
    Reset {
        /// Full entity collection.
        entities: &'a [Entity],
    },
}

impl Transition<'_> {
    /// Notification family published after this transition is applied.
    ///
    /// `Reset` publishes as [`EventKind::Initialized`] because consumers must
    /// redo everything they do on first load (rows and both input fields).
    pub fn event_kind(&self) -> EventKind {
        match self {
            Transition::Initialize { .. } | Transition::Reset { .. } => EventKind::Initialized,
            Transition::FilterChanged { .. } => EventKind::FilterChanged,
            Transition::MultiplierChanged { .. } => EventKind::MultiplierChanged,
        }
    }
}

// ===== EventKind =====

/// Transition family that subscribers register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// State was (re)initialized: first load or reset.
    Initialized,
    /// Filter and filtered rows changed.
    FilterChanged,
    /// Multiplier changed.
    MultiplierChanged,
}

impl EventKind {
    /// Every family, in a fixed order.
    pub const ALL: [EventKind; 3] = [
        EventKind::Initialized,
        EventKind::FilterChanged,
        EventKind::MultiplierChanged,
    ];
}

// ===== reduce =====

/// Apply `transition` to `state`, returning the next state.
///
/// Total over all inputs. Fields a transition does not own are carried over
/// untouched.
pub fn reduce(state: &UiState, transition: Transition<'_>) -> UiState {
    match transition {
        Transition::Initialize { entities } => {
            debug!(entities = entities.len(), filter = %state.filter, "initialize");
            UiState {
                filtered_entities: filter_entities(entities, &state.filter),
                ..state.clone()
            }
        }
        Transition::FilterChanged { filter, entities } => {
            debug!(entities = entities.len(), filter, "filter changed");
            UiState {
                filter: filter.to_string(),
                filtered_entities: filter_entities(entities, filter),
                multiplier: state.multiplier,
            }
        }
        Transition::MultiplierChanged { multiplier } => {
            debug!(multiplier, "multiplier changed");
            UiState {
                multiplier,
                ..state.clone()
            }
        }
        Transition::Reset { entities } => {
            debug!(entities = entities.len(), "reset");
            UiState {
                filtered_entities: filter_entities(entities, DEFAULT_FILTER),
                ..UiState::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "ui_state_tests.rs"]
mod tests;
