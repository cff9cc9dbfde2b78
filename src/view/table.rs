//! Rendered rows of the table, kept in sync by store subscribers.
//!
//! `TableView` is what the TUI draws from. It never reads `UiState` on its
//! own; the store pushes snapshots into it:
//!
//! | Event               | Handler                    |
//! |---------------------|----------------------------|
//! | `Initialized`       | `render_rows`, `update_inputs` |
//! | `FilterChanged`     | `render_rows`              |
//! | `MultiplierChanged` | `update_power`             |

use crate::model::{Entity, compute_power};
use crate::state::{EventKind, MultiplierInput, Store, SubscriptionId, UiState};
use std::cell::RefCell;
use std::rc::Rc;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Name column.
    pub name: String,
    /// Height column, verbatim.
    pub height: String,
    /// Mass column, verbatim.
    pub mass: String,
    /// Power column, already formatted.
    pub power: String,
}

impl TableRow {
    /// Render `entity` under `multiplier`.
    pub fn from_entity(entity: &Entity, multiplier: f64) -> Self {
        Self {
            name: entity.name.clone(),
            height: entity.height.clone(),
            mass: entity.mass.clone(),
            power: compute_power(entity, multiplier).to_string(),
        }
    }
}

/// Row cache, multiplier input buffer and scroll position of the table.
#[derive(Debug, Default)]
pub struct TableView {
    rows: Vec<TableRow>,
    multiplier_input: MultiplierInput,
    scroll: usize,
}

impl TableView {
    /// Empty table whose multiplier field shows `multiplier`.
    pub fn new(multiplier: f64) -> Self {
        Self {
            rows: Vec::new(),
            multiplier_input: MultiplierInput::from_value(multiplier),
            scroll: 0,
        }
    }

    /// Rendered rows.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Index of the first visible row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Multiplier field buffer.
    pub fn multiplier_input(&self) -> &MultiplierInput {
        &self.multiplier_input
    }

    /// Mutable multiplier field buffer, for typing.
    pub fn multiplier_input_mut(&mut self) -> &mut MultiplierInput {
        &mut self.multiplier_input
    }

    /// Rebuild every row from `state` and scroll back to the top.
    pub fn render_rows(&mut self, state: &UiState) {
        self.rows = state
            .filtered_entities
            .iter()
            .map(|entity| TableRow::from_entity(entity, state.multiplier))
            .collect();
        self.scroll = 0;
    }

    /// Rewrite only the power column of the existing rows.
    ///
    /// Row membership never changes on a multiplier change, so rows and
    /// `filtered_entities` line up one to one.
    pub fn update_power(&mut self, state: &UiState) {
        debug_assert_eq!(self.rows.len(), state.filtered_entities.len());
        for (row, entity) in self.rows.iter_mut().zip(&state.filtered_entities) {
            row.power = compute_power(entity, state.multiplier).to_string();
        }
    }

    /// Make the input fields show the values in `state`.
    pub fn update_inputs(&mut self, state: &UiState) {
        self.multiplier_input.sync(state.multiplier);
    }

    /// Move the first visible row by `delta`.
    ///
    /// With `visible` rows on screen the offset stops where the last row is
    /// at the bottom, so scrolling back up moves the view immediately.
    pub fn scroll_by(&mut self, delta: isize, visible: usize) {
        let max = self.rows.len().saturating_sub(visible.max(1));
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }
}

/// Register `table`'s handlers on `store`.
///
/// Returns the subscriptions in registration order, paired with their
/// family, so the caller can detach them.
pub fn subscribe_table(
    store: &mut Store,
    table: &Rc<RefCell<TableView>>,
) -> Vec<(EventKind, SubscriptionId)> {
    let mut subscriptions = Vec::with_capacity(4);

    let view = Rc::clone(table);
    subscriptions.push((
        EventKind::Initialized,
        store.subscribe(EventKind::Initialized, move |state: &UiState| {
            view.borrow_mut().render_rows(state)
        }),
    ));

    let view = Rc::clone(table);
    subscriptions.push((
        EventKind::Initialized,
        store.subscribe(EventKind::Initialized, move |state: &UiState| {
            view.borrow_mut().update_inputs(state)
        }),
    ));

    let view = Rc::clone(table);
    subscriptions.push((
        EventKind::FilterChanged,
        store.subscribe(EventKind::FilterChanged, move |state: &UiState| {
            view.borrow_mut().render_rows(state)
        }),
    ));

    let view = Rc::clone(table);
    subscriptions.push((
        EventKind::MultiplierChanged,
        store.subscribe(EventKind::MultiplierChanged, move |state: &UiState| {
            view.borrow_mut().update_power(state)
        }),
    ));

    subscriptions
}
