//! Tests for UiState transitions.
//!
//! These tests verify pure state transitions without any TUI dependencies.

use super::*;

// ===== Test Helpers =====

fn luke() -> Entity {
    Entity::new("Luke", "172", "77")
}

fn leia() -> Entity {
    Entity::new("Leia", "150", "49")
}

fn people() -> Vec<Entity> {
    vec![luke(), leia(), Entity::new("Owen Lars", "178", "120")]
}

// ===== UiState::new Tests =====

#[test]
fn new_state_has_defaults() {
    let state = UiState::new();
    assert_eq!(state.filter, "");
    assert_eq!(state.multiplier, 10.0);
    assert!(state.filtered_entities.is_empty());
}

#[test]
fn default_equals_new() {
    assert_eq!(UiState::default(), UiState::new());
}

// ===== Initialize Tests =====

#[test]
fn initialize_with_default_filter_keeps_everything() {
    let entities = people();
    let state = reduce(&UiState::new(), Transition::Initialize { entities: &entities });

    assert_eq!(state.filtered_entities, entities);
    assert_eq!(state.filter, "");
    assert_eq!(state.multiplier, DEFAULT_MULTIPLIER);
}

#[test]
fn initialize_uses_filter_typed_before_data_arrived() {
    let entities = people();
    // Filter typed while loading: applied against an empty collection
    let loading = reduce(
        &UiState::new(),
        Transition::FilterChanged {
            filter: "lars",
            entities: &[],
        },
    );
    assert!(loading.filtered_entities.is_empty());

    let state = reduce(&loading, Transition::Initialize { entities: &entities });

    assert_eq!(state.filter, "lars");
    assert_eq!(state.filtered_entities.len(), 1);
    assert_eq!(state.filtered_entities[0].name, "Owen Lars");
}

#[test]
fn initialize_keeps_multiplier() {
    let entities = people();
    let state = UiState {
        multiplier: 3.0,
        ..UiState::new()
    };
    let next = reduce(&state, Transition::Initialize { entities: &entities });
    assert_eq!(next.multiplier, 3.0);
}

// ===== FilterChanged Tests =====

#[test]
fn filter_changed_recomputes_rows() {
    let entities = people();
    let state = reduce(&UiState::new(), Transition::Initialize { entities: &entities });

    let next = reduce(
        &state,
        Transition::FilterChanged {
            filter: "LE",
            entities: &entities,
        },
    );

    assert_eq!(next.filter, "LE");
    assert_eq!(next.filtered_entities, vec![leia()]);
}

#[test]
fn filter_changed_never_touches_multiplier() {
    let entities = people();
    let state = UiState {
        multiplier: 7.0,
        ..UiState::new()
    };
    let next = reduce(
        &state,
        Transition::FilterChanged {
            filter: "luke",
            entities: &entities,
        },
    );
    assert_eq!(next.multiplier, 7.0);
}

#[test]
fn filter_changed_against_new_collection_replaces_rows() {
    let old = people();
    let state = reduce(&UiState::new(), Transition::Initialize { entities: &old });

    let fresh = vec![Entity::new("Leia Organa", "150", "49")];
    let next = reduce(
        &state,
        Transition::FilterChanged {
            filter: "le",
            entities: &fresh,
        },
    );

    assert_eq!(next.filtered_entities, fresh);
}

// ===== MultiplierChanged Tests =====

#[test]
fn multiplier_changed_leaves_filter_and_rows_untouched() {
    let entities = people();
    let state = reduce(
        &UiState::new(),
        Transition::FilterChanged {
            filter: "le",
            entities: &entities,
        },
    );

    let next = reduce(&state, Transition::MultiplierChanged { multiplier: 5.0 });

    assert_eq!(next.multiplier, 5.0);
    assert_eq!(next.filter, state.filter);
    assert_eq!(next.filtered_entities, state.filtered_entities);
}

#[test]
fn multiplier_outside_suggested_range_is_accepted() {
    let next = reduce(
        &UiState::new(),
        Transition::MultiplierChanged { multiplier: 250.0 },
    );
    assert_eq!(next.multiplier, 250.0);
}

// ===== Reset Tests =====

#[test]
fn reset_restores_defaults_and_all_rows() {
    let entities = people();
    let state = UiState {
        filter: "luke".to_string(),
        multiplier: 2.0,
        filtered_entities: vec![luke()],
    };

    let next = reduce(&state, Transition::Reset { entities: &entities });

    assert_eq!(next.filter, DEFAULT_FILTER);
    assert_eq!(next.multiplier, DEFAULT_MULTIPLIER);
    assert_eq!(next.filtered_entities, entities);
}

#[test]
fn reset_is_idempotent() {
    let entities = people();
    let state = UiState {
        filter: "o".to_string(),
        multiplier: 19.0,
        filtered_entities: Vec::new(),
    };

    let once = reduce(&state, Transition::Reset { entities: &entities });
    let twice = reduce(&once, Transition::Reset { entities: &entities });

    assert_eq!(once, twice);
}

// ===== EventKind Tests =====

#[test]
fn reset_publishes_as_initialized() {
    assert_eq!(
        Transition::Reset { entities: &[] }.event_kind(),
        EventKind::Initialized
    );
    assert_eq!(
        Transition::Initialize { entities: &[] }.event_kind(),
        EventKind::Initialized
    );
}

#[test]
fn filter_and_multiplier_publish_their_own_family() {
    assert_eq!(
        Transition::FilterChanged {
            filter: "x",
            entities: &[]
        }
        .event_kind(),
        EventKind::FilterChanged
    );
    assert_eq!(
        Transition::MultiplierChanged { multiplier: 1.0 }.event_kind(),
        EventKind::MultiplierChanged
    );
}

// ===== End-to-end scenario =====

#[test]
fn luke_and_leia_walkthrough() {
    use crate::model::{Power, compute_power};

    let entities = vec![luke(), leia()];
    let state = UiState::new();

    let state = reduce(&state, Transition::Initialize { entities: &entities });
    assert_eq!(state.filtered_entities, vec![luke(), leia()]);

    let state = reduce(
        &state,
        Transition::FilterChanged {
            filter: "le",
            entities: &entities,
        },
    );
    assert_eq!(state.filtered_entities, vec![leia()]);

    let state = reduce(&state, Transition::MultiplierChanged { multiplier: 5.0 });
    assert_eq!(state.filtered_entities, vec![leia()]);
    assert_eq!(
        compute_power(&state.filtered_entities[0], state.multiplier),
        Power::Value(36750.0)
    );

    let state = reduce(&state, Transition::Reset { entities: &entities });
    assert_eq!(
        state,
        UiState {
            filter: String::new(),
            multiplier: 10.0,
            filtered_entities: vec![luke(), leia()],
        }
    );
}
