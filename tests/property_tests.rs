//! Property-based tests for filtering, power and state transitions.
//!
//! Tests validate:
//! 1. Filtering keeps exactly the case-insensitive substring matches, in order
//! 2. Power is missing exactly when a field is "unknown"
//! 3. Transitions only touch the fields they own, and reset is idempotent
//! 4. The store notifies subscribers in registration order

use powertable::model::{Entity, Power, UNKNOWN, compute_power, filter_entities};
use powertable::state::{EventKind, Store, Transition, UiState, reduce};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn entity_strategy() -> impl Strategy<Value = Entity> {
    let measure = prop_oneof![
        1 => Just(UNKNOWN.to_string()),
        4 => "[0-9]{1,4}",
    ];
    ("[A-Za-z0-9 -]{0,12}", measure.clone(), measure)
        .prop_map(|(name, height, mass)| Entity::new(name, height, mass))
}

fn entities_strategy() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec(entity_strategy(), 0..30)
}

fn state_strategy() -> impl Strategy<Value = UiState> {
    (entities_strategy(), "[a-z]{0,3}", 0.5f64..50.0).prop_map(|(entities, filter, multiplier)| {
        UiState {
            filtered_entities: filter_entities(&entities, &filter),
            filter,
            multiplier,
        }
    })
}

// ===== Property 1: Filtering =====

proptest! {
    #[test]
    fn filter_keeps_exactly_matching_names_in_order(
        entities in entities_strategy(),
        filter in "[A-Za-z]{0,3}",
    ) {
        let needle = filter.to_lowercase();
        let expected: Vec<Entity> = entities
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        prop_assert_eq!(filter_entities(&entities, &filter), expected);
    }

    #[test]
    fn empty_filter_is_identity(entities in entities_strategy()) {
        prop_assert_eq!(filter_entities(&entities, ""), entities);
    }

    #[test]
    fn filter_ignores_case(entities in entities_strategy(), filter in "[a-z]{1,3}") {
        prop_assert_eq!(
            filter_entities(&entities, &filter),
            filter_entities(&entities, &filter.to_uppercase())
        );
    }
}

// ===== Property 2: Power =====

proptest! {
    #[test]
    fn power_missing_iff_unknown(entity in entity_strategy(), multiplier in 0.1f64..20.0) {
        let missing = entity.height == UNKNOWN || entity.mass == UNKNOWN;
        prop_assert_eq!(compute_power(&entity, multiplier) == Power::Missing, missing);
    }

    #[test]
    fn integer_inputs_give_integral_power(
        height in 0u32..1000,
        mass in 0u32..1000,
        multiplier in 1u32..=20,
    ) {
        let entity = Entity::new("x", height.to_string(), mass.to_string());
        let expected = f64::from(multiplier) * f64::from(height) * f64::from(mass);
        prop_assert_eq!(
            compute_power(&entity, f64::from(multiplier)),
            Power::Value(expected)
        );
    }
}

#[test]
fn power_examples() {
    assert_eq!(
        compute_power(&Entity::new("a", "10", "5"), 2.0),
        Power::Value(100.0)
    );
    assert_eq!(
        compute_power(&Entity::new("b", "1,5", "2"), 10.0),
        Power::Value(30.0)
    );
}

// ===== Property 3: Transitions =====

proptest! {
    #[test]
    fn reset_is_idempotent(state in state_strategy(), entities in entities_strategy()) {
        let once = reduce(&state, Transition::Reset { entities: &entities });
        let twice = reduce(&once, Transition::Reset { entities: &entities });
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn multiplier_change_keeps_filter_and_rows(
        state in state_strategy(),
        multiplier in 0.1f64..100.0,
    ) {
        let next = reduce(&state, Transition::MultiplierChanged { multiplier });
        prop_assert_eq!(&next.filter, &state.filter);
        prop_assert_eq!(&next.filtered_entities, &state.filtered_entities);
        prop_assert_eq!(next.multiplier, multiplier);
    }

    #[test]
    fn filter_change_keeps_multiplier(
        state in state_strategy(),
        entities in entities_strategy(),
        filter in "[a-z]{0,3}",
    ) {
        let next = reduce(&state, Transition::FilterChanged { filter: &filter, entities: &entities });
        prop_assert_eq!(next.multiplier, state.multiplier);
        prop_assert_eq!(next.filtered_entities, filter_entities(&entities, &filter));
    }

    #[test]
    fn initialize_keeps_filter_and_multiplier(
        state in state_strategy(),
        entities in entities_strategy(),
    ) {
        let next = reduce(&state, Transition::Initialize { entities: &entities });
        prop_assert_eq!(&next.filter, &state.filter);
        prop_assert_eq!(next.multiplier, state.multiplier);
        prop_assert_eq!(next.filtered_entities, filter_entities(&entities, &state.filter));
    }
}

// ===== Property 4: Store delivery =====

proptest! {
    #[test]
    fn subscribers_run_in_registration_order(count in 1usize..10) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new();
        for index in 0..count {
            let calls = Rc::clone(&calls);
            store.subscribe(EventKind::MultiplierChanged, move |_: &UiState| {
                calls.borrow_mut().push(index)
            });
        }

        store.dispatch(Transition::MultiplierChanged { multiplier: 2.0 });

        prop_assert_eq!(calls.borrow().clone(), (0..count).collect::<Vec<_>>());
    }
}
