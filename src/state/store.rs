//! State store with typed publish/subscribe.
//!
//! The store owns the one `UiState` of a session. Bindings change it only by
//! dispatching a [`Transition`]; after each dispatch every subscriber of the
//! transition's [`EventKind`] is called, in registration order, before
//! `dispatch` returns.

use crate::state::ui_state::{EventKind, Transition, UiState, reduce};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Callback invoked with a read-only snapshot after a matching transition.
pub type Subscriber = Box<dyn FnMut(&UiState)>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of a session's `UiState`.
///
/// Created at session start and dropped with it; there is no global
/// instance.
pub struct Store {
    state: UiState,
    subscribers: HashMap<EventKind, Vec<(SubscriptionId, Subscriber)>>,
    next_id: u64,
}

impl Store {
    /// Create a store holding the default state and no subscribers.
    pub fn new() -> Self {
        Self::with_state(UiState::new())
    }

    /// Create a store starting from `state`.
    pub fn with_state(state: UiState) -> Self {
        Self {
            state,
            subscribers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Register `subscriber` for `kind`.
    ///
    /// Subscribers of the same family are called in the order they were
    /// registered.
    pub fn subscribe<F>(&mut self, kind: EventKind, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&UiState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers
            .entry(kind)
            .or_default()
            .push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscription. Returns `false` if `id` was not registered
    /// for `kind`.
    pub fn unsubscribe(&mut self, kind: EventKind, id: SubscriptionId) -> bool {
        let Some(list) = self.subscribers.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        list.len() != before
    }

    /// Number of subscribers registered for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }

    /// Apply `transition`, then notify the subscribers of its family.
    ///
    /// Returns the new state.
    pub fn dispatch(&mut self, transition: Transition<'_>) -> &UiState {
        let kind = transition.event_kind();
        self.state = reduce(&self.state, transition);
        self.publish(kind);
        &self.state
    }

    fn publish(&mut self, kind: EventKind) {
        let Some(list) = self.subscribers.get_mut(&kind) else {
            return;
        };
        trace!(?kind, subscribers = list.len(), "publish");
        for (_, subscriber) in list.iter_mut() {
            subscriber(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(EventKind, usize)> = EventKind::ALL
            .iter()
            .map(|kind| (*kind, self.subscriber_count(*kind)))
            .collect();
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &counts)
            .finish()
    }
}
