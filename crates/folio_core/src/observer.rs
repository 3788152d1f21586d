//! Change notification registry for view state.
//!
//! # Responsibility
//! - Let renderers subscribe to "filter changed" / "resolution changed".
//! - Keep the core independent of any UI reactivity mechanism.
//!
//! # Invariants
//! - Observers are notified synchronously, in subscription order.
//! - A removed subscription is never called again.

use crate::model::filter::FilterKey;
use crate::model::project::ProjectId;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Handle returned by `Observers::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered set of change callbacks for one event type.
pub struct Observers<E> {
    next_id: u64,
    entries: BTreeMap<SubscriptionId, Callback<E>>,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Registers a callback and returns its handle.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Box::new(callback));
        id
    }

    /// Removes a callback. Returns `false` when the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn notify(&mut self, event: &E) {
        for callback in self.entries.values_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Debug for Observers<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscriptions", &self.entries.len())
            .finish()
    }
}

/// Emitted when the active catalog filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChanged {
    pub previous: FilterKey,
    pub current: FilterKey,
}

/// Emitted after every detail resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionChanged {
    /// Raw location search string the pass ran on.
    pub query: String,
    /// Resolved record id, `None` for not-found.
    pub found: Option<ProjectId>,
}
