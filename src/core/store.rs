//! Purpose: Per-cycle side table from materialized objects to the JSON node they came from.
//! Exports: `Handle`, `RawJsonStore`, `StoreState`, `Tracked`.
//! Role: Optional raw-retention registry owned by the caller and lent to one materialization cycle.
//! Invariants: Keys are `Handle`s assigned at construction, never reference identity.
//! Invariants: `clear` empties the table; entries from earlier cycles are never merged into later ones.
//! Invariants: Lookups never change state.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one materialized object.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Handle(u64);

impl Handle {
    pub(crate) fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that carries a construction-time `Handle`.
pub trait Tracked {
    fn handle(&self) -> Handle;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreState {
    Empty,
    Populated,
}

#[derive(Clone, Debug, Default)]
pub struct RawJsonStore {
    entries: HashMap<Handle, Value>,
}

impl RawJsonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StoreState {
        if self.entries.is_empty() {
            StoreState::Empty
        } else {
            StoreState::Populated
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        tracing::trace!(dropped = self.entries.len(), "raw json store cleared");
        self.entries.clear();
    }

    /// Insert or overwrite the node recorded for `handle`.
    pub fn register(&mut self, handle: Handle, node: Value) {
        tracing::trace!(%handle, "raw json registered");
        self.entries.insert(handle, node);
    }

    pub fn get(&self, handle: Handle) -> Option<&Value> {
        self.entries.get(&handle)
    }

    /// Raw node behind `object`, if it was registered in the current cycle.
    pub fn raw_json<T: Tracked + ?Sized>(&self, object: &T) -> Option<&Value> {
        self.get(object.handle())
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{Handle, RawJsonStore, StoreState};
    use serde_json::json;

    #[test]
    fn handles_are_unique_and_increasing() {
        let a = Handle::next();
        let b = Handle::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn register_moves_to_populated_and_clear_resets() {
        let mut store = RawJsonStore::new();
        assert_eq!(store.state(), StoreState::Empty);

        let handle = Handle::next();
        store.register(handle, json!({"id": "1"}));
        assert_eq!(store.state(), StoreState::Populated);
        assert_eq!(store.get(handle), Some(&json!({"id": "1"})));

        store.clear();
        assert_eq!(store.state(), StoreState::Empty);
        assert_eq!(store.get(handle), None);
    }

    #[test]
    fn register_overwrites_existing_entry() {
        let mut store = RawJsonStore::new();
        let handle = Handle::next();
        store.register(handle, json!(1));
        store.register(handle, json!(2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(handle), Some(&json!(2)));
    }

    #[test]
    fn lookup_of_unknown_handle_is_none_and_stateless() {
        let store = RawJsonStore::new();
        assert!(store.get(Handle::next()).is_none());
        assert_eq!(store.state(), StoreState::Empty);
    }

    #[test]
    fn clear_on_empty_store_is_noop() {
        let mut store = RawJsonStore::new();
        store.clear();
        assert!(store.is_empty());
    }
}
