//! PairStore - correlates left/right submissions by identifier

use crate::types::Side;
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrency-safe store pairing submissions by (identifier, side)
///
/// Backed by a sharded concurrent map, so arbitrary `put`/`get` traffic
/// from many request handlers needs no caller-side locking. Cloning is
/// cheap and every clone shares the same entries; the serving component
/// constructs one store and hands clones to its handlers. Entries live
/// until the process exits; there is no delete or expiry.
#[derive(Debug, Clone, Default)]
pub struct PairStore {
    entries: Arc<DashMap<(u64, Side), Arc<str>>>,
}

impl PairStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Insert or replace the payload for (id, side)
    ///
    /// The write is unconditional: a later submission for the same key
    /// overwrites the earlier one in place. The opposite side is never
    /// read or modified, and the write does not wait for it to exist.
    pub fn put(&self, id: u64, side: Side, payload: String) {
        self.entries.insert((id, side), Arc::from(payload));
    }

    /// Most recently written payload for (id, side), or `None`
    ///
    /// Never blocks waiting for the opposite side; a reader that arrives
    /// before a side was written gets `None` immediately. Absence is
    /// distinct from an empty payload.
    pub fn get(&self, id: u64, side: Side) -> Option<Arc<str>> {
        self.entries
            .get(&(id, side))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Check if a payload exists for (id, side)
    pub fn contains(&self, id: u64, side: Side) -> bool {
        self.entries.contains_key(&(id, side))
    }

    /// Number of stored payloads, counting each side separately
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no payloads
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
