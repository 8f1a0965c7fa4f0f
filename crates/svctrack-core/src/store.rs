//! In-memory per-service counters.
//!
//! One `RwLock` guards the whole map: `increment` takes the write lock,
//! `get_count` the read lock. Every critical section leaves the map in a
//! valid state, so a poisoned lock is recovered instead of propagated.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct CounterStore {
    counts: RwLock<HashMap<String, u64>>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
        }
    }

    /// Add one to `service`, creating it at 1. Returns the new count.
    pub fn increment(&self, service: &str) -> u64 {
        let mut map = self.write();
        if let Some(c) = map.get_mut(service) {
            *c = c.saturating_add(1);
            return *c;
        }
        map.insert(service.to_string(), 1);
        tracing::trace!(service, "first track");
        1
    }

    /// Current count for `service`; 0 if never tracked.
    pub fn get_count(&self, service: &str) -> u64 {
        self.read().get(service).copied().unwrap_or(0)
    }

    /// Number of distinct services tracked so far.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, u64>> {
        self.counts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, u64>> {
        self.counts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untracked_is_zero() {
        let s = CounterStore::new();
        assert_eq!(s.get_count("nope"), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn increment_returns_running_total() {
        let s = CounterStore::new();
        assert_eq!(s.increment("a"), 1);
        assert_eq!(s.increment("a"), 2);
        assert_eq!(s.get_count("a"), 2);
        assert_eq!(s.len(), 1);
    }
}
