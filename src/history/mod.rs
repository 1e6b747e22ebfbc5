// src/history/mod.rs
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use log::debug;
use crate::models::{HistoryEntry, Identity};

/// Maximum number of entries kept per identity.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("No history recorded for this user")]
    UnknownIdentity,

    #[error("History item not found (index {index}, {len} entries)")]
    EntryNotFound { index: usize, len: usize },
}

type Timeline = Arc<RwLock<VecDeque<HistoryEntry>>>;

// Every critical section leaves the deque valid, so a poisoned lock is safe to reuse.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Per-identity bounded history, newest first.
///
/// The outer map lock is only held long enough to find (or lazily create) an
/// identity's timeline. Mutations then take that timeline's write lock, so
/// concurrent records for one identity are serialized through the eviction
/// check while other identities proceed independently.
#[derive(Debug, Default)]
pub struct HistoryStore {
    timelines: RwLock<HashMap<Identity, Timeline>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn timeline(&self, identity: &Identity) -> Option<Timeline> {
        read(&self.timelines).get(identity).cloned()
    }

    fn timeline_or_insert(&self, identity: &Identity) -> Timeline {
        if let Some(timeline) = self.timeline(identity) {
            return timeline;
        }
        let mut timelines = write(&self.timelines);
        Arc::clone(timelines.entry(identity.clone()).or_default())
    }

    /// Insert at the front, evicting the oldest entry past capacity.
    pub fn record(&self, identity: &Identity, entry: HistoryEntry) {
        let timeline = self.timeline_or_insert(identity);
        let mut entries = write(&timeline);
        entries.push_front(entry);
        if entries.len() > HISTORY_CAPACITY {
            entries.truncate(HISTORY_CAPACITY);
            debug!("History for {} at capacity, evicted oldest entry", identity);
        }
    }

    pub fn list(&self, identity: &Identity) -> Vec<HistoryEntry> {
        match self.timeline(identity) {
            Some(timeline) => read(&timeline).iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn len(&self, identity: &Identity) -> usize {
        self.timeline(identity).map_or(0, |timeline| read(&timeline).len())
    }

    pub fn is_empty(&self, identity: &Identity) -> bool {
        self.len(identity) == 0
    }

    /// Remove the entry at `index` (0 is the newest).
    pub fn delete_at(&self, identity: &Identity, index: usize) -> Result<HistoryEntry, HistoryError> {
        let timeline = self.timeline(identity).ok_or(HistoryError::UnknownIdentity)?;
        let mut entries = write(&timeline);
        let len = entries.len();
        entries.remove(index).ok_or(HistoryError::EntryNotFound { index, len })
    }

    /// Empty an identity's history, returning how many entries were dropped.
    pub fn clear(&self, identity: &Identity) -> Result<usize, HistoryError> {
        let timeline = self.timeline(identity).ok_or(HistoryError::UnknownIdentity)?;
        let mut entries = write(&timeline);
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }
}
