//! Process-wide response cache keyed by operation and exact argument.
//!
//! One instance is shared by every session served by the process. Entries
//! are immutable once written; the only mutation beyond insertion is
//! [`ResponseCache::clear_details`], which the query controller invokes
//! whenever a new action replaces the active result set. Department,
//! highlight, and search entries are never invalidated within a session.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use artex_core::{Department, ObjectDetail, ObjectId, SearchFilter};

/// Memoized responses for the four catalog operations.
#[derive(Debug, Default)]
pub struct ResponseCache {
    departments: Mutex<Option<Vec<Department>>>,
    highlights: Mutex<Option<Vec<ObjectId>>>,
    searches: Mutex<HashMap<SearchFilter, Vec<ObjectId>>>,
    // A failed fetch is memoized as None: dead ids stay dead until the next
    // detail-cache generation, they don't get retried every render.
    details: Mutex<HashMap<ObjectId, Option<ObjectDetail>>>,
}

/// Entries are immutable once written, so a poisoned lock holds no
/// half-updated state and can be recovered.
fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached department list, if any.
    pub fn departments(&self) -> Option<Vec<Department>> {
        locked(&self.departments).clone()
    }

    /// Memoize the department list.
    pub fn store_departments(&self, departments: &[Department]) {
        *locked(&self.departments) = Some(departments.to_vec());
    }

    /// Cached highlights pool, if any.
    pub fn highlights(&self) -> Option<Vec<ObjectId>> {
        locked(&self.highlights).clone()
    }

    /// Memoize the highlights pool.
    pub fn store_highlights(&self, ids: &[ObjectId]) {
        *locked(&self.highlights) = Some(ids.to_vec());
    }

    /// Cached search result for an exact filter, if any.
    pub fn search_hit(&self, filter: &SearchFilter) -> Option<Vec<ObjectId>> {
        locked(&self.searches).get(filter).cloned()
    }

    /// Memoize a search result under its filter.
    pub fn store_search(&self, filter: SearchFilter, ids: &[ObjectId]) {
        locked(&self.searches).insert(filter, ids.to_vec());
    }

    /// Cached detail outcome for an id, if any. The outer `Option` is the
    /// cache hit; the inner one is the memoized fetch outcome.
    pub fn detail_hit(&self, id: ObjectId) -> Option<Option<ObjectDetail>> {
        locked(&self.details).get(&id).cloned()
    }

    /// Memoize a detail fetch outcome, present or absent.
    pub fn store_detail(&self, id: ObjectId, detail: Option<ObjectDetail>) {
        locked(&self.details).insert(id, detail);
    }

    /// Drop every memoized detail record as a unit.
    pub fn clear_details(&self) {
        locked(&self.details).clear();
    }

    /// Number of memoized detail entries (for inspection in tests).
    pub fn detail_entries(&self) -> usize {
        locked(&self.details).len()
    }
}
