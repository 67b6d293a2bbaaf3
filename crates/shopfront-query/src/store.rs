//! Key-addressed store of async query results.
//!
//! The store is pure state plus policy: it never performs I/O and never reads
//! a clock. Callers pass `now_ms` into every time-sensitive operation, which
//! keeps the whole lifecycle (staleness, eviction, superseded responses)
//! testable on the host.

use std::collections::HashMap;
use std::time::Duration;

use crate::key::QueryKey;
use crate::policy::QueryPolicy;

/// Monotonic per-key fetch counter.
///
/// Every `begin_fetch` issues a new generation; a completion is applied only
/// if its generation is still current. A late response for a superseded
/// request is therefore discarded instead of overwriting newer state.
pub type Generation = u64;

/// Lifecycle state of one cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Subscribed but never fetched.
    Idle,
    /// Fetch in flight with no previous result.
    Loading,
    /// Last fetch succeeded.
    Success,
    /// Last fetch failed.
    Error,
}

/// Read-only view of one entry, shaped for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySnapshot<T, E> {
    /// Last successful result, if any.
    pub data: Option<T>,
    /// True while a fetch is in flight and no data exists yet.
    pub is_loading: bool,
    /// Last error, cleared by the next successful fetch.
    pub error: Option<E>,
}

impl<T, E> QuerySnapshot<T, E> {
    /// Snapshot of a disabled or unknown query.
    pub fn idle() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug)]
struct QueryEntry<T, E> {
    status: QueryStatus,
    value: Option<T>,
    error: Option<E>,
    /// Completion time of the last applied fetch, in ms.
    updated_at: Option<u64>,
    /// Last subscribe/unsubscribe/fetch touch, in ms. Drives GC.
    last_used: u64,
    gc_time: Duration,
    ref_count: u32,
    generation: Generation,
    in_flight: bool,
}

impl<T, E> QueryEntry<T, E> {
    fn new(gc_time: Duration, now_ms: u64) -> Self {
        Self {
            status: QueryStatus::Idle,
            value: None,
            error: None,
            updated_at: None,
            last_used: now_ms,
            gc_time,
            ref_count: 0,
            generation: 0,
            in_flight: false,
        }
    }
}

/// Process-wide memoizing store for async query results.
///
/// Read by many subscribers, written only through its own operations. At most
/// one request is in flight per key; concurrent subscribers to the same key
/// share the entry.
#[derive(Debug, Default)]
pub struct QueryStore<T, E> {
    entries: HashMap<QueryKey, QueryEntry<T, E>>,
}

impl<T: Clone, E: Clone> QueryStore<T, E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a subscriber, creating the entry on first use.
    ///
    /// The entry's GC window is pinned from the subscriber's policy.
    pub fn subscribe(&mut self, key: &QueryKey, policy: &QueryPolicy, now_ms: u64) {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| QueryEntry::new(policy.gc_time, now_ms));
        entry.ref_count += 1;
        entry.last_used = now_ms;
    }

    /// Drop a subscriber. The entry survives until its GC window lapses.
    pub fn unsubscribe(&mut self, key: &QueryKey, now_ms: u64) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.ref_count = entry.ref_count.saturating_sub(1);
            entry.last_used = now_ms;
        }
    }

    /// Current view of an entry. Unknown keys read as idle.
    pub fn snapshot(&self, key: &QueryKey) -> QuerySnapshot<T, E> {
        match self.entries.get(key) {
            Some(entry) => QuerySnapshot {
                data: entry.value.clone(),
                is_loading: entry.in_flight && entry.value.is_none(),
                error: entry.error.clone(),
            },
            None => QuerySnapshot::idle(),
        }
    }

    /// Whether a successful result is still within its staleness window.
    pub fn is_fresh(&self, key: &QueryKey, policy: &QueryPolicy, now_ms: u64) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return false;
        };
        if entry.value.is_none() || entry.status != QueryStatus::Success {
            return false;
        }
        match entry.updated_at {
            Some(updated_at) => {
                now_ms.saturating_sub(updated_at) < policy.stale_time.as_millis() as u64
            }
            None => false,
        }
    }

    /// Whether a fetch should be issued for this key.
    ///
    /// True when the entry is missing or stale and nothing is in flight.
    pub fn needs_fetch(&self, key: &QueryKey, policy: &QueryPolicy, now_ms: u64) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.in_flight => false,
            Some(_) => !self.is_fresh(key, policy, now_ms),
            None => true,
        }
    }

    /// Mark a fetch as started and hand out its generation.
    ///
    /// Returns `None` while another request for the key is already in flight.
    pub fn begin_fetch(&mut self, key: &QueryKey, now_ms: u64) -> Option<Generation> {
        let entry = self.entries.get_mut(key)?;
        if entry.in_flight {
            return None;
        }
        entry.generation += 1;
        entry.in_flight = true;
        entry.last_used = now_ms;
        if entry.value.is_none() {
            entry.status = QueryStatus::Loading;
        }
        log::debug!("fetch started: {} (generation {})", key, entry.generation);
        Some(entry.generation)
    }

    /// Apply a fetch result.
    ///
    /// Returns `false` without touching state when the entry is gone or the
    /// generation has been superseded by a newer fetch.
    pub fn complete(
        &mut self,
        key: &QueryKey,
        generation: Generation,
        result: Result<T, E>,
        now_ms: u64,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            log::debug!("discarding result for evicted key: {}", key);
            return false;
        };
        if entry.generation != generation {
            log::debug!(
                "discarding superseded result: {} (generation {} < {})",
                key,
                generation,
                entry.generation
            );
            return false;
        }

        entry.in_flight = false;
        entry.updated_at = Some(now_ms);
        entry.last_used = now_ms;
        match result {
            Ok(value) => {
                entry.value = Some(value);
                entry.error = None;
                entry.status = QueryStatus::Success;
            }
            Err(error) => {
                entry.error = Some(error);
                entry.status = QueryStatus::Error;
            }
        }
        true
    }

    /// Force the next `needs_fetch` for this key to return true.
    pub fn invalidate(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.updated_at = None;
        }
    }

    /// Evict entries that have been unreferenced past their GC window.
    pub fn sweep(&mut self, now_ms: u64) {
        self.entries.retain(|key, entry| {
            let keep = entry.ref_count > 0
                || entry.in_flight
                || now_ms.saturating_sub(entry.last_used) < entry.gc_time.as_millis() as u64;
            if !keep {
                log::debug!("evicting cache entry: {}", key);
            }
            keep
        });
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: u64 = 60 * 1000;

    fn key(q: &str) -> QueryKey {
        QueryKey::new(["products", "search"]).child(q)
    }

    fn store() -> QueryStore<Vec<u32>, String> {
        QueryStore::new()
    }

    #[test]
    fn test_unknown_key_reads_idle() {
        let store = store();
        let snap = store.snapshot(&key("phone"));
        assert_eq!(snap.data, None);
        assert!(!snap.is_loading);
        assert_eq!(snap.error, None);
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phone");

        store.subscribe(&k, &policy, 0);
        assert!(store.needs_fetch(&k, &policy, 0));

        let generation = store.begin_fetch(&k, 0).unwrap();
        assert!(store.snapshot(&k).is_loading);
        assert!(!store.needs_fetch(&k, &policy, 0));

        assert!(store.complete(&k, generation, Ok(vec![1, 2]), 10));
        let snap = store.snapshot(&k);
        assert_eq!(snap.data, Some(vec![1, 2]));
        assert!(!snap.is_loading);
        assert_eq!(snap.error, None);
    }

    #[test]
    fn test_fresh_entry_is_served_without_refetch() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phone");

        store.subscribe(&k, &policy, 0);
        let generation = store.begin_fetch(&k, 0).unwrap();
        store.complete(&k, generation, Ok(vec![1]), 0);

        // Within the 2 minute staleness window.
        assert!(store.is_fresh(&k, &policy, MINUTE));
        assert!(!store.needs_fetch(&k, &policy, MINUTE));

        // Past it.
        assert!(!store.is_fresh(&k, &policy, 3 * MINUTE));
        assert!(store.needs_fetch(&k, &policy, 3 * MINUTE));
    }

    #[test]
    fn test_single_in_flight_request_per_key() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phone");

        store.subscribe(&k, &policy, 0);
        store.subscribe(&k, &policy, 0);

        assert!(store.begin_fetch(&k, 0).is_some());
        // Second subscriber finds a request already in flight.
        assert!(store.begin_fetch(&k, 0).is_none());
        assert!(!store.needs_fetch(&k, &policy, 0));
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phones");

        store.subscribe(&k, &policy, 0);
        let stale_generation = store.begin_fetch(&k, 0).unwrap();

        // The first request is abandoned (e.g. manual refetch) and a newer
        // one is issued for the same key.
        store.complete(&k, stale_generation, Ok(vec![1]), 5);
        store.invalidate(&k);
        let newer_generation = store.begin_fetch(&k, 10).unwrap();
        assert!(store.complete(&k, newer_generation, Ok(vec![2]), 20));

        // The stale generation arrives late and must not overwrite.
        assert!(!store.complete(&k, stale_generation, Ok(vec![1]), 30));
        assert_eq!(store.snapshot(&k).data, Some(vec![2]));
    }

    #[test]
    fn test_error_result_is_surfaced_and_cleared_by_success() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phone");

        store.subscribe(&k, &policy, 0);
        let generation = store.begin_fetch(&k, 0).unwrap();
        store.complete(&k, generation, Err("boom".to_string()), 10);

        let snap = store.snapshot(&k);
        assert_eq!(snap.error, Some("boom".to_string()));
        assert!(!snap.is_loading);

        store.invalidate(&k);
        let generation = store.begin_fetch(&k, 20).unwrap();
        store.complete(&k, generation, Ok(vec![3]), 30);
        let snap = store.snapshot(&k);
        assert_eq!(snap.error, None);
        assert_eq!(snap.data, Some(vec![3]));
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut store = store();
        let policy = QueryPolicy::listing();
        let k = QueryKey::new(["products", "featured"]);

        store.subscribe(&k, &policy, 0);
        let generation = store.begin_fetch(&k, 0).unwrap();
        store.complete(&k, generation, Ok(vec![1]), 0);
        assert!(!store.needs_fetch(&k, &policy, 0));

        store.invalidate(&k);
        assert!(store.needs_fetch(&k, &policy, 0));
    }

    #[test]
    fn test_sweep_evicts_only_unreferenced_expired_entries() {
        let mut store = store();
        let policy = QueryPolicy::search(); // 5 minute GC window
        let live = key("phone");
        let dead = key("laptop");

        store.subscribe(&live, &policy, 0);
        store.subscribe(&dead, &policy, 0);
        store.unsubscribe(&dead, MINUTE);

        // Referenced entries survive any amount of disuse.
        store.sweep(30 * MINUTE);
        assert_eq!(store.len(), 1);
        assert!(store.needs_fetch(&dead, &policy, 30 * MINUTE));
        assert!(!store.is_empty());
    }

    #[test]
    fn test_sweep_keeps_unreferenced_entries_within_gc_window() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phone");

        store.subscribe(&k, &policy, 0);
        let generation = store.begin_fetch(&k, 0).unwrap();
        store.complete(&k, generation, Ok(vec![1]), 0);
        store.unsubscribe(&k, 0);

        // 4 minutes of disuse: inside the 5 minute GC window.
        store.sweep(4 * MINUTE);
        assert_eq!(store.snapshot(&k).data, Some(vec![1]));

        // 6 minutes: evicted.
        store.sweep(6 * MINUTE);
        assert_eq!(store.snapshot(&k).data, None);
    }

    #[test]
    fn test_completion_after_eviction_is_dropped() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phone");

        store.subscribe(&k, &policy, 0);
        let generation = store.begin_fetch(&k, 0).unwrap();
        store.complete(&k, generation, Ok(vec![1]), 0);
        store.unsubscribe(&k, 0);
        store.sweep(10 * MINUTE);

        assert!(!store.complete(&k, generation, Ok(vec![9]), 11 * MINUTE));
        assert!(store.is_empty());
    }

    #[test]
    fn test_refetch_keeps_previous_data_while_loading() {
        let mut store = store();
        let policy = QueryPolicy::search();
        let k = key("phone");

        store.subscribe(&k, &policy, 0);
        let generation = store.begin_fetch(&k, 0).unwrap();
        store.complete(&k, generation, Ok(vec![1]), 0);

        store.invalidate(&k);
        store.begin_fetch(&k, 10).unwrap();

        // Background refresh: existing data stays visible, not a loading state.
        let snap = store.snapshot(&k);
        assert_eq!(snap.data, Some(vec![1]));
        assert!(!snap.is_loading);
    }
}
