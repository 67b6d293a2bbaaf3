//! Reactive bridge between the query store and Leptos.
//!
//! The store itself is process-wide and single-threaded (one per browser
//! tab), so it lives in a thread local. Reactivity comes from a version
//! signal bumped on every store mutation; snapshots are re-derived from the
//! store whenever it changes.
//!
//! Fetches run in `spawn_local` and report back through
//! [`QueryStore::complete`], which drops results whose fetch generation has
//! been superseded and results for entries that were evicted after unmount.
//! A late response can therefore never overwrite state belonging to a newer
//! request, and unmounted subscribers are never written to.

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::*;
use shopfront_data::{ApiError, ProductsResponse};
use shopfront_query::{QueryKey, QueryPolicy, QuerySnapshot, QueryStore};

thread_local! {
    static STORE: RefCell<QueryStore<ProductsResponse, ApiError>> =
        RefCell::new(QueryStore::new());
}

fn with_store<R>(f: impl FnOnce(&mut QueryStore<ProductsResponse, ApiError>) -> R) -> R {
    STORE.with(|store| f(&mut store.borrow_mut()))
}

/// Wall-clock milliseconds, the store's time base.
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Signal bumped on every store mutation; snapshot readers track it.
#[derive(Debug, Clone, Copy)]
struct QueryVersion(RwSignal<u64>);

impl QueryVersion {
    fn bump(&self) {
        self.0.update(|v| *v += 1);
    }

    fn track(&self) {
        self.0.track();
    }
}

/// Install the query layer's reactive root. Call once, at the app root.
pub fn provide_query_client() {
    provide_context(QueryVersion(RwSignal::new(0)));
}

fn use_query_version() -> QueryVersion {
    use_context::<QueryVersion>().expect("provide_query_client must be called at the app root")
}

/// Reactive handle to one logical query.
#[derive(Clone, Copy)]
pub struct QueryHandle {
    /// Last successful result for the current key.
    pub data: Signal<Option<ProductsResponse>>,
    /// True while fetching with no data yet.
    pub is_loading: Signal<bool>,
    /// Last error for the current key.
    pub error: Signal<Option<ApiError>>,
    /// Manual retry: marks the entry stale and re-fetches.
    pub refetch: Callback<()>,
}

/// Subscribe to a cached query.
///
/// `key` is the query's logical identity; `None` disables the query (no
/// fetch is issued and `is_loading` stays false). The fetcher receives the
/// key it is fetching for, so results are always attributed to the key that
/// requested them. Fresh cache entries are served without re-fetching.
pub fn use_query<F, Fut>(
    key: Signal<Option<QueryKey>>,
    policy: QueryPolicy,
    fetcher: F,
) -> QueryHandle
where
    F: Fn(QueryKey) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<ProductsResponse, ApiError>> + 'static,
{
    let version = use_query_version();
    let active_key: StoredValue<Option<QueryKey>> = StoredValue::new(None);

    // Subscription and fetch decisions track the key only. Version bumps
    // must not re-run this effect, otherwise a failed fetch would re-trigger
    // itself through its own completion.
    let effect_policy = policy.clone();
    let effect_fetcher = fetcher.clone();
    Effect::new(move |_| {
        let next = key.get();
        let now = now_ms();

        let previous = active_key.get_value();
        if previous == next {
            return;
        }
        if let Some(old) = previous {
            with_store(|store| store.unsubscribe(&old, now));
        }
        active_key.set_value(next.clone());

        if let Some(k) = next {
            with_store(|store| {
                store.sweep(now);
                store.subscribe(&k, &effect_policy, now);
            });
            maybe_fetch(&k, &effect_policy, version, effect_fetcher.clone());
        }
        version.bump();
    });

    on_cleanup(move || {
        let now = now_ms();
        if let Some(k) = active_key.get_value() {
            with_store(|store| {
                store.unsubscribe(&k, now);
                store.sweep(now);
            });
        }
    });

    let snapshot = Signal::derive(move || {
        version.track();
        match key.get() {
            Some(k) => with_store(|store| store.snapshot(&k)),
            None => QuerySnapshot::idle(),
        }
    });

    let refetch_policy = policy;
    let refetch = Callback::new(move |_: ()| {
        if let Some(k) = key.get_untracked() {
            with_store(|store| store.invalidate(&k));
            maybe_fetch(&k, &refetch_policy, version, fetcher.clone());
        }
    });

    QueryHandle {
        data: Signal::derive(move || snapshot.get().data),
        is_loading: Signal::derive(move || snapshot.get().is_loading),
        error: Signal::derive(move || snapshot.get().error),
        refetch,
    }
}

/// Issue a fetch if the entry is missing or stale and nothing is in flight.
fn maybe_fetch<F, Fut>(key: &QueryKey, policy: &QueryPolicy, version: QueryVersion, fetcher: F)
where
    F: Fn(QueryKey) -> Fut + 'static,
    Fut: Future<Output = Result<ProductsResponse, ApiError>> + 'static,
{
    let now = now_ms();
    let generation = with_store(|store| {
        if store.needs_fetch(key, policy, now) {
            store.begin_fetch(key, now)
        } else {
            None
        }
    });
    let Some(generation) = generation else {
        return;
    };

    let key = key.clone();
    let retry = policy.retry.clone();
    leptos::task::spawn_local(async move {
        let mut attempt = 0u32;
        let result = loop {
            match fetcher(key.clone()).await {
                Ok(response) => break Ok(response),
                Err(error) if error.is_retryable() && retry.should_retry(attempt) => {
                    let delay = retry.delay_for_attempt(attempt);
                    log::debug!("retrying {} in {:?}: {}", key, delay, error);
                    gloo_timers::future::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    log::warn!("query failed: {}: {}", key, error);
                    break Err(error);
                }
            }
        };

        let applied = with_store(|store| store.complete(&key, generation, result, now_ms()));
        if applied {
            version.bump();
        }
    });
    version.bump();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_is_monotonic_enough() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }
}
