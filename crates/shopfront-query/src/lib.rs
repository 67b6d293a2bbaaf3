//! Memoizing async-result store for Shopfront.
//!
//! A UI-framework-independent cache for async query results: key-addressed
//! entries with policy-driven staleness windows, reference-counted garbage
//! collection and retry policies. The store does no I/O of its own; a fetch
//! driver (in `shopfront-web`) issues requests and reports completions back,
//! keyed by query identity and fetch generation so late responses for
//! superseded requests are discarded.
//!
//! # Example
//!
//! ```rust
//! use shopfront_query::{QueryKey, QueryPolicy, QueryStore};
//!
//! let mut store: QueryStore<Vec<String>, String> = QueryStore::new();
//! let key = QueryKey::new(["products", "search", "phone"]);
//! let policy = QueryPolicy::search();
//!
//! store.subscribe(&key, &policy, 0);
//! if store.needs_fetch(&key, &policy, 0) {
//!     let generation = store.begin_fetch(&key, 0).expect("nothing in flight");
//!     // ... run the fetch, then:
//!     store.complete(&key, generation, Ok(vec!["iPhone 9".to_string()]), 40);
//! }
//! assert!(store.snapshot(&key).data.is_some());
//! ```

mod key;
mod policy;
mod retry;
mod store;

pub use key::QueryKey;
pub use policy::QueryPolicy;
pub use retry::{BackoffStrategy, RetryPolicy};
pub use store::{Generation, QuerySnapshot, QueryStatus, QueryStore};
