//! Shopfront storefront front-end.
//!
//! A client-side rendered Leptos app: header with debounced incremental
//! product search, plus featured-products and new-arrivals sections, all
//! backed by the catalog API through a process-wide query cache.

pub mod app;
pub mod components;
pub mod hooks;
pub mod query;
pub mod search;

pub use app::App;
