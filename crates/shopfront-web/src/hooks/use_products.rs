//! Typed product queries over the cache layer.

use leptos::prelude::*;
use shopfront_data::{ApiClient, Endpoint, QueryParams, SortOrder, FEATURED_LIMIT};
use shopfront_query::{QueryKey, QueryPolicy};

use crate::query::{use_query, QueryHandle};

/// Quiet period before a typed query is searched.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Cache key for a search query, or `None` when the trimmed text is empty.
///
/// Trimming then checking for emptiness is the sole gate for enabling the
/// request: whitespace-only input never fetches.
fn search_key(query: &str) -> Option<QueryKey> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(QueryKey::new(["products", "search", trimmed]))
    }
}

/// Incremental product search for the given (debounced) query text.
pub fn use_product_search(query: Signal<String>) -> QueryHandle {
    let client = ApiClient::new();
    let key = Signal::derive(move || query.with(|q| search_key(q)));
    use_query(key, QueryPolicy::search(), move |key: QueryKey| {
        let client = client.clone();
        async move {
            // The search term is part of the key, so a response is always
            // attributed to the text that produced it.
            let term = key.segments().last().cloned().unwrap_or_default();
            client
                .fetch_products(Endpoint::ProductSearch, QueryParams::new().q(term))
                .await
        }
    })
}

/// Products for the featured section.
pub fn use_featured_products() -> QueryHandle {
    let client = ApiClient::new();
    let key = Signal::derive(|| Some(QueryKey::new(["products", "featured"])));
    use_query(key, QueryPolicy::listing(), move |_key| {
        let client = client.clone();
        async move {
            client
                .fetch_products(
                    Endpoint::Products,
                    QueryParams::new().limit(FEATURED_LIMIT),
                )
                .await
        }
    })
}

/// Most recently added products, newest first.
pub fn use_new_arrivals() -> QueryHandle {
    let client = ApiClient::new();
    let key = Signal::derive(|| Some(QueryKey::new(["products", "new-arrivals"])));
    use_query(key, QueryPolicy::listing(), move |_key| {
        let client = client.clone();
        async move {
            client
                .fetch_products(
                    Endpoint::Products,
                    QueryParams::new()
                        .limit(FEATURED_LIMIT)
                        .sort_by("id")
                        .order(SortOrder::Desc),
                )
                .await
        }
    })
}
