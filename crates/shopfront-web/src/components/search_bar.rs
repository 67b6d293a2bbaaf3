//! Search bar: input, inline error and results dropdown.

use leptos::html::Div;
use leptos::prelude::*;
use shopfront_data::{ApiError, Product};

use crate::components::search_input::SearchInput;
use crate::components::search_results::SearchResults;
use crate::hooks::{use_click_outside, use_debounce, use_product_search, SEARCH_DEBOUNCE_MS};
use crate::search::SearchState;

#[component]
pub fn SearchBar(
    /// Optional hook for the page to react to a chosen product.
    #[prop(optional)]
    on_product_select: Option<Callback<Product>>,
) -> impl IntoView {
    let state = RwSignal::new(SearchState::new());
    let query = Signal::derive(move || state.with(|s| s.query().to_string()));
    let results_visible = Signal::derive(move || state.with(|s| s.results_visible()));

    // Keystrokes update local state immediately; the query layer only sees
    // the debounced text.
    let debounced = use_debounce(query, SEARCH_DEBOUNCE_MS);
    let search = use_product_search(debounced);
    let products = Signal::derive(move || {
        search
            .data
            .get()
            .map(|page| page.products)
            .unwrap_or_default()
    });

    let on_input = Callback::new(move |value: String| {
        state.update(|s| s.input_changed(&value));
    });
    let on_clear = Callback::new(move |_: ()| state.update(|s| s.clear()));
    let on_focus = Callback::new(move |_: ()| state.update(|s| s.focus_regained()));
    let dismiss = Callback::new(move |_: ()| state.update(|s| s.dismiss()));
    let on_select = Callback::new(move |product: Product| {
        state.update(|s| s.select(&product.title));
        if let Some(callback) = on_product_select {
            callback.run(product);
        }
    });

    let container = NodeRef::<Div>::new();
    use_click_outside(container, dismiss);

    view! {
        <div class="search" node_ref=container>
            <SearchInput
                value=query
                results_visible=results_visible
                on_input=on_input
                on_clear=on_clear
                on_focus=on_focus
            />
            <SearchError error=search.error/>
            <SearchResults
                products=products
                is_loading=search.is_loading
                visible=results_visible
                on_select=on_select
            />
        </div>
    }
}

/// Inline failure notice under the input; the dropdown stays usable.
#[component]
fn SearchError(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some())>
            <div class="search__error" role="alert">
                "Search failed. Please try again."
            </div>
        </Show>
    }
}
