//! Search results dropdown.

use leptos::prelude::*;
use shopfront_data::Product;

/// Characters of description shown per result row.
const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// Which of the panel's mutually exclusive states to render.
///
/// Same priority contract as the product grid, minus the error state (the
/// search bar renders errors inline, above the panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Searching,
    Empty,
    Results,
}

impl PanelState {
    pub fn from_parts(visible: bool, is_loading: bool, count: usize) -> Self {
        if !visible {
            PanelState::Hidden
        } else if is_loading {
            PanelState::Searching
        } else if count == 0 {
            PanelState::Empty
        } else {
            PanelState::Results
        }
    }
}

#[component]
pub fn SearchResults(
    products: Signal<Vec<Product>>,
    is_loading: Signal<bool>,
    visible: Signal<bool>,
    on_select: Callback<Product>,
) -> impl IntoView {
    view! {
        {move || {
            let state = PanelState::from_parts(
                visible.get(),
                is_loading.get(),
                products.with(|p| p.len()),
            );
            match state {
                PanelState::Hidden => ().into_any(),
                PanelState::Searching => view! {
                    <div class="search-results">
                        <div class="search-results__status">
                            <span class="spinner" aria-hidden="true"></span>
                            "Searching products..."
                        </div>
                    </div>
                }
                .into_any(),
                PanelState::Empty => view! {
                    <div class="search-results">
                        <div class="search-results__status">"No products found"</div>
                    </div>
                }
                .into_any(),
                PanelState::Results => view! {
                    <div class="search-results" role="listbox">
                        {products
                            .get()
                            .into_iter()
                            .map(|product| {
                                view! { <SearchResultItem product=product on_select=on_select/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }
        }}
    }
}

#[component]
fn SearchResultItem(product: Product, on_select: Callback<Product>) -> impl IntoView {
    let title = product.title.clone();
    let description = product.short_description(DESCRIPTION_PREVIEW_CHARS);
    let price = product.price_display();
    let thumbnail = product.thumbnail.clone();
    let aria = format!("Select product: {}", title);

    view! {
        <div
            class="search-results__item"
            role="button"
            aria-label=aria
            on:click=move |_| on_select.run(product.clone())
        >
            <img class="search-results__thumb" src=thumbnail alt=title.clone() loading="lazy"/>
            <div class="search-results__info">
                <h4 class="search-results__title">{title}</h4>
                <p class="search-results__description">{description}</p>
                <span class="search-results__price">{price}</span>
            </div>
        </div>
    }
}
