//! Application root and page sections.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::components::{Header, ProductGrid};
use crate::hooks::{use_featured_products, use_new_arrivals};
use crate::query::provide_query_client;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_query_client();

    view! {
        <Title text="Shopfront"/>
        <Meta name="description" content="Shopfront - featured products and new arrivals"/>

        <div class="app">
            <Header/>
            <main class="container">
                <ErrorBoundary fallback=|_| view! { <ErrorFallback/> }>
                    <FeaturedProducts/>
                    <NewArrivals/>
                </ErrorBoundary>
            </main>
        </div>
    }
}

#[component]
fn FeaturedProducts() -> impl IntoView {
    let products = use_featured_products();
    let items = Signal::derive(move || {
        products
            .data
            .get()
            .map(|page| page.products)
            .unwrap_or_default()
    });

    view! {
        <section class="section section--featured">
            <h2 class="section__title">"Featured Products"</h2>
            <ProductGrid
                products=items
                is_loading=products.is_loading
                error=products.error
                on_retry=products.refetch
            />
        </section>
    }
}

#[component]
fn NewArrivals() -> impl IntoView {
    let products = use_new_arrivals();
    let items = Signal::derive(move || {
        products
            .data
            .get()
            .map(|page| page.products)
            .unwrap_or_default()
    });

    view! {
        <section class="section section--new-arrivals">
            <h2 class="section__title">"New Arrivals"</h2>
            <ProductGrid
                products=items
                is_loading=products.is_loading
                error=products.error
                on_retry=products.refetch
            />
        </section>
    }
}

/// Catch-all fallback: one broken subtree must not take the page down.
#[component]
fn ErrorFallback() -> impl IntoView {
    let reload = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="error-fallback" role="alert">
            <h2>"Something went wrong"</h2>
            <p>"An unexpected error occurred. Try refreshing the page."</p>
            <button type="button" class="error-display__retry" on:click=reload>
                "Refresh"
            </button>
        </div>
    }
}
