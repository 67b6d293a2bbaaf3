//! Site header.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__logo" href="/" aria-label="Shopfront home">
                    "Shopfront"
                </a>
                <SearchBar/>
            </div>
        </header>
    }
}
