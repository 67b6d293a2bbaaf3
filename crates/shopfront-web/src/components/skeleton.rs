//! Loading skeletons.

use leptos::prelude::*;

/// Number of placeholder cards shown while a grid loads.
pub const SKELETON_COUNT: usize = 6;

#[component]
pub fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card product-card--skeleton" aria-hidden="true">
            <div class="skeleton skeleton--image"></div>
            <div class="product-card__content">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--price"></div>
            </div>
        </div>
    }
}

#[component]
pub fn ProductGridSkeleton() -> impl IntoView {
    view! {
        {(0..SKELETON_COUNT)
            .map(|_| view! { <ProductCardSkeleton/> })
            .collect::<Vec<_>>()}
    }
}
