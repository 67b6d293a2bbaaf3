//! Product card.

use leptos::prelude::*;
use shopfront_data::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image = product.display_image().to_string();
    let price = product.price_display();

    view! {
        <article class="product-card">
            <div class="product-card__image-wrap">
                <img
                    src=image
                    alt=product.title.clone()
                    class="product-card__image"
                    loading="lazy"
                />
            </div>
            <div class="product-card__content">
                <h3 class="product-card__title">{product.title}</h3>
                <p class="product-card__price">{price}</p>
            </div>
        </article>
    }
}
