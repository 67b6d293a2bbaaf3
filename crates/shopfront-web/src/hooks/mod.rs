//! Reusable reactive hooks.

mod use_click_outside;
mod use_debounce;
mod use_products;

pub use use_click_outside::use_click_outside;
pub use use_debounce::use_debounce;
pub use use_products::{
    use_featured_products, use_new_arrivals, use_product_search, SEARCH_DEBOUNCE_MS,
};
