//! Product grid with mutually exclusive visual states.

use leptos::prelude::*;
use shopfront_data::{ApiError, Product};

use crate::components::error_display::ErrorDisplay;
use crate::components::product_card::ProductCard;
use crate::components::skeleton::ProductGridSkeleton;

/// Which of the grid's mutually exclusive states to render.
///
/// Strict priority order: loading over error over empty over populated.
/// Every data-bearing list in the app follows this contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    Loading,
    Error,
    Empty,
    Populated,
}

impl GridState {
    pub fn from_parts(is_loading: bool, has_error: bool, count: usize) -> Self {
        if is_loading {
            GridState::Loading
        } else if has_error {
            GridState::Error
        } else if count == 0 {
            GridState::Empty
        } else {
            GridState::Populated
        }
    }
}

#[component]
pub fn ProductGrid(
    products: Signal<Vec<Product>>,
    is_loading: Signal<bool>,
    error: Signal<Option<ApiError>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="product-grid">
            {move || {
                let state = GridState::from_parts(
                    is_loading.get(),
                    error.with(|e| e.is_some()),
                    products.with(|p| p.len()),
                );
                match state {
                    GridState::Loading => view! { <ProductGridSkeleton/> }.into_any(),
                    GridState::Error => {
                        let message = error
                            .get()
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "Something went wrong.".to_string());
                        view! { <ErrorDisplay message=message on_retry=on_retry/> }.into_any()
                    }
                    GridState::Empty => view! {
                        <div class="product-grid__empty">
                            <h3>"No products found"</h3>
                            <p>"Try adjusting your search or check back later."</p>
                        </div>
                    }
                    .into_any(),
                    GridState::Populated => view! {
                        {products
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect::<Vec<_>>()}
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_overrides_everything() {
        assert_eq!(GridState::from_parts(true, true, 0), GridState::Loading);
        assert_eq!(GridState::from_parts(true, false, 5), GridState::Loading);
    }

    #[test]
    fn test_error_overrides_empty_and_populated() {
        assert_eq!(GridState::from_parts(false, true, 0), GridState::Error);
        assert_eq!(GridState::from_parts(false, true, 5), GridState::Error);
    }

    #[test]
    fn test_empty_when_no_results() {
        assert_eq!(GridState::from_parts(false, false, 0), GridState::Empty);
    }

    #[test]
    fn test_populated_otherwise() {
        assert_eq!(GridState::from_parts(false, false, 1), GridState::Populated);
    }
}
