//! Error state with a manual retry action.

use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(
    /// Heading above the error message.
    #[prop(optional, default = "Error loading products")]
    title: &'static str,
    /// Human-readable error message.
    message: String,
    /// Re-triggers the failed fetch.
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <h3 class="error-display__title">{title}</h3>
            <p class="error-display__message">{message}</p>
            <button
                type="button"
                class="error-display__retry"
                on:click=move |_| on_retry.run(())
            >
                "Try again"
            </button>
        </div>
    }
}
