//! Search text input with clear button.

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    value: Signal<String>,
    results_visible: Signal<bool>,
    on_input: Callback<String>,
    on_clear: Callback<()>,
    on_focus: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search__input-wrap">
            <span class="search__icon" aria-hidden="true">"🔍"</span>
            <input
                type="text"
                class="search__input"
                placeholder="Search for products"
                aria-label="Search products"
                aria-haspopup="listbox"
                aria-expanded=move || results_visible.get().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| on_focus.run(())
            />
            <Show when=move || value.with(|v| !v.is_empty())>
                <button
                    type="button"
                    class="search__clear"
                    aria-label="Clear search"
                    on:click=move |_| on_clear.run(())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
