//! Debounced value propagation.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Delay propagation of a changing value until `delay_ms` elapses without a
/// new change.
///
/// Every change resets the timer, so a burst of rapid changes emits exactly
/// one value: the last one. The pending timer is cancelled when the owning
/// scope is disposed, so a torn-down component can never receive a late
/// emission.
pub fn use_debounce(value: Signal<String>, delay_ms: u32) -> Signal<String> {
    let (debounced, set_debounced) = signal(value.get_untracked());
    // Raw timeout handle; cleared whenever the timer is reset or the scope
    // is disposed.
    let pending = RwSignal::new(None::<i32>);

    Effect::new(move |prev: Option<String>| {
        let current = value.get();
        // First run only seeds the initial value.
        let Some(prev) = prev else {
            return current;
        };
        if prev == current {
            return current;
        }

        if let Some(id) = pending.get_untracked() {
            clear_timeout(id);
        }
        let emitted = current.clone();
        let id = set_timeout(delay_ms, move || {
            set_debounced.set(emitted);
            let _ = pending.try_set(None);
        });
        pending.set(id);
        current
    });

    on_cleanup(move || {
        if let Some(id) = pending.get_untracked() {
            clear_timeout(id);
        }
    });

    debounced.into()
}

fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let closure = Closure::once(callback);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .ok()?;
    // The browser owns the callback now; it fires at most once.
    closure.forget();
    Some(id)
}

fn clear_timeout(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(id);
    }
}
