//! Dismissal listeners: outside click and escape key.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;

/// Run `on_dismiss` whenever the user clicks outside `container` or presses
/// escape.
///
/// Both listeners are window-wide: registered when the calling component
/// mounts and removed on cleanup, whatever the exit path, so an unmounted
/// search bar leaves nothing behind on the window.
pub fn use_click_outside(container: NodeRef<Div>, on_dismiss: Callback<()>) {
    let mouse = window_event_listener(ev::mousedown, move |event: web_sys::MouseEvent| {
        let inside = container
            .get_untracked()
            .map(|el| {
                event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .map(|node| el.contains(Some(&node)))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !inside {
            on_dismiss.run(());
        }
    });

    let keys = window_event_listener(ev::keydown, move |event: web_sys::KeyboardEvent| {
        if event.key() == "Escape" {
            on_dismiss.run(());
        }
    });

    let handles = SendWrapper::new((mouse, keys));
    on_cleanup(move || {
        let (mouse, keys) = handles.take();
        mouse.remove();
        keys.remove();
    });
}
