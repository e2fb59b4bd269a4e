//! DOM helpers for the chat widget. Require a browser environment.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Whether `ev` was dispatched at `root` or one of its descendants.
#[cfg(feature = "csr")]
pub fn event_within(ev: &web_sys::Event, root: &web_sys::Element) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

/// Scroll `el` so its last child is visible.
#[cfg(feature = "csr")]
pub fn scroll_to_bottom(el: &web_sys::Element) {
    el.set_scroll_top(el.scroll_height());
}
