//! # chatbot-widget
//!
//! Leptos + WASM rendering of the support chat widget: a floating toggle
//! button, a collapsible panel with the transcript, and an input row.
//!
//! Conversation state and the exchange rules come from the `chatbot` crate.
//! Browser-only code (DOM access, `gloo-net`) is gated behind the `csr`
//! feature so the crate also builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod util;

/// WASM entry point: mount the widget into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
