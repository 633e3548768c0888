//! # dashboard
//!
//! Leptos + WASM frontend for the operator dashboard. Polls the
//! operator's JSON API, renders list/detail views for the resource kinds
//! it manages, and gates everything behind a token-based login.
//!
//! The `browser` feature pulls in the WASM-only dependencies and the
//! mount entry point; without it the crate builds as a plain rlib so the
//! state machines and decoders can be unit tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic/log forwarding and mount the app.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
