//! # client
//!
//! Leptos + WASM frontend for the Acme shell: an email/password auth gate in
//! front of a three-page sidebar workspace.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the remote auth endpoints. The root `acme-shell` crate renders
//! it on the server (`ssr`) and the browser hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
