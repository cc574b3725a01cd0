//! # client
//!
//! Leptos + WASM frontend for the campaign console.
//!
//! This crate contains pages, components, view state, and REST helpers for
//! managing campaigns, their injectables, and whitelist domains. The server
//! crate renders it with SSR; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
