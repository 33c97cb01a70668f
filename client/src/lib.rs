//! # client
//!
//! Leptos + WASM frontend for the recipe book.
//!
//! This crate contains the page, components, client state, REST client, and
//! theme persistence. The `hydrate` feature builds the browser bundle; `ssr`
//! is enabled by the host server to render the initial HTML.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
