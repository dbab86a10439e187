//! # client
//!
//! Leptos + WASM frontend for the box-shadow generator.
//!
//! The page binds native inputs to a [`shadow::ShadowStateController`]
//! through signal-backed surfaces (see [`state::generator`]). The same
//! components render on the server for the first paint and hydrate in the
//! browser, where input events and the clipboard become live.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
