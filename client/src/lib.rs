//! # client
//!
//! Leptos + WASM frontend for Universe: the landing page, the internship
//! feed, the engineering-school directory with its admission-chance panel,
//! account pages, and the admin dashboards.
//!
//! Pages own route-level state, components render props and emit callbacks,
//! `net::api` talks to the axum backend, and the university catalog is read
//! straight from the shared `models` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    leptos::mount::hydrate_body(app::App);
}
