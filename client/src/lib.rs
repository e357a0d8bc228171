//! # portal-client
//!
//! Leptos + WASM frontend for the personal health dashboard.
//!
//! The crate splits into a native-testable core and a thin browser layer:
//! `profile` aggregates the five record collections and renders the sidebar
//! panels as view models, `net` holds the record store, session and
//! geocoding adapters, and `error` maps every failure to one log line and at
//! most one toast. `components` and `pages` only lay out state.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod notify;
pub mod pages;
pub mod profile;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
