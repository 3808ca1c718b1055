//! # cybernet-client
//!
//! Leptos + WASM frontend for the CyberNet portal.
//!
//! The `cybernet` crate owns every rule and state transition; this crate only
//! supplies the browser pieces (`fetch` transport, signal-backed store, DOM
//! event wiring) and renders pages and components from the shared
//! `PortalState`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Errors only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
