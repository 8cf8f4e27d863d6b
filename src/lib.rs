//! # meeting-web
//!
//! Leptos + WASM single-page client for managing meetings, their action
//! items, and a team-metrics dashboard backed by a REST API.
//!
//! This crate contains pages, components, application state, the REST
//! gateway, and shared utilities. Browser-only code is gated behind the
//! `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("meeting-web starting (api base: {})", config::AppConfig::get().api_base_url);
    leptos::mount::mount_to_body(app::App);
}
