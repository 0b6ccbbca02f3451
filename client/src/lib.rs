//! # client
//!
//! Leptos + WASM frontend for the portfolio site: public pages, the gated
//! admin panel and the mock payment flow.
//!
//! Domain rules live in the `content` crate. This crate binds them to
//! reactive signals, browser storage and the router.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
