//! # linkdir-client
//!
//! Leptos view layer for LinkDir: the landing page, the dashboard shell,
//! the dashboard overview, and a component gallery.
//!
//! Every page renders compiled-in display records from `data`. All
//! interactive affordances (drawer, user menu, theme toggle) are CSS-driven,
//! so the server-rendered HTML works without hydration.

pub mod app;
pub mod components;
pub mod data;
pub mod models;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod test_support;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
