//! # client
//!
//! Leptos frontend for the Path Guardian landing page. Compiled with `ssr`
//! for server rendering and with `hydrate` for the browser bundle.
//!
//! Section components live in `components`, the route-following simulation
//! they animate comes from the `guardian` crate, and the browser-only timer
//! wiring sits in `util::ticker`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
