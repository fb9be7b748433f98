//! # storefront
//!
//! Leptos + WASM storefront front-end: a product catalog wired to a
//! third-party checkout widget, plus a persistent client-side wishlist.
//!
//! The wishlist is the stateful core. `state::wishlist` holds the model,
//! reducer and store; `state::wishlist_context` exposes separate read and
//! dispatch capabilities to components; `util::local_storage` is the
//! best-effort durable bridge underneath.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
