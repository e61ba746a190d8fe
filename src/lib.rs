//! Annadaata Agro - rice manufacturer website
//!
//! Single-page marketing site with a product lightbox, built with Leptos
//! (SSR + hydration) and served by axum.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
