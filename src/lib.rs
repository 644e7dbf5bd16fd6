//! Nexus - marketing site for a field-operations SaaS
//!
//! Server-rendered with Leptos and hydrated in the browser. Page motion runs
//! on a small tween and scroll-trigger engine in [`core::motion`].

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
