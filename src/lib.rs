//! Feature List Generator - marketing landing page
//!
//! Server-rendered Leptos site with two client-side motion behaviors: a
//! headline that cycles through phrases on a timer, and sections that fade
//! in once when scrolled into view.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
