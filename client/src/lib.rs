//! # threatdash-client
//!
//! Leptos + WASM single-page frontend for the ThreatDash auth flow: signup,
//! login with a splash hand-off, and a dashboard gated on a stored access
//! token.
//!
//! Session state and routing decisions are plain Rust and test natively; the
//! browser-only pieces (HTTP, `localStorage`, timers, mounting) sit behind the
//! `csr` feature.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
