//! # queryable-console
//!
//! Leptos + WASM browser client for the queryable proxy backend.
//!
//! The crate owns the client side of three flows: registration, login, and
//! the dashboard query console. Session state lives in browser storage behind
//! an injected `SessionStore`; the backend is reached through the
//! `QueryBackend` trait so flows and entry guards are testable natively.
//!
//! Browser-only code is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic hook + logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = config::ClientConfig::from_build_env();
    console_log::init_with_level(config.log_level).ok();
    log::info!("queryable console starting (api base: {:?})", config.api_base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
