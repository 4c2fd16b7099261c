//! # hr-console
//!
//! Leptos + WASM frontend for a human-resources management console.
//! Authenticated users browse and edit company, department, position,
//! employee and leave-request records through paginated listing pages.
//!
//! The load-bearing pieces are `state::auth` (session lifecycle),
//! `util::guard` (route-access decisions), `util::credentials` (durable
//! token + profile storage) and `state::paged` (the pagination state
//! machine every listing page reuses). Pages and components are thin
//! consumers of those contracts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
