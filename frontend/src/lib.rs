//! Admin dashboard front end: OTP sign-in, a persisted session and guarded
//! routes, rendered client-side with Leptos.

use leptos::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Installs logging and the panic hook, warms the runtime config and mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting admin dashboard");

    // Requests await the config themselves; mounting does not wait for it.
    spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", err).into());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    run();
}
