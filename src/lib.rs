use wasm_bindgen::prelude::*;

mod macros; // debug_log!, require_element!

mod camera;
mod command_executors;
mod components;
pub mod constants;
mod dom_utils;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
mod pages;
pub mod reducers;
pub mod router;
pub mod state;
mod toast;
mod ui;
pub mod update;
pub mod utils;
mod views;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

use messages::Message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Endpoint URLs baked in at build time; the host page may still override
    // them through `init_api_config_js`
    network::init_api_config();

    // Create base UI elements (header, nav, page container)
    ui::setup::create_base_ui(&document)?;

    let missing = network::config::current().missing();
    if !missing.is_empty() {
        let msg = format!("API endpoint not configured: {}", missing.join(", "));
        web_sys::console::warn_1(&msg.clone().into());
        toast::warning(&msg);
    }

    router::install_hash_listener()?;

    // Initial render for whatever hash the page was opened on
    state::dispatch_global_message(Message::Navigate(router::current_route()));

    Ok(())
}
