// ABOUTME: Library entry point for the portfolio catalog showcase WASM application
// ABOUTME: Declares the UI modules and provides the hydrate function for browser mounting

mod app;
pub mod components;
pub mod data;
pub mod hooks;
pub mod viewport_port;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(app::App);
}
