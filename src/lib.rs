/// Wayfinder - Wayback Machine URL explorer
/// Built with Rust + WASM + Yew

pub mod cdx;
pub mod config;
pub mod domain;
pub mod error;
pub mod state;
pub mod tree;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export domain validation for JavaScript access
#[wasm_bindgen]
pub fn is_valid_domain(domain: &str) -> bool {
    domain::is_valid_domain(domain)
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
