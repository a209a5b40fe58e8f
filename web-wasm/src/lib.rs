//! Nature Gallery Web App (Leptos + WASM)

pub mod api;
mod app;
pub mod components;
pub mod logging;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("nature gallery starting");
    leptos::mount::mount_to_body(app::App);
}
