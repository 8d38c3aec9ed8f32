//! Call Analyzer Web App (Leptos + WASM)

mod app;
mod components;
mod controller;
pub mod api;
pub mod export;
pub mod theme_store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // ロガーは二重初期化でのみ失敗する
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
