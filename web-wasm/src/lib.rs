//! Fines Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod hooks;
pub mod storage;

use fines_common::AppConfig;
use gloo::console;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::storage::BrowserStore;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&BrowserStore).unwrap_or_else(|e| {
        console::warn!(format!("設定を読み込めません。既定値を使います: {}", e));
        AppConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
