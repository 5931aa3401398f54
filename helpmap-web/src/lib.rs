#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod pages;
pub mod paths;
pub mod router;
pub mod storage;
pub mod timers;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        crate::dom::console_error(&format!("logger already installed: {err}"));
    }
    // Apply the saved theme before the first paint.
    let mode = helpmap_core::ThemeMode::load(&storage::BrowserStore);
    app::apply_theme(mode);
    log::info!("helpmap starting against {}", helpmap_core::ApiConfig::default().base_url);
    yew::Renderer::<app::App>::new().render();
}
