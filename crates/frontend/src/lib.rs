pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::AppConfig;

/// Mounts `App` into the element matched by `config.mount_selector`.
///
/// Fails when the host document has no such element. The mount handle is
/// leaked so the app lives as long as the page.
pub fn mount_app(config: AppConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let host = document
        .query_selector(config.mount_selector)?
        .ok_or_else(|| {
            JsValue::from_str(&format!(
                "mount target {} not found in document",
                config.mount_selector
            ))
        })?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(JsValue::from)?;

    log::debug!(
        "mounting app into {} ({:?} variant)",
        config.mount_selector,
        config.variant
    );

    leptos::mount::mount_to(host, move || view! { <app::App config=config /> }).forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_app(AppConfig::default()).inspect_err(|e| {
        log::error!("bootstrap failed: {:?}", e);
    })
}
