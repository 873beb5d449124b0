//! Frontend Configuration
//!
//! Backend settings come from a `window.FIRETODO_CONFIG` object set by
//! `index.html`, falling back to values baked in at build time.

use firetodo_store::config::{
    ENV_API_KEY, ENV_COLLECTION, ENV_DATABASE, ENV_ENDPOINT, ENV_LOG_LEVEL, ENV_PROJECT_ID,
};
use firetodo_store::StoreConfig;
use log::warn;
use wasm_bindgen::JsValue;

const WINDOW_KEY: &str = "FIRETODO_CONFIG";

/// Resolve backend settings, `None` when no source holds a usable project
///
/// A page object that fails validation falls through to the build-time values.
pub fn load() -> Option<StoreConfig> {
    StoreConfig::first_valid([from_window(), from_build_env()])
}

fn from_window() -> Option<StoreConfig> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_KEY)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Malformed {}: {}", WINDOW_KEY, e);
            None
        }
    }
}

fn from_build_env() -> Option<StoreConfig> {
    StoreConfig::from_vars(build_var).ok()
}

/// `FIRETODO_*` values captured when the UI was compiled
fn build_var(name: &str) -> Option<String> {
    let value = match name {
        ENV_PROJECT_ID => option_env!("FIRETODO_PROJECT_ID"),
        ENV_API_KEY => option_env!("FIRETODO_API_KEY"),
        ENV_DATABASE => option_env!("FIRETODO_DATABASE"),
        ENV_COLLECTION => option_env!("FIRETODO_COLLECTION"),
        ENV_ENDPOINT => option_env!("FIRETODO_ENDPOINT"),
        ENV_LOG_LEVEL => option_env!("FIRETODO_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}
