//! Build-time API configuration with an optional runtime override.
//!
//! The base URL is baked in from `HR_CONSOLE_API_BASE` so the default
//! deployment talks to the same origin; static deployments can point the
//! bundle elsewhere at runtime through `window.HR_CONSOLE_CONFIG` without
//! rebuilding. Configuration values are public, never secrets.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Frontend configuration resolved once per call site.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL all `/api/...` paths are resolved against; empty means
    /// same-origin relative requests.
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads the build-time value and applies the runtime override if set.
    pub fn load() -> Self {
        let api_base_url = option_env!("HR_CONSOLE_API_BASE").unwrap_or("");
        let mut config = Self {
            api_base_url: api_base_url.to_owned(),
        };
        if let Some(base) = runtime_base_url() {
            config.api_base_url = base;
        }
        config
    }
}

/// Joins a base URL and a path without doubling or dropping slashes.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

#[cfg(feature = "hydrate")]
fn runtime_base_url() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("HR_CONSOLE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = Reflect::get(&config, &JsValue::from_str("api_base_url")).ok()?;
    let raw = value.as_string()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(not(feature = "hydrate"))]
fn runtime_base_url() -> Option<String> {
    None
}
