//! Runtime Configuration
//!
//! Compiled defaults, optionally overridden by a `window.IDEA_MAP_CONFIG`
//! object set by the hosting page before the wasm bundle starts:
//!
//! ```js
//! window.IDEA_MAP_CONFIG = { apiUrl: "https://example.org/api", defaultZoom: 13 };
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::models::Coords;

const CONFIG_GLOBAL: &str = "IDEA_MAP_CONFIG";
const DEFAULT_MAP_API_KEY: &str = "784034b0-cc45-44e6-b8bd-e3496cb837b7";
const DEFAULT_GEOCODER_URL: &str = "https://geocode-maps.yandex.ru/1.x/";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the ideas API, no trailing slash
    pub api_url: String,
    pub map_api_key: String,
    pub geocoder_url: String,
    pub default_center: Coords,
    pub default_zoom: f64,
    /// Zoom used when jumping to an idea or a picked address
    pub focus_zoom: f64,
    /// Zoom used when jumping to the user's location
    pub user_zoom: f64,
    pub ideas_limit: u32,
    pub analytics_period_days: u32,
    pub suggest_debounce_ms: u32,
    pub suggest_min_chars: usize,
    pub suggest_limit: usize,
}

/// Partial config read from the page
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigOverrides {
    api_url: Option<String>,
    map_api_key: Option<String>,
    geocoder_url: Option<String>,
    default_center: Option<[f64; 2]>,
    default_zoom: Option<f64>,
    ideas_limit: Option<u32>,
    analytics_period_days: Option<u32>,
    suggest_debounce_ms: Option<u32>,
}

impl AppConfig {
    /// Defaults with the API mounted under `{origin}/api`
    pub fn with_origin(origin: &str) -> Self {
        Self {
            api_url: format!("{}/api", origin.trim_end_matches('/')),
            map_api_key: DEFAULT_MAP_API_KEY.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            default_center: Coords::new(54.001, 37.001),
            default_zoom: 12.0,
            focus_zoom: 16.0,
            user_zoom: 14.0,
            ideas_limit: 50,
            analytics_period_days: 365,
            suggest_debounce_ms: 500,
            suggest_min_chars: 3,
            suggest_limit: 5,
        }
    }

    fn apply(mut self, o: ConfigOverrides) -> Self {
        if let Some(url) = o.api_url {
            self.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = o.map_api_key {
            self.map_api_key = key;
        }
        if let Some(url) = o.geocoder_url {
            self.geocoder_url = url;
        }
        if let Some([lat, lon]) = o.default_center {
            self.default_center = Coords::new(lat, lon);
        }
        if let Some(zoom) = o.default_zoom {
            self.default_zoom = zoom;
        }
        if let Some(limit) = o.ideas_limit {
            self.ideas_limit = limit;
        }
        if let Some(days) = o.analytics_period_days {
            self.analytics_period_days = days;
        }
        if let Some(ms) = o.suggest_debounce_ms {
            self.suggest_debounce_ms = ms;
        }
        self
    }

    /// Read origin and overrides from the browser window
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::with_origin("");
        };
        let origin = window.location().origin().unwrap_or_default();
        let base = Self::with_origin(&origin);

        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return base;
        }
        match serde_wasm_bindgen::from_value::<ConfigOverrides>(raw) {
            Ok(overrides) => {
                web_sys::console::log_1(&"[CONFIG] Applied window.IDEA_MAP_CONFIG".into());
                base.apply(overrides)
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring malformed {}: {}", CONFIG_GLOBAL, e).into());
                base
            }
        }
    }
}
