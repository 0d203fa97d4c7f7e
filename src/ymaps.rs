//! Yandex Maps FFI
//!
//! Raw bindings to the global `ymaps` (JS API 2.1). No state, no logic;
//! `map_adapter` wraps these.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Runs the callback once the API script has loaded
    #[wasm_bindgen(js_namespace = ymaps, js_name = ready)]
    pub fn ready(callback: &js_sys::Function) -> JsValue;

    /// Geocode a `[lat, lon]` pair or a free-text query; returns a thenable
    #[wasm_bindgen(js_namespace = ymaps, js_name = geocode, catch)]
    pub fn geocode(request: &JsValue) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ymaps, js_name = Map)]
    pub type YMap;

    #[wasm_bindgen(constructor, js_namespace = ymaps, js_class = "Map", catch)]
    pub fn new(container_id: &str, state: &JsValue) -> Result<YMap, JsValue>;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &YMap, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, getter, js_name = geoObjects)]
    pub fn geo_objects(this: &YMap) -> GeoObjectCollection;

    #[wasm_bindgen(method, getter)]
    pub fn events(this: &YMap) -> EventManager;

    #[wasm_bindgen(method, getter)]
    pub fn controls(this: &YMap) -> ControlCollection;
}

#[wasm_bindgen]
extern "C" {
    /// `map.geoObjects` and `geocodeResult.geoObjects`
    pub type GeoObjectCollection;

    #[wasm_bindgen(method)]
    pub fn add(this: &GeoObjectCollection, object: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &GeoObjectCollection, object: &JsValue);

    #[wasm_bindgen(method)]
    pub fn get(this: &GeoObjectCollection, index: u32) -> JsValue;

    pub type EventManager;

    #[wasm_bindgen(method)]
    pub fn add(this: &EventManager, event: &str, callback: &js_sys::Function);

    /// Event object passed to handlers
    pub type MapEvent;

    #[wasm_bindgen(method)]
    pub fn get(this: &MapEvent, key: &str) -> JsValue;

    pub type ControlCollection;

    #[wasm_bindgen(method)]
    pub fn add(this: &ControlCollection, control: &JsValue);

    /// Result of `ymaps.geocode`
    pub type GeocodeResult;

    #[wasm_bindgen(method, getter, js_name = geoObjects)]
    pub fn geo_objects(this: &GeocodeResult) -> GeoObjectCollection;

    pub type GeoObject;

    #[wasm_bindgen(method, js_name = getAddressLine)]
    pub fn get_address_line(this: &GeoObject) -> String;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ymaps, js_name = Placemark)]
    pub type Placemark;

    #[wasm_bindgen(constructor, js_namespace = ymaps, js_class = "Placemark")]
    pub fn new(geometry: &JsValue, properties: &JsValue, options: &JsValue) -> Placemark;

    #[wasm_bindgen(js_namespace = ymaps, js_name = Clusterer)]
    pub type Clusterer;

    #[wasm_bindgen(constructor, js_namespace = ymaps, js_class = "Clusterer")]
    pub fn new(options: &JsValue) -> Clusterer;

    #[wasm_bindgen(method)]
    pub fn add(this: &Clusterer, object: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["ymaps", "control"], js_name = GeolocationControl)]
    pub type GeolocationControl;

    #[wasm_bindgen(constructor, js_namespace = ["ymaps", "control"], js_class = "GeolocationControl")]
    pub fn new() -> GeolocationControl;
}
