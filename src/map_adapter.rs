//! Map Adapter
//!
//! Owns the single map instance and the placemarks currently on it.
//! Idea placemarks are always cleared and rebuilt as a whole; the user
//! location placemark is tracked separately and survives idea refreshes.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::balloon::{idea_balloon_body, idea_balloon_header};
use crate::config::AppConfig;
use crate::error::js_error_text;
use crate::labels::{priority_preset, USER_LOCATION_PRESET};
use crate::models::{Coords, Idea};
use crate::ymaps::{self, Clusterer, GeoObject, GeocodeResult, GeolocationControl, MapEvent, Placemark, YMap};

pub const ADDRESS_NOT_FOUND: &str = "Адрес не найден";

// ========================
// Widget option objects
// ========================

#[derive(Serialize)]
struct MapState<'a> {
    center: [f64; 2],
    zoom: f64,
    controls: &'a [&'a str],
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct PlacemarkProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    hint_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    balloon_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    balloon_content_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    balloon_content_body: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlacemarkOptions<'a> {
    preset: &'a str,
    balloon_close_button: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClustererOptions<'a> {
    cluster_disable_click_zoom: bool,
    cluster_open_balloon_on_click: bool,
    cluster_balloon_content_layout: &'a str,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

fn coords_js(coords: Coords) -> JsValue {
    to_js(&coords.to_array())
}

fn new_placemark(coords: Coords, properties: &PlacemarkProperties, preset: &str) -> JsValue {
    let options = PlacemarkOptions { preset, balloon_close_button: true };
    Placemark::new(&coords_js(coords), &to_js(properties), &to_js(&options)).into()
}

// ========================
// Adapter
// ========================

/// Map instance plus the objects we have put on it
#[derive(Default)]
pub struct MapAdapter {
    map: Option<YMap>,
    /// Idea placemarks currently shown
    placemarks: Vec<JsValue>,
    /// Clusterer holding `placemarks`, when clustering is on
    cluster_layer: Option<JsValue>,
    user_placemark: Option<JsValue>,
}

impl MapAdapter {
    pub fn attach(&mut self, map: YMap) {
        self.map = Some(map);
    }

    pub fn set_center(&self, coords: Coords, zoom: f64) {
        if let Some(map) = &self.map {
            map.set_center(&coords_js(coords), zoom);
        }
    }

    /// Add a standalone marker straight to the map (not tracked as an idea marker)
    pub fn place_marker(&self, coords: Coords, hint: &str, balloon: &str, preset: &str) -> Option<JsValue> {
        let map = self.map.as_ref()?;
        let properties = PlacemarkProperties {
            hint_content: Some(hint.to_string()),
            balloon_content: Some(balloon.to_string()),
            ..Default::default()
        };
        let placemark = new_placemark(coords, &properties, preset);
        map.geo_objects().add(&placemark);
        Some(placemark)
    }

    /// Remove every idea marker (and the clusterer) from the map
    pub fn clear_markers(&mut self) {
        let Some(map) = &self.map else { return };
        let geo_objects = map.geo_objects();
        if let Some(layer) = self.cluster_layer.take() {
            // Placemarks live inside the clusterer
            geo_objects.remove(&layer);
            self.placemarks.clear();
            return;
        }
        for placemark in self.placemarks.drain(..) {
            geo_objects.remove(&placemark);
        }
    }

    /// Replace the idea markers with one per idea that has coordinates
    pub fn show_ideas(&mut self, ideas: &[Idea], clustering: bool) {
        if self.map.is_none() {
            return;
        }
        self.clear_markers();

        let placemarks: Vec<JsValue> = ideas
            .iter()
            .filter_map(|idea| {
                let coords = idea.coords()?;
                let properties = PlacemarkProperties {
                    hint_content: Some(idea.title.clone()),
                    balloon_content_header: Some(idea_balloon_header(idea)),
                    balloon_content_body: Some(idea_balloon_body(idea)),
                    ..Default::default()
                };
                Some(new_placemark(coords, &properties, priority_preset(idea.display_priority())))
            })
            .collect();

        let Some(map) = &self.map else { return };
        if clustering {
            let clusterer = Clusterer::new(&to_js(&ClustererOptions {
                cluster_disable_click_zoom: true,
                cluster_open_balloon_on_click: true,
                cluster_balloon_content_layout: "cluster#balloonTwoColumns",
            }));
            for placemark in &placemarks {
                clusterer.add(placemark);
            }
            let layer: JsValue = clusterer.into();
            map.geo_objects().add(&layer);
            self.cluster_layer = Some(layer);
        } else {
            let geo_objects = map.geo_objects();
            for placemark in &placemarks {
                geo_objects.add(placemark);
            }
        }
        web_sys::console::log_1(
            &format!("[MAP] Showing {} markers (clustering={})", placemarks.len(), clustering).into(),
        );
        self.placemarks = placemarks;
    }

    /// Put (or move) the "you are here" marker
    pub fn show_user_location(&mut self, coords: Coords) {
        if let (Some(map), Some(old)) = (&self.map, self.user_placemark.take()) {
            map.geo_objects().remove(&old);
        }
        self.user_placemark = self.place_marker(coords, "Вы здесь", "Ваше текущее местоположение", USER_LOCATION_PRESET);
    }
}

/// Create the map once the widget script is ready.
///
/// `on_ready` runs after the map exists; `on_click` gets every map click.
pub fn init_map(
    config: &AppConfig,
    on_ready: impl FnOnce(YMap) + 'static,
    on_click: impl Fn(Coords) + 'static,
) {
    let center = config.default_center.to_array();
    let zoom = config.default_zoom;

    let ready = Closure::once(move || {
        let state = MapState { center, zoom, controls: &["zoomControl", "fullscreenControl"] };
        let map = match YMap::new("map", &to_js(&state)) {
            Ok(map) => map,
            Err(e) => {
                web_sys::console::error_1(&format!("[MAP] Failed to create map: {}", js_error_text(&e)).into());
                return;
            }
        };

        map.controls().add(&GeolocationControl::new().into());

        let click = Closure::<dyn FnMut(MapEvent)>::new(move |ev: MapEvent| {
            match serde_wasm_bindgen::from_value::<[f64; 2]>(ev.get("coords")) {
                Ok([lat, lon]) => on_click(Coords::new(lat, lon)),
                Err(e) => web_sys::console::warn_1(&format!("[MAP] Click without coords: {}", e).into()),
            }
        });
        map.events().add("click", click.as_ref().unchecked_ref());
        // Lives as long as the page
        click.forget();

        web_sys::console::log_1(&"[MAP] Map ready".into());
        on_ready(map);
    });

    let loaded = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("ymaps"))
        .map(|ns| !ns.is_undefined())
        .unwrap_or(false);
    if !loaded {
        web_sys::console::error_1(&"[MAP] ymaps script is not loaded".into());
        return;
    }
    ymaps::ready(ready.as_ref().unchecked_ref());
    ready.forget();
}

/// Address line for a coordinate pair, or [`ADDRESS_NOT_FOUND`]
pub async fn reverse_geocode(coords: Coords) -> Result<String, String> {
    let thenable = ymaps::geocode(&coords_js(coords)).map_err(|e| js_error_text(&e))?;
    // ymaps returns its own promise type; adopt it into a native one
    let promise = js_sys::Promise::resolve(&thenable);
    let result = JsFuture::from(promise).await.map_err(|e| js_error_text(&e))?;
    let result: GeocodeResult = result.unchecked_into();

    let first = result.geo_objects().get(0);
    if first.is_undefined() || first.is_null() {
        return Ok(ADDRESS_NOT_FOUND.to_string());
    }
    let address = first.unchecked_into::<GeoObject>().get_address_line();
    Ok(address)
}
