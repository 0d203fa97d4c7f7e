//! Browser Geolocation
//!
//! One-shot position capture through `navigator.geolocation`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Position;

use crate::error::js_error_text;
use crate::models::Coords;

fn finite_coords(lat: f64, lon: f64) -> Option<Coords> {
    (lat.is_finite() && lon.is_finite()).then(|| Coords::new(lat, lon))
}

/// `position.coords.{latitude, longitude}`
fn position_coords(position: &Position) -> Option<Coords> {
    let coords = position.coords();
    finite_coords(coords.latitude(), coords.longitude())
}

/// Ask the browser for the current position once.
///
/// Failure (denied, unavailable, unsupported) is only logged.
pub fn capture_position(on_success: impl FnOnce(Coords) + 'static) {
    let geolocation = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|w| w.navigator().geolocation());
    let geolocation = match geolocation {
        Ok(g) => g,
        Err(e) => {
            web_sys::console::log_1(&format!("[GEO] Геолокация не доступна: {}", js_error_text(&e)).into());
            return;
        }
    };

    let success = Closure::once(move |position: Position| match position_coords(&position) {
        Some(coords) => {
            web_sys::console::log_1(&format!("[GEO] Position {:.6}, {:.6}", coords.lat, coords.lon).into());
            on_success(coords);
        }
        None => web_sys::console::warn_1(&"[GEO] Position without coordinates".into()),
    });
    let failure = Closure::once(move |err: JsValue| {
        web_sys::console::log_1(&format!("[GEO] Геолокация не доступна: {}", js_error_text(&err)).into());
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        success.as_ref().unchecked_ref(),
        Some(failure.as_ref().unchecked_ref()),
    ) {
        web_sys::console::log_1(&format!("[GEO] Геолокация не доступна: {}", js_error_text(&e)).into());
        return;
    }
    // Exactly one of them will run; both live until then
    success.forget();
    failure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_coords() {
        assert_eq!(finite_coords(54.006, 86.636), Some(Coords::new(54.006, 86.636)));
        assert_eq!(finite_coords(f64::NAN, 86.6), None);
        assert_eq!(finite_coords(54.0, f64::INFINITY), None);
    }
}
