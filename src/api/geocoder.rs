//! Geocoder Lookup
//!
//! Forward geocoding for the address autosuggest dropdown. Talks to the
//! geocoder HTTP endpoint directly, not through the ideas API.

use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

use super::{fetch_text, URI_COMPONENT};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{AddressSuggestion, Coords};

#[derive(Deserialize)]
struct GeocoderEnvelope {
    response: GeocoderBody,
}

#[derive(Deserialize)]
struct GeocoderBody {
    #[serde(rename = "GeoObjectCollection")]
    collection: GeoObjectCollection,
}

#[derive(Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    members: Vec<FeatureMember>,
}

#[derive(Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Deserialize)]
struct GeoObject {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "Point")]
    point: Point,
}

#[derive(Deserialize)]
struct Point {
    /// "lon lat"
    pos: String,
}

fn parse_pos(pos: &str) -> Option<Coords> {
    let mut parts = pos.split_whitespace();
    let lon = parts.next()?.parse::<f64>().ok()?;
    let lat = parts.next()?.parse::<f64>().ok()?;
    Some(Coords::new(lat, lon))
}

pub fn geocoder_url(config: &AppConfig, query: &str) -> String {
    format!(
        "{}?format=json&geocode={}&apikey={}",
        config.geocoder_url,
        utf8_percent_encode(query, URI_COMPONENT),
        utf8_percent_encode(&config.map_api_key, URI_COMPONENT),
    )
}

/// Up to `limit` candidates; entries with an unreadable point are skipped
pub fn parse_geocoder_response(body: &str, limit: usize) -> Result<Vec<AddressSuggestion>, ApiError> {
    let envelope: GeocoderEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .response
        .collection
        .members
        .into_iter()
        .filter_map(|m| {
            let obj = m.geo_object;
            let coords = parse_pos(&obj.point.pos)?;
            let label = match obj.description.as_deref() {
                Some(d) if !d.is_empty() => format!("{} - {}", obj.name, d),
                _ => obj.name.clone(),
            };
            Some(AddressSuggestion { name: obj.name, label, coords })
        })
        .take(limit)
        .collect())
}

pub async fn suggest_addresses(config: &AppConfig, query: &str) -> Result<Vec<AddressSuggestion>, ApiError> {
    let text = fetch_text("GET", &geocoder_url(config, query), None).await?;
    parse_geocoder_response(&text, config.suggest_limit)
}
