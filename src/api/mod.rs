//! HTTP API Client
//!
//! Bindings to the ideas REST API and the external geocoder, organized by
//! domain. Everything goes through `fetch`.

mod ideas;
mod geocoder;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::ApiError;
use crate::models::{AnalyticsSummary, Idea, NewIdea, VoteType};

pub use ideas::HttpIdeasApi;
pub use geocoder::suggest_addresses;

/// Same characters `encodeURIComponent` leaves alone
pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Remote idea collection
///
/// Single-threaded (wasm), so futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait IdeasApi {
    async fn list_ideas(&self, limit: u32) -> Result<Vec<Idea>, ApiError>;
    async fn create_idea(&self, idea: &NewIdea) -> Result<(), ApiError>;
    async fn vote(&self, idea_id: &str, vote_type: VoteType) -> Result<(), ApiError>;
    async fn analytics(&self, period_days: u32) -> Result<AnalyticsSummary, ApiError>;
}

// ========================
// fetch plumbing
// ========================

/// Issue a request and return the body text of a 2xx response
pub(crate) async fn fetch_text(method: &str, url: &str, json_body: Option<String>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::request)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::request)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Request("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let resp: Response = resp_value.dyn_into().map_err(ApiError::network)?;

    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }

    let text = JsFuture::from(resp.text().map_err(ApiError::network)?)
        .await
        .map_err(ApiError::network)?;
    Ok(text.as_string().unwrap_or_default())
}

pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let text = fetch_text("GET", url, None).await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST a JSON body; the response body is not interpreted
pub(crate) async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Request(e.to_string()))?;
    fetch_text("POST", url, Some(body)).await.map(|_| ())
}
