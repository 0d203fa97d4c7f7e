//! Idea Map Frontend Entry Point

mod api;
mod app;
mod balloon;
mod components;
mod config;
mod context;
mod draft;
mod error;
mod filter;
mod format;
mod geolocation;
mod labels;
mod map_adapter;
mod models;
mod notify;
mod refresh;
mod store;
mod ymaps;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[APP] Starting idea map".into());
    mount_to_body(App);
}
