//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::FilterState;
use crate::models::{AnalyticsSummary, Coords, Idea};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last idea list fetched from the server, unfiltered
    pub ideas: Vec<Idea>,
    /// Set when the last list fetch failed
    pub load_error: Option<String>,
    pub filter: FilterState,
    pub summary: AnalyticsSummary,
    pub clustering: bool,
    /// Visual toggle only
    pub heatmap: bool,
    /// True once the map widget has been created
    pub map_ready: bool,
    /// Captured once at startup
    pub user_location: Option<Coords>,
    /// Coordinate display text ("lat, lon"), filled by map clicks and suggestions
    pub picked_coords: String,
    /// Address field contents
    pub address: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
