//! Application Context
//!
//! Shared handles and actions provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::{Sequencer, Ticket};

use crate::api::HttpIdeasApi;
use crate::config::AppConfig;
use crate::format::format_coords;
use crate::map_adapter::{reverse_geocode, MapAdapter};
use crate::models::{Coords, Idea};
use crate::notify;
use crate::refresh::{self, Snapshot};
use crate::store::{AppStore, AppStateStoreFields};

pub const LOAD_ERROR: &str = "Ошибка загрузки идей";

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
    map: StoredValue<MapAdapter, LocalStorage>,
    /// Ideas currently shown in both the list and on the map
    pub visible: Memo<Vec<Idea>>,
    /// Tickets for list/counters refreshes
    list_seq: StoredValue<Sequencer>,
    /// Reverse geocoding of picked points
    lookups: StoredValue<AddressLookups>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig, visible: Memo<Vec<Idea>>) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            map: StoredValue::new_local(MapAdapter::default()),
            visible,
            list_seq: StoredValue::new(Sequencer::new()),
            lookups: StoredValue::new(AddressLookups::default()),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> HttpIdeasApi {
        self.config.with_value(|c| HttpIdeasApi::new(c.api_url.clone()))
    }

    pub fn list_seq(&self) -> Sequencer {
        self.list_seq.get_value()
    }

    pub fn with_map<R>(&self, f: impl FnOnce(&MapAdapter) -> R) -> R {
        self.map.with_value(f)
    }

    pub fn update_map(&self, f: impl FnOnce(&mut MapAdapter)) {
        self.map.update_value(f);
    }

    pub fn center_on(&self, coords: Coords, zoom: f64) {
        self.with_map(|m| m.set_center(coords, zoom));
    }

    /// Reload ideas and counters from the server
    pub fn refresh(&self) {
        let ctx = *self;
        spawn_local(async move {
            let snapshot = refresh::refresh(&ctx.api(), &ctx.config(), &ctx.list_seq()).await;
            ctx.apply_snapshot(snapshot);
        });
    }

    /// Write a refresh result into the store; `None` means it was superseded
    pub fn apply_snapshot(&self, snapshot: Option<Snapshot>) {
        let Some(Snapshot { ideas, summary }) = snapshot else {
            web_sys::console::log_1(&"[SYNC] Dropping superseded refresh".into());
            return;
        };

        match ideas {
            Ok(ideas) => {
                web_sys::console::log_1(&format!("[SYNC] Loaded {} ideas", ideas.len()).into());
                self.store.ideas().set(ideas);
                self.store.load_error().set(None);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[SYNC] Ошибка загрузки идей: {}", e).into());
                self.store.load_error().set(Some(LOAD_ERROR.to_string()));
            }
        }

        match summary {
            Ok(summary) => self.store.summary().set(summary),
            Err(e) => web_sys::console::error_1(&format!("[SYNC] Ошибка загрузки статистики: {}", e).into()),
        }
    }

    /// Use a point as the idea location: fill the coordinate field and look up its address
    pub fn pick_location(&self, coords: Coords) {
        self.store.picked_coords().set(format_coords(coords));

        let ctx = *self;
        let lookups = self.lookups.get_value();
        let ticket = lookups.start();
        spawn_local(async move {
            let result = reverse_geocode(coords).await;
            if !lookups.accepts(ticket) {
                web_sys::console::log_1(&"[MAP] Dropping superseded address lookup".into());
                return;
            }
            match result {
                Ok(address) => ctx.store.address().set(address),
                Err(e) => web_sys::console::error_1(&format!("[MAP] Reverse geocoding failed: {}", e).into()),
            }
        });
    }

    /// The address was set some other way; a pending lookup must not overwrite it
    pub fn cancel_pick(&self) {
        self.lookups.with_value(AddressLookups::supersede);
    }

    /// Up-vote from a map balloon, then refresh everything
    pub fn vote(&self, idea_id: String) {
        let ctx = *self;
        spawn_local(async move {
            web_sys::console::log_1(&format!("[VOTE] Voting for {}", idea_id).into());
            match refresh::upvote(&ctx.api(), &ctx.config(), &ctx.list_seq(), &idea_id).await {
                Ok(snapshot) => {
                    ctx.apply_snapshot(snapshot);
                    notify::alert("Ваш голос учтён!");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[VOTE] {}", e).into());
                    notify::alert("Ошибка при голосовании");
                }
            }
        });
    }
}

/// Reverse-geocoding requests for picked points.
///
/// Only the latest lookup may write the address, and any manual change to the
/// address (typing, choosing a suggestion, clearing the form) supersedes it.
#[derive(Clone, Debug, Default)]
pub struct AddressLookups {
    seq: Sequencer,
}

impl AddressLookups {
    pub fn start(&self) -> Ticket {
        self.seq.issue()
    }

    pub fn supersede(&self) {
        self.seq.issue();
    }

    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.seq.is_current(ticket)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
