//! Idea Map App
//!
//! Root component: builds the store and context, starts the map and the first
//! load, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;

use crate::balloon::VOTE_HOOK;
use crate::components::{FilterBar, IdeaForm, IdeaList, MapPanel, StatsPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::filter::visible_ideas;
use crate::geolocation::capture_position;
use crate::map_adapter::init_map;
use crate::store::{AppState, AppStateStoreFields};

/// Expose `window.voteForIdea(id)` for balloon buttons
fn register_vote_hook(ctx: AppContext) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hook = Closure::<dyn Fn(JsValue)>::new(move |id: JsValue| {
        match id.as_string().or_else(|| id.as_f64().map(|n| n.to_string())) {
            Some(id) => ctx.vote(id),
            None => web_sys::console::warn_1(&"[VOTE] voteForIdea called without an id".into()),
        }
    });
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(VOTE_HOOK), hook.as_ref()) {
        web_sys::console::error_1(&e);
        return;
    }
    // Balloon HTML may call it at any time
    hook.forget();
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let config = AppConfig::load();
    web_sys::console::log_1(&format!("[APP] API at {}", config.api_url).into());

    let visible = Memo::new(move |_| {
        let filter = store.filter().get();
        let load_failed = store.load_error().with(Option::is_some);
        store.ideas().with(|ideas| visible_ideas(ideas, &filter, load_failed))
    });

    let ctx = AppContext::new(store, config, visible);
    provide_context(ctx);

    // Create the map once the container is mounted
    Effect::new(move |_| {
        init_map(
            &ctx.config(),
            move |map| {
                ctx.update_map(|m| m.attach(map));
                store.map_ready().set(true);
            },
            move |coords| ctx.pick_location(coords),
        );
    });

    // Markers follow the filtered view and the clustering toggle
    Effect::new(move |_| {
        if !store.map_ready().get() {
            return;
        }
        let clustering = store.clustering().get();
        visible.with(|ideas| ctx.update_map(|m| m.show_ideas(ideas, clustering)));
    });

    Effect::new(move |_| {
        if !store.map_ready().get() {
            return;
        }
        if let Some(location) = store.user_location().get() {
            ctx.center_on(location, ctx.config().user_zoom);
            ctx.update_map(|m| m.show_user_location(location));
        }
    });

    capture_position(move |coords| store.user_location().set(Some(coords)));
    register_vote_hook(ctx);
    ctx.refresh();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Карта идей"</h1>
                <StatsPanel />
            </header>

            <main class="main-content">
                <MapPanel />
                <aside class="sidebar">
                    <FilterBar />
                    <IdeaList />
                </aside>
            </main>

            <section class="form-section">
                <IdeaForm />
            </section>
        </div>
    }
}
