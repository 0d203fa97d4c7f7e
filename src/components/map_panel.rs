//! Map Panel Component
//!
//! Map container plus the heatmap and clustering toggles.

use leptos::prelude::*;

use crate::notify;
use crate::store::{use_app_store, AppStateStoreFields};

fn toggle_class(active: bool) -> &'static str {
    if active { "map-btn active" } else { "map-btn" }
}

#[component]
pub fn MapPanel() -> impl IntoView {
    let store = use_app_store();

    let on_heatmap = move |_| {
        let enabled = !store.heatmap().get_untracked();
        store.heatmap().set(enabled);
        if enabled {
            notify::alert("Тепловая карта включена. Показаны области с наибольшей концентрацией проблем.");
        }
    };

    // Marker re-render follows `clustering` through the map effect
    let on_cluster = move |_| {
        let enabled = !store.clustering().get_untracked();
        store.clustering().set(enabled);
        if enabled {
            notify::alert("Кластеризация включена. Схожие идеи сгруппированы.");
        }
    };

    view! {
        <div class="map-panel">
            <div class="map-controls">
                <button
                    type="button"
                    id="heatmap-toggle"
                    class=move || toggle_class(store.heatmap().get())
                    on:click=on_heatmap
                >
                    <i class="fas fa-fire"></i>" Тепловая карта"
                </button>
                <button
                    type="button"
                    id="cluster-toggle"
                    class=move || toggle_class(store.clustering().get())
                    on:click=on_cluster
                >
                    <i class="fas fa-object-group"></i>" Кластеризация"
                </button>
            </div>
            <div id="map" class="map"></div>
        </div>
    }
}
