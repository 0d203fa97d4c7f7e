//! Stats Panel Component
//!
//! Aggregate counters from the analytics endpoint.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_app_store();
    let summary = move || store.summary().get();

    view! {
        <div class="stats-panel">
            <div class="stat">
                <span class="stat-value" id="total-ideas">{move || summary().total_ideas}</span>
                <span class="stat-label">"Всего идей"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="active-ideas">{move || summary().active_ideas}</span>
                <span class="stat-label">"Активных"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="completed-ideas">{move || summary().completed_ideas}</span>
                <span class="stat-label">"Реализовано"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="total-users">{move || summary().total_users}</span>
                <span class="stat-label">"Участников"</span>
            </div>
        </div>
    }
}
