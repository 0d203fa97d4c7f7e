//! Filter Bar Component
//!
//! Category and priority selects; the list and the map both follow them.

use leptos::prelude::*;

use crate::filter::ALL;
use crate::labels::{CATEGORY_OPTIONS, PRIORITY_OPTIONS};
use crate::models::{Category, Priority};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let set_category = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.filter().update(|f| f.category = Category::from_key(&value));
    };
    let set_priority = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.filter().update(|f| f.priority = Priority::from_key(&value));
    };

    view! {
        <div class="filters">
            <select
                id="filter-category"
                prop:value=move || store.filter().get().category_value()
                on:change=set_category
            >
                <option value=ALL>"Все категории"</option>
                {CATEGORY_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <select
                id="filter-priority"
                prop:value=move || store.filter().get().priority_value()
                on:change=set_priority
            >
                <option value=ALL>"Все приоритеты"</option>
                {PRIORITY_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
