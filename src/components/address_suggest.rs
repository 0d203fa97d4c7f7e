//! Address Suggest Component
//!
//! Address input with a debounced geocoder dropdown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::{use_debounce, Sequencer};

use crate::api::suggest_addresses;
use crate::context::use_app_context;
use crate::format::format_coords;
use crate::models::AddressSuggestion;
use crate::store::AppStateStoreFields;

#[component]
pub fn AddressSuggest() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let config = ctx.config();
    let debouncer = use_debounce(config.suggest_debounce_ms);
    let seq = StoredValue::new(Sequencer::new());
    let (suggestions, set_suggestions) = signal(Vec::<AddressSuggestion>::new());
    let (open, set_open) = signal(false);

    let on_input = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        ctx.cancel_pick();
        store.address().set(query.clone());

        let config = ctx.config();
        debouncer.with_value(|d| {
            d.call(move || {
                let seq = seq.get_value();
                let ticket = seq.issue();
                let query = query.trim().to_string();
                if query.chars().count() < config.suggest_min_chars {
                    set_open.set(false);
                    return;
                }
                spawn_local(async move {
                    let result = suggest_addresses(&config, &query).await;
                    if !seq.is_current(ticket) {
                        web_sys::console::log_1(&format!("[SUGGEST] Dropping stale results for '{}'", query).into());
                        return;
                    }
                    match result {
                        Ok(items) => {
                            set_open.set(!items.is_empty());
                            set_suggestions.set(items);
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("[SUGGEST] {}", e).into());
                            set_open.set(false);
                        }
                    }
                });
            })
        });
    };

    let choose = move |item: AddressSuggestion| {
        // A lookup still in flight must not reopen the dropdown
        seq.with_value(|s| s.issue());
        ctx.cancel_pick();
        store.address().set(item.name.clone());
        store.picked_coords().set(format_coords(item.coords));
        set_open.set(false);
        ctx.center_on(item.coords, ctx.config().focus_zoom);
    };

    view! {
        <div class="address-suggest">
            <input
                type="text"
                id="address"
                name="address"
                placeholder="Начните вводить адрес"
                autocomplete="off"
                prop:value=move || store.address().get()
                on:input=on_input
            />
            <div
                id="address-suggestions"
                class="address-suggestions"
                style:display=move || if open.get() { "block" } else { "none" }
            >
                <For
                    each=move || suggestions.get().into_iter().enumerate()
                    key=|(i, item)| (*i, item.label.clone())
                    children=move |(_, item)| {
                        let label = item.label.clone();
                        view! {
                            <div
                                class="suggestion-item"
                                on:click=move |_| choose(item.clone())
                            >
                                {label}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
