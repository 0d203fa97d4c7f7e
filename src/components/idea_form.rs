//! Idea Form Component
//!
//! Submission form: title, description, category, address and the picked point.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AddressSuggest;
use crate::context::use_app_context;
use crate::draft::{build_new_idea, DraftFields};
use crate::labels::CATEGORY_OPTIONS;
use crate::notify;
use crate::refresh;
use crate::store::AppStateStoreFields;

const COORDS_PLACEHOLDER: &str = "Кликните на карте, чтобы выбрать место";

#[component]
pub fn IdeaForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let fields = DraftFields {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            coords_text: store.picked_coords().get_untracked(),
            address: store.address().get_untracked(),
        };
        let idea = match build_new_idea(&fields) {
            Ok(idea) => idea,
            Err(e) => {
                notify::alert(&e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            web_sys::console::log_1(&format!("[FORM] Submitting '{}'", idea.title).into());
            match refresh::submit_idea(&ctx.api(), &ctx.config(), &ctx.list_seq(), &idea).await {
                Ok(snapshot) => {
                    ctx.apply_snapshot(snapshot);
                    notify::alert("Идея успешно отправлена!");
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_category.set(String::new());
                    ctx.cancel_pick();
                    store.address().set(String::new());
                    store.picked_coords().set(String::new());
                }
                Err(e) => notify::report_error("FORM", &format!("Ошибка при отправке идеи: {}", e)),
            }
            set_submitting.set(false);
        });
    };

    let on_my_location = move |_| match store.user_location().get_untracked() {
        Some(location) => {
            ctx.center_on(location, ctx.config().user_zoom);
            ctx.pick_location(location);
        }
        None => notify::alert("Местоположение не определено. Проверьте настройки геолокации."),
    };

    let coords_text = move || {
        let text = store.picked_coords().get();
        if text.is_empty() { COORDS_PLACEHOLDER.to_string() } else { text }
    };

    view! {
        <form id="idea-form" class="idea-form" on:submit=on_submit>
            <h2>"Предложить идею"</h2>
            <input
                type="text"
                id="title"
                name="title"
                placeholder="Название"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="description"
                name="description"
                placeholder="Опишите идею"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <select
                id="category"
                name="category"
                prop:value=move || category.get()
                on:change=move |ev| set_category.set(event_target_value(&ev))
            >
                <option value="">"Выберите категорию"</option>
                {CATEGORY_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>

            <AddressSuggest />

            <div class="coords-row">
                <span id="coords" class="coords">{coords_text}</span>
                <button type="button" id="get-location-btn" class="map-btn" on:click=on_my_location>
                    <i class="fas fa-location-arrow"></i>
                    " Моё местоположение"
                </button>
            </div>

            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                {move || if submitting.get() { "Отправка..." } else { "Отправить" }}
            </button>
        </form>
    }
}

