//! Idea List Component
//!
//! Filtered ideas as cards; clicking a card flies the map to it.

use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::format::{address_or_default, format_date, preview};
use crate::labels::{category_label, priority_label, status_label};
use crate::models::Idea;
use crate::store::AppStateStoreFields;

const LIST_PREVIEW_CHARS: usize = 100;

#[component]
pub fn IdeaList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let visible = ctx.visible;

    view! {
        <div id="ideas-list" class="ideas-list">
            {move || {
                if let Some(error) = store.load_error().get() {
                    return view! { <p class="ideas-error">{error}</p> }.into_any();
                }
                if visible.with(|ideas| ideas.is_empty()) {
                    return view! { <p class="ideas-empty">"Идей пока нет"</p> }.into_any();
                }
                view! {
                    <For
                        each=move || visible.get()
                        key=|idea| (idea.id.clone(), idea.votes(), idea.comments())
                        children=move |idea| view! { <IdeaCard idea=idea ctx=ctx /> }
                    />
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn IdeaCard(idea: Idea, ctx: AppContext) -> impl IntoView {
    let coords = idea.coords();
    let priority = idea.display_priority();
    let on_click = move |_| match coords {
        Some(coords) => ctx.center_on(coords, ctx.config().focus_zoom),
        None => web_sys::console::log_1(&"[LIST] Idea has no coordinates".into()),
    };

    view! {
        <div class="idea-item" on:click=on_click>
            <div class="idea-header">
                <h3 class="idea-title">{idea.title.clone()}</h3>
                <span class=format!("idea-category {}", idea.category.key())>
                    {category_label(idea.category)}
                </span>
            </div>
            <p class="idea-description">{preview(&idea.description, LIST_PREVIEW_CHARS)}</p>
            <div class="idea-meta">
                <span class="idea-votes">
                    <i class="fas fa-thumbs-up"></i>" "{idea.votes()}
                </span>
                <span class="idea-comments">
                    <i class="fas fa-comment"></i>" "{idea.comments()}
                </span>
                <span class="idea-address">
                    <i class="fas fa-map-marker-alt"></i>" "
                    {address_or_default(idea.address.as_deref()).to_string()}
                </span>
            </div>
            <div class="idea-footer">
                <span class=format!("priority-badge priority-{}", priority.key())>
                    {priority_label(priority)}
                </span>
                {idea.status.map(|s| view! { <span class="idea-status">{status_label(s)}</span> })}
                <span class="idea-date">{format_date(idea.created_at.as_deref())}</span>
            </div>
        </div>
    }
}
