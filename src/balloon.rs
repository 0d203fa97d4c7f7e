//! Map Balloon Markup
//!
//! HTML for idea placemark balloons. Built with maud so user text is escaped
//! before it reaches the map widget's innerHTML.

use maud::html;

use crate::format::preview;
use crate::labels::{category_label, priority_label};
use crate::models::Idea;

/// Name of the page-global vote hook the balloon button calls
pub const VOTE_HOOK: &str = "voteForIdea";

const BALLOON_DESCRIPTION_CHARS: usize = 150;

/// `voteForIdea("<id>")`, with the id JSON-quoted
fn vote_call(idea_id: &str) -> String {
    let quoted = serde_json::to_string(idea_id).unwrap_or_else(|_| "\"\"".to_string());
    format!("{}({})", VOTE_HOOK, quoted)
}

pub fn idea_balloon_body(idea: &Idea) -> String {
    html! {
        p { strong { "Категория:" } " " (category_label(idea.category)) }
        p { strong { "Описание:" } " " (preview(&idea.description, BALLOON_DESCRIPTION_CHARS)) }
        p { strong { "Приоритет:" } " " (priority_label(idea.display_priority())) }
        p { strong { "Голосов:" } " " (idea.votes()) }
        button class="map-btn" onclick=(vote_call(&idea.id)) {
            i class="fas fa-thumbs-up" {}
            " Поддержать"
        }
    }
    .into_string()
}

/// Balloon header is plain text in the widget, but still HTML-rendered
pub fn idea_balloon_header(idea: &Idea) -> String {
    html! { (idea.title) }.into_string()
}
