//! UI Components
//!
//! Leptos components for the idea map page.

mod idea_form;
mod address_suggest;
mod idea_list;
mod filter_bar;
mod map_panel;
mod stats_panel;

pub use idea_form::IdeaForm;
pub use address_suggest::AddressSuggest;
pub use idea_list::IdeaList;
pub use filter_bar::FilterBar;
pub use map_panel::MapPanel;
pub use stats_panel::StatsPanel;
