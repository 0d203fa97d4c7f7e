//! Idea Filtering
//!
//! Pure derivation of the visible idea list from the two filter selects.

use crate::models::{Category, Idea, Priority};

/// Select value meaning "no restriction on this axis"
pub const ALL: &str = "all";

/// Current filter selections; `None` is "all"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<Category>,
    pub priority: Option<Priority>,
}

impl FilterState {
    /// Build from raw select values. Unrecognized values act like "all".
    pub fn from_selects(category: &str, priority: &str) -> Self {
        Self {
            category: Category::from_key(category),
            priority: Priority::from_key(priority),
        }
    }

    pub fn category_value(&self) -> &'static str {
        self.category.map(Category::key).unwrap_or(ALL)
    }

    pub fn priority_value(&self) -> &'static str {
        self.priority.map(Priority::key).unwrap_or(ALL)
    }

    /// Ideas without a priority never match a specific priority
    pub fn matches(&self, idea: &Idea) -> bool {
        let category_ok = self.category.map_or(true, |c| idea.category == c);
        let priority_ok = self.priority.map_or(true, |p| idea.priority == Some(p));
        category_ok && priority_ok
    }
}

/// Filter ideas, preserving order. Never touches the source.
pub fn apply_filters(ideas: &[Idea], filter: &FilterState) -> Vec<Idea> {
    ideas.iter().filter(|idea| filter.matches(idea)).cloned().collect()
}

/// What both the list and the map show. A failed load shows nothing, so
/// markers never outlive the list they came from.
pub fn visible_ideas(ideas: &[Idea], filter: &FilterState, load_failed: bool) -> Vec<Idea> {
    if load_failed {
        return Vec::new();
    }
    apply_filters(ideas, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_idea(id: &str, category: Category, priority: Option<Priority>) -> Idea {
        Idea {
            id: id.to_string(),
            title: format!("Idea {}", id),
            description: String::new(),
            category,
            priority,
            status: None,
            latitude: Some(54.0),
            longitude: Some(86.0),
            address: None,
            votes_count: None,
            comments_count: None,
            created_at: None,
        }
    }

    fn ids(ideas: &[Idea]) -> Vec<&str> {
        ideas.iter().map(|i| i.id.as_str()).collect()
    }

    fn sample() -> Vec<Idea> {
        vec![
            make_idea("1", Category::Sport, Some(Priority::High)),
            make_idea("2", Category::Ecology, Some(Priority::Low)),
            make_idea("3", Category::Sport, Some(Priority::Low)),
            make_idea("4", Category::Culture, None),
            make_idea("5", Category::Sport, Some(Priority::High)),
        ]
    }

    #[test]
    fn test_sport_high_included_by_sport_all() {
        let ideas = vec![make_idea("1", Category::Sport, Some(Priority::High))];
        let filter = FilterState::from_selects("sport", "all");
        assert_eq!(ids(&apply_filters(&ideas, &filter)), vec!["1"]);

        let filter = FilterState::from_selects("ecology", "all");
        assert!(apply_filters(&ideas, &filter).is_empty());
    }

    #[test]
    fn test_all_all_is_identity() {
        let ideas = sample();
        let filtered = apply_filters(&ideas, &FilterState::default());
        assert_eq!(filtered, ideas);
    }

    #[test]
    fn test_both_axes_preserve_order() {
        let ideas = sample();
        let filter = FilterState::from_selects("sport", "high");
        assert_eq!(ids(&apply_filters(&ideas, &filter)), vec!["1", "5"]);

        let filter = FilterState::from_selects("all", "low");
        assert_eq!(ids(&apply_filters(&ideas, &filter)), vec!["2", "3"]);
    }

    #[test]
    fn test_missing_priority_only_matches_all() {
        let ideas = sample();
        let filter = FilterState::from_selects("culture", "medium");
        assert!(apply_filters(&ideas, &filter).is_empty());

        let filter = FilterState::from_selects("culture", "all");
        assert_eq!(ids(&apply_filters(&ideas, &filter)), vec!["4"]);
    }

    #[test]
    fn test_result_is_exact_subset() {
        let ideas = sample();
        for (c, _) in crate::labels::CATEGORY_OPTIONS.iter().chain([(ALL, "")].iter()) {
            for (p, _) in crate::labels::PRIORITY_OPTIONS.iter().chain([(ALL, "")].iter()) {
                let filter = FilterState::from_selects(c, p);
                let filtered = apply_filters(&ideas, &filter);
                let expected: Vec<&Idea> = ideas.iter().filter(|i| filter.matches(i)).collect();
                assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
                assert!(filtered.iter().all(|i| (*c == ALL || i.category.key() == *c)
                    && (*p == ALL || i.priority.map(Priority::key) == Some(*p))));
            }
        }
        assert_eq!(ideas.len(), 5);
    }

    #[test]
    fn test_select_values_round_trip() {
        let filter = FilterState::from_selects("art", "bogus");
        assert_eq!(filter.category_value(), "art");
        assert_eq!(filter.priority_value(), "all");
    }

    #[test]
    fn test_failed_load_hides_previous_ideas() {
        let ideas = vec![
            make_idea("1", Category::Sport, Some(Priority::High)),
            make_idea("2", Category::Art, None),
        ];
        let filter = FilterState::default();

        assert_eq!(visible_ideas(&ideas, &filter, false).len(), 2);
        assert!(visible_ideas(&ideas, &filter, true).is_empty());
    }
}
