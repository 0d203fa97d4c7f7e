//! Display Tables
//!
//! Fixed label and map-preset lookups for categories, priorities and statuses.

use crate::models::{Category, IdeaStatus, Priority};

/// Category options for selects: (value, label)
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("sport", "Спорт"),
    ("art", "Искусство"),
    ("ecology", "Экология"),
    ("infrastructure", "Инфраструктура"),
    ("education", "Образование"),
    ("culture", "Культура"),
    ("other", "Другое"),
];

/// Priority options for selects: (value, label)
pub const PRIORITY_OPTIONS: &[(&str, &str)] = &[
    ("critical", "Критический"),
    ("high", "Высокий"),
    ("medium", "Средний"),
    ("low", "Низкий"),
];

pub const FALLBACK_CATEGORY_LABEL: &str = "Другое";
pub const FALLBACK_PRIORITY_LABEL: &str = "Средний";
pub const FALLBACK_PRESET: &str = "islands#blueIcon";
pub const USER_LOCATION_PRESET: &str = "islands#blueCircleDotIcon";

pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::Sport => "Спорт",
        Category::Art => "Искусство",
        Category::Ecology => "Экология",
        Category::Infrastructure => "Инфраструктура",
        Category::Education => "Образование",
        Category::Culture => "Культура",
        Category::Other | Category::Unknown => FALLBACK_CATEGORY_LABEL,
    }
}

pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "Критический",
        Priority::High => "Высокий",
        Priority::Medium => "Средний",
        Priority::Low => "Низкий",
        Priority::Unknown => FALLBACK_PRIORITY_LABEL,
    }
}

/// Placemark preset; color encodes priority
pub fn priority_preset(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "islands#redIcon",
        Priority::High => "islands#orangeIcon",
        Priority::Medium => "islands#blueIcon",
        Priority::Low => "islands#greenIcon",
        Priority::Unknown => FALLBACK_PRESET,
    }
}

pub fn status_label(status: IdeaStatus) -> &'static str {
    match status {
        IdeaStatus::New => "Новая",
        IdeaStatus::UnderReview => "На рассмотрении",
        IdeaStatus::Approved => "Одобрена",
        IdeaStatus::InProgress => "В работе",
        IdeaStatus::Completed => "Реализована",
        IdeaStatus::Rejected => "Отклонена",
        IdeaStatus::Unknown => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(category_label(Category::Ecology), "Экология");
        assert_eq!(priority_label(Priority::Critical), "Критический");
        assert_eq!(priority_preset(Priority::Low), "islands#greenIcon");
    }

    #[test]
    fn test_unknown_values_fall_back() {
        for raw in ["", "space", "SPORT", "all"] {
            let category: Category = serde_json::from_value(serde_json::json!(raw)).unwrap();
            let priority: Priority = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(category_label(category), "Другое");
            assert_eq!(priority_label(priority), "Средний");
            assert_eq!(priority_preset(priority), "islands#blueIcon");
        }
    }

    #[test]
    fn test_option_tables_match_lookups() {
        for (value, label) in CATEGORY_OPTIONS {
            let category = Category::from_key(value).unwrap();
            assert_eq!(category_label(category), *label);
        }
        for (value, label) in PRIORITY_OPTIONS {
            let priority = Priority::from_key(value).unwrap();
            assert_eq!(priority_label(priority), *label);
        }
    }
}
